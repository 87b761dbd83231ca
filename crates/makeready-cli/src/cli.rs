//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Makeready CLI - Turn pole inspection notes into make-ready exports.
#[derive(Debug, Parser)]
#[command(name = "makeready")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "MAKEREADY_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log debug events to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (artifact paths only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Interpret make-ready notes and write the make-ready workbook
    MakeReady(MakeReadyArgs),

    /// Write the pole import sheet with merged tags
    Vetro(ExportArgs),

    /// Write the make-ready notes sheet with merged tags
    Mrn(ExportArgs),

    /// Interpret a single note line
    ParseLine(ParseLineArgs),

    /// Print the active vocabulary as TOML
    Vocabulary(VocabularyArgs),

    /// Manage the configuration file
    Profile(ProfileArgs),
}

/// Arguments shared by every export.
#[derive(Debug, Parser)]
pub struct ExportArgs {
    /// JSON file containing pole rows
    pub input: PathBuf,

    /// Output directory (defaults to the configured one, then the input's directory)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Base name for the written artifact
    #[arg(short, long)]
    pub name: String,
}

/// Arguments for the make-ready command.
#[derive(Debug, Parser)]
pub struct MakeReadyArgs {
    #[command(flatten)]
    pub export: ExportArgs,

    /// Only interpret poles with this canonical owner
    #[arg(long)]
    pub owner: Option<String>,

    /// Vocabulary TOML file
    #[arg(long)]
    pub vocabulary: Option<PathBuf>,
}

/// Arguments for the parse-line command.
#[derive(Debug, Parser)]
pub struct ParseLineArgs {
    /// Note line, e.g. "Comcast Com at 20-6 Raise 18"
    pub line: String,

    /// Vocabulary TOML file
    #[arg(long)]
    pub vocabulary: Option<PathBuf>,
}

/// Arguments for the vocabulary command.
#[derive(Debug, Parser)]
pub struct VocabularyArgs {
    /// Vocabulary TOML file to validate and print
    #[arg(long)]
    pub vocabulary: Option<PathBuf>,
}

/// Arguments for configuration management.
#[derive(Debug, Parser)]
pub struct ProfileArgs {
    #[command(subcommand)]
    pub action: ProfileAction,
}

/// Configuration actions.
#[derive(Debug, Subcommand)]
pub enum ProfileAction {
    /// Show the active configuration
    Show,

    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}
