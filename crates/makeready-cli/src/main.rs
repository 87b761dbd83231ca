//! Makeready CLI - Command-line interface for make-ready note exports.

use clap::Parser;
use makeready_cli::commands::{self, SheetKind};
use makeready_cli::{Cli, Command, Config, Formatter};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    // Log to stderr so stdout stays machine-readable
    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> makeready_cli::Result<()> {
    let config_path = match cli.config {
        Some(path) => path,
        None => Config::path()?,
    };
    let config = Config::load(&config_path)?;

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    let formatter = Formatter::new(format, color_enabled);

    match cli.command {
        Command::MakeReady(args) => commands::execute_make_ready(args, &config, &formatter),
        Command::Vetro(args) => {
            commands::execute_export(SheetKind::Vetro, args, &config, &formatter)
        }
        Command::Mrn(args) => commands::execute_export(SheetKind::Mrn, args, &config, &formatter),
        Command::ParseLine(args) => commands::execute_parse_line(args, &config, &formatter),
        Command::Vocabulary(args) => commands::execute_vocabulary(args, &config),
        Command::Profile(args) => {
            commands::execute_profile(args, &config, &config_path, &formatter)
        }
    }
}
