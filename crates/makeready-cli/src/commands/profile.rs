//! Profile command implementation.

use crate::cli::{ProfileAction, ProfileArgs};
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use std::path::Path;

/// Execute the profile command.
///
/// `path` is the configuration file in use.
pub fn execute_profile(
    args: ProfileArgs,
    config: &Config,
    path: &Path,
    formatter: &Formatter,
) -> Result<()> {
    match args.action {
        ProfileAction::Show => show_config(config, path, formatter),
        ProfileAction::Init { force } => {
            let message = init_config(path, force, formatter)?;
            println!("{}", message);
            Ok(())
        }
    }
}

/// Show the active configuration.
fn show_config(config: &Config, path: &Path, formatter: &Formatter) -> Result<()> {
    let source = if path.exists() {
        path.display().to_string()
    } else {
        format!("{} (not found, using defaults)", path.display())
    };
    let contents = toml::to_string_pretty(config)
        .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))?;

    println!("{}", formatter.info(&format!("Configuration: {}", source)));
    println!("{}", contents.trim_end());
    Ok(())
}

/// Write a default configuration file.
fn init_config(path: &Path, force: bool, formatter: &Formatter) -> Result<String> {
    if path.exists() && !force {
        return Ok(formatter.warning(&format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }

    Config::default().save(path)?;
    Ok(formatter.success(&format!("Wrote {}", path.display())))
}
