//! Makeready CLI library.
//!
//! This library provides the core functionality for the makeready command-line interface,
//! including pole ingestion, artifact writing, configuration management, command execution,
//! and output formatting.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod ingest;
pub mod output;
pub mod writer;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;
