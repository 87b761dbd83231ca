//! Error types for the CLI application.

use makeready_notes::NotesError;
use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Note interpretation error
    #[error(transparent)]
    Notes(#[from] NotesError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Artifact could not be moved into place
    #[error("Failed to persist artifact: {0}")]
    Persist(#[from] tempfile::PersistError),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
