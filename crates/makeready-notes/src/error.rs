//! Error types for note interpretation

use makeready_domain::HeightError;
use thiserror::Error;

/// Errors that abort a note interpretation pass
///
/// None of these are recovered line by line: one bad note line fails the
/// whole run.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NotesError {
    /// Height or magnitude token is not in integer `feet-inches` form
    #[error("Malformed height on pole {pole}: {source}")]
    MalformedHeight {
        /// Pole being interpreted
        pole: String,
        /// Underlying height error
        #[source]
        source: HeightError,
    },

    /// Token before the anchor is not a known attachment type
    #[error("Unknown attachment type '{token}' on pole {pole}")]
    UnknownAttachmentType {
        /// Pole being interpreted
        pole: String,
        /// The unrecognised token
        token: String,
    },

    /// Action token is not a known action
    #[error("Unknown action '{token}' on pole {pole}")]
    UnknownAction {
        /// Pole being interpreted
        pole: String,
        /// The unrecognised token
        token: String,
    },

    /// Accepted line has no complete height clause
    #[error("Missing height clause on pole {pole}: '{line}'")]
    MissingHeightClause {
        /// Pole being interpreted
        pole: String,
        /// The offending note line
        line: String,
    },

    /// Address has no street name after the house number
    #[error("Malformed address on pole {pole}: '{address}'")]
    MalformedAddress {
        /// Pole being interpreted
        pole: String,
        /// The offending address
        address: String,
    },

    /// Invalid vocabulary configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl NotesError {
    /// Attach a pole identifier to a height error
    pub(crate) fn height(pole: &str, source: HeightError) -> Self {
        NotesError::MalformedHeight {
            pole: pole.to_string(),
            source,
        }
    }

    /// Short kind name, used in logs and summaries
    pub fn kind(&self) -> &'static str {
        match self {
            NotesError::MalformedHeight { .. } => "MalformedHeight",
            NotesError::UnknownAttachmentType { .. } => "UnknownAttachmentType",
            NotesError::UnknownAction { .. } => "UnknownAction",
            NotesError::MissingHeightClause { .. } => "MissingHeightClause",
            NotesError::MalformedAddress { .. } => "MalformedAddress",
            NotesError::Config(_) => "Config",
        }
    }
}

impl From<regex::Error> for NotesError {
    fn from(e: regex::Error) -> Self {
        NotesError::Config(e.to_string())
    }
}
