//! Vocabulary configuration for note interpretation
//!
//! The keyword tables live here rather than in the extraction code so that a
//! new attacher or hardware word is a config change, not a code change.

use crate::error::NotesError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Current vocabulary format version
pub const VOCABULARY_VERSION: u32 = 1;

/// A company name as written in notes and its canonical label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyEntry {
    /// Literal prefix matched case-insensitively at the start of a line
    pub pattern: String,
    /// Canonical attacher name written to records
    pub label: String,
}

/// A note token and its canonical label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenLabel {
    /// Exact token as written in notes
    pub token: String,
    /// Canonical label written to records
    pub label: String,
}

impl CompanyEntry {
    fn new(pattern: &str, label: &str) -> Self {
        Self {
            pattern: pattern.to_string(),
            label: label.to_string(),
        }
    }
}

impl TokenLabel {
    fn new(token: &str, label: &str) -> Self {
        Self {
            token: token.to_string(),
            label: label.to_string(),
        }
    }
}

/// Keyword tables driving the line classifier and clause extractor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vocabulary {
    /// Vocabulary format version
    #[serde(default = "default_version")]
    pub version: u32,

    /// Hardware keywords, at least one must appear in an accepted line
    pub hardware: Vec<String>,

    /// Action keywords, at least one must appear in an accepted line
    pub actions: Vec<String>,

    /// Attacher for which attachment-info and pole-detail rows are produced
    pub distinguished_company: String,

    /// Token that anchors the height clause
    #[serde(default = "default_anchor")]
    pub anchor: String,

    /// Characters removed from a line before tokenizing
    #[serde(default = "default_punctuation")]
    pub punctuation: String,

    /// Known companies, tried in order; first match wins
    pub companies: Vec<CompanyEntry>,

    /// Attachment-type tokens found before the anchor
    pub attachment_types: Vec<TokenLabel>,

    /// Action tokens found after the existing height
    pub action_labels: Vec<TokenLabel>,
}

fn default_version() -> u32 {
    VOCABULARY_VERSION
}

fn default_anchor() -> String {
    "at".to_string()
}

fn default_punctuation() -> String {
    ":\"'.;".to_string()
}

impl Default for Vocabulary {
    /// Built-in tables for make-ready notes on Verizon-owned poles
    fn default() -> Self {
        Self {
            version: VOCABULARY_VERSION,
            companies: vec![
                CompanyEntry::new("Verizon Pennsylvania Inc.", "VERIZON WIRELESS(AERIAL)"),
                CompanyEntry::new(
                    "CTSI, LLC, Dba Frontier Communications",
                    "FRONTIER COMMUNICATIONS",
                ),
                CompanyEntry::new("Loop Telecom Pennsylvania LLC", "LOOP INTERNET HOLDCO LLC"),
                CompanyEntry::new("Comcast", "COMCAST"),
                CompanyEntry::new("Service Electric Company", "SERVICE ELECTRIC CABLE TV"),
            ],
            hardware: vec!["Guy".to_string(), "Com".to_string(), "Strand".to_string()],
            actions: vec!["Attach".to_string(), "Raise".to_string(), "Lower".to_string()],
            attachment_types: vec![
                TokenLabel::new("Com", "Cable/Strand"),
                TokenLabel::new("Guy", "Down Guy"),
                TokenLabel::new("Strand", "Cable/Strand"),
            ],
            action_labels: vec![
                TokenLabel::new("Raise", "Raise"),
                TokenLabel::new("Lower", "Lower"),
                TokenLabel::new("Attach", "No Make Ready"),
            ],
            distinguished_company: "LOOP INTERNET HOLDCO LLC".to_string(),
            anchor: default_anchor(),
            punctuation: default_punctuation(),
        }
    }
}

impl Vocabulary {
    /// Validate the vocabulary
    pub fn validate(&self) -> Result<(), String> {
        if self.version != VOCABULARY_VERSION {
            return Err(format!(
                "unsupported vocabulary version {} (expected {})",
                self.version, VOCABULARY_VERSION
            ));
        }
        if self.companies.is_empty() {
            return Err("companies must not be empty".to_string());
        }
        if self.companies.iter().any(|c| c.pattern.is_empty()) {
            return Err("company patterns must not be empty".to_string());
        }
        if self.hardware.is_empty() {
            return Err("hardware keywords must not be empty".to_string());
        }
        if self.actions.is_empty() {
            return Err("action keywords must not be empty".to_string());
        }
        if self.attachment_types.is_empty() {
            return Err("attachment_types must not be empty".to_string());
        }
        if self.action_labels.is_empty() {
            return Err("action_labels must not be empty".to_string());
        }
        if self.anchor.is_empty() || self.anchor.contains(char::is_whitespace) {
            return Err("anchor must be a single non-empty token".to_string());
        }
        if !self
            .companies
            .iter()
            .any(|c| c.label == self.distinguished_company)
        {
            return Err(format!(
                "distinguished_company '{}' is not a company label",
                self.distinguished_company
            ));
        }
        Ok(())
    }

    /// Canonical label for an attachment-type token
    pub fn attachment_label(&self, token: &str) -> Option<&str> {
        lookup(&self.attachment_types, token)
    }

    /// Canonical label for an action token
    pub fn action_label(&self, token: &str) -> Option<&str> {
        lookup(&self.action_labels, token)
    }

    /// Load vocabulary from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize vocabulary to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }

    /// Load and validate a vocabulary file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, NotesError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| NotesError::Config(format!("{}: {}", path.display(), e)))?;
        let vocabulary = Self::from_toml(&contents).map_err(NotesError::Config)?;
        vocabulary.validate().map_err(NotesError::Config)?;
        Ok(vocabulary)
    }
}

fn lookup<'a>(table: &'a [TokenLabel], token: &str) -> Option<&'a str> {
    table
        .iter()
        .find(|entry| entry.token == token)
        .map(|entry| entry.label.as_str())
}
