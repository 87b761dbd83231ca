//! Pole module - one inspected utility structure per input row

use std::fmt;

/// A spreadsheet cell as delivered by ingestion
///
/// Tags and notes come from loosely typed spreadsheet columns, so a tag may
/// arrive as a number and a note may be missing entirely.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Cell {
    /// Empty or missing cell
    #[default]
    Empty,
    /// Text cell
    Text(String),
    /// Numeric cell
    Number(f64),
}

impl Cell {
    /// Create a text cell
    pub fn text(value: impl Into<String>) -> Self {
        Cell::Text(value.into())
    }

    /// Get the text content, if this is a text cell
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Cell::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Check if the cell is empty
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Empty => Ok(()),
            Cell::Text(s) => f.write_str(s),
            // Spreadsheet readers hand integral tags back as floats
            Cell::Number(n) if n.fract() == 0.0 && n.abs() < i64::MAX as f64 => {
                write!(f, "{}", *n as i64)
            }
            Cell::Number(n) => write!(f, "{}", n),
        }
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Text(value.to_string())
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Cell::Text(value)
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Cell::Number(value)
    }
}

/// Pole identifier (the SCID column)
///
/// Only purely numeric identifiers are surveyed poles; anything else marks a
/// reference pole.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PoleId(String);

impl PoleId {
    /// Create a pole identifier
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Get identifier as string
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check if the identifier is non-empty and all ASCII digits
    pub fn is_numeric(&self) -> bool {
        !self.0.is_empty() && self.0.chars().all(|c| c.is_ascii_digit())
    }
}

impl fmt::Display for PoleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A named candidate tag column used by the tag merge
#[derive(Debug, Clone, PartialEq)]
pub struct TagCandidate {
    /// Source column name
    pub column: String,
    /// Cell value in that column
    pub value: Cell,
}

/// One inspected pole, immutable once read from the source table
#[derive(Debug, Clone, PartialEq)]
pub struct Pole {
    /// Pole identifier
    pub id: PoleId,

    /// Latitude in decimal degrees
    pub latitude: f64,

    /// Longitude in decimal degrees
    pub longitude: f64,

    /// Telephone company tag (the "Telco Pole #")
    pub telco_tag: Cell,

    /// Electric company tag (the "ELCO Pole #")
    pub elco_tag: Cell,

    /// Street address, e.g. `123 Main St, Scranton, PA`
    pub address: Cell,

    /// Canonical owner name
    pub owner: String,

    /// Pole type as recorded in the survey
    pub pole_type: Cell,

    /// Free-text make-ready notes
    pub note: Cell,

    /// Candidate tag columns present for this pole, in column order
    pub tag_candidates: Vec<TagCandidate>,
}

/// How a pole takes part in note interpretation
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PoleState<'a> {
    /// Non-numeric identifier, excluded from all record generation
    Reference,
    /// Note is missing or not text
    Unsurveyed,
    /// Note text to interpret
    Surveyed(&'a str),
}

impl Pole {
    /// Create a pole with the given identifier and blank fields
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: PoleId::new(id),
            latitude: 0.0,
            longitude: 0.0,
            telco_tag: Cell::Empty,
            elco_tag: Cell::Empty,
            address: Cell::Empty,
            owner: String::new(),
            pole_type: Cell::Empty,
            note: Cell::Empty,
            tag_candidates: Vec::new(),
        }
    }

    /// Set the note text
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Cell::Text(note.into());
        self
    }

    /// Set the telco and elco tags
    pub fn with_tags(mut self, telco: impl Into<Cell>, elco: impl Into<Cell>) -> Self {
        self.telco_tag = telco.into();
        self.elco_tag = elco.into();
        self
    }

    /// Set the street address
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Cell::Text(address.into());
        self
    }

    /// Set the coordinates
    pub fn with_location(mut self, latitude: f64, longitude: f64) -> Self {
        self.latitude = latitude;
        self.longitude = longitude;
        self
    }

    /// Classify the pole for interpretation
    pub fn state(&self) -> PoleState<'_> {
        if !self.id.is_numeric() {
            return PoleState::Reference;
        }
        match self.note.as_text() {
            Some(text) => PoleState::Surveyed(text),
            None => PoleState::Unsurveyed,
        }
    }
}
