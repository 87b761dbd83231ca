//! Record module - the structured rows produced from inspection notes
//!
//! Records are append-only: once created they are never modified.

use crate::pole::{Cell, Pole, PoleId};

/// Attacher shown on the placeholder row of an unsurveyed pole
pub const NOT_SURVEYED: &str = "Not Surveyed";

/// Filler for fields that do not apply to a placeholder row
pub const NOT_APPLICABLE: &str = "n/a";

/// Quantity of a parsed attachment line
pub const SINGLE_QUANTITY: &str = "1";

/// Identifiers shared by every record of one pole
#[derive(Debug, Clone, PartialEq)]
pub struct PoleRef {
    /// Pole identifier ("Pole Ref #")
    pub pole_ref: PoleId,
    /// Telco tag ("Telco Pole #")
    pub telco_tag: Cell,
    /// Elco tag ("ELCO Pole #")
    pub elco_tag: Cell,
}

impl From<&Pole> for PoleRef {
    fn from(pole: &Pole) -> Self {
        Self {
            pole_ref: pole.id.clone(),
            telco_tag: pole.telco_tag.clone(),
            elco_tag: pole.elco_tag.clone(),
        }
    }
}

/// One make-ready row
#[derive(Debug, Clone, PartialEq)]
pub struct AttachmentRecord {
    /// Pole identifiers
    pub pole: PoleRef,
    /// Canonical attacher company
    pub attacher_company: String,
    /// Canonical attachment type
    pub attachment_type: String,
    /// Canonical action
    pub action: String,
    /// Existing height, formatted
    pub existing_height: String,
    /// New height, formatted
    pub new_height: String,
    /// Quantity
    pub quantity: String,
}

impl AttachmentRecord {
    /// Placeholder row for a pole whose note is missing
    pub fn not_surveyed(pole: PoleRef) -> Self {
        Self {
            pole,
            attacher_company: NOT_SURVEYED.to_string(),
            attachment_type: NOT_APPLICABLE.to_string(),
            action: NOT_APPLICABLE.to_string(),
            existing_height: NOT_APPLICABLE.to_string(),
            new_height: NOT_APPLICABLE.to_string(),
            quantity: NOT_APPLICABLE.to_string(),
        }
    }
}

/// Attachment-info row, emitted for the distinguished company only
#[derive(Debug, Clone, PartialEq)]
pub struct AttachmentInfoRecord {
    /// Pole identifiers
    pub pole: PoleRef,
    /// Attachment description (canonical attachment type)
    pub description: String,
    /// Attachment height (the new height)
    pub height: String,
}

/// Pole-detail row, at most one per pole ref
#[derive(Debug, Clone, PartialEq)]
pub struct PoleDetailRecord {
    /// Pole identifiers
    pub pole: PoleRef,
    /// Street name without the house number
    pub street_name: String,
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
}

/// The three record collections produced by one interpretation pass
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordSet {
    /// Make-ready rows
    pub make_ready: Vec<AttachmentRecord>,
    /// Attachment-info rows
    pub attachment_info: Vec<AttachmentInfoRecord>,
    /// Pole-detail rows
    pub pole_details: Vec<PoleDetailRecord>,
}

impl RecordSet {
    /// Create an empty record set
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if a pole-detail row already exists for this pole
    pub fn has_pole_detail(&self, pole_ref: &PoleId) -> bool {
        self.pole_details.iter().any(|d| &d.pole.pole_ref == pole_ref)
    }
}
