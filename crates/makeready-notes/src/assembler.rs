//! Record assembly from an accepted note line

use crate::error::NotesError;
use crate::types::HeightClause;
use makeready_domain::record::SINGLE_QUANTITY;
use makeready_domain::{
    AttachmentInfoRecord, AttachmentRecord, Cell, Pole, PoleDetailRecord, PoleRef, RecordSet,
};
use tracing::debug;

/// Street name from an address like `123 Main St, Scranton, PA 18503`
///
/// Takes the first comma-separated segment and drops its house number.
pub fn street_name(address: &str) -> Option<&str> {
    let segment = address.split(", ").next()?;
    segment.split_once(' ').map(|(_, street)| street)
}

/// Appends the records for one accepted line
#[derive(Debug, Clone)]
pub struct RecordAssembler {
    distinguished_company: String,
}

impl RecordAssembler {
    /// Create an assembler producing extra rows for `distinguished_company`
    pub fn new(distinguished_company: impl Into<String>) -> Self {
        Self {
            distinguished_company: distinguished_company.into(),
        }
    }

    /// Append the make-ready row, and for the distinguished company the
    /// attachment-info row and (once per pole) the pole-detail row
    ///
    /// Every accepted line needs a parseable address, whichever company it
    /// names.
    pub fn assemble(
        &self,
        pole: &Pole,
        company: &str,
        clause: HeightClause,
        records: &mut RecordSet,
    ) -> Result<(), NotesError> {
        let pole_ref = PoleRef::from(pole);
        let street = match &pole.address {
            Cell::Text(address) => street_name(address),
            _ => None,
        }
        .ok_or_else(|| NotesError::MalformedAddress {
            pole: pole.id.to_string(),
            address: pole.address.to_string(),
        })?;

        records.make_ready.push(AttachmentRecord {
            pole: pole_ref.clone(),
            attacher_company: company.to_string(),
            attachment_type: clause.attachment_type.clone(),
            action: clause.action,
            existing_height: clause.existing_height,
            new_height: clause.new_height.clone(),
            quantity: SINGLE_QUANTITY.to_string(),
        });

        if company != self.distinguished_company {
            return Ok(());
        }

        records.attachment_info.push(AttachmentInfoRecord {
            pole: pole_ref.clone(),
            description: clause.attachment_type,
            height: clause.new_height,
        });

        if records.has_pole_detail(&pole.id) {
            debug!(pole = %pole.id, "pole detail already recorded");
        } else {
            records.pole_details.push(PoleDetailRecord {
                pole: pole_ref,
                street_name: street.to_string(),
                latitude: pole.latitude,
                longitude: pole.longitude,
            });
        }
        Ok(())
    }
}
