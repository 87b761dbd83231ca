//! Trait definitions for external interactions
//!
//! These traits define the boundaries between note interpretation and the
//! collaborators around it. Implementations live in other crates.

use crate::{Pole, RecordSet};

/// Trait for loading poles from an inspection table
///
/// Implemented by the ingestion layer (makeready-cli)
pub trait PoleSource {
    /// Error type for ingestion
    type Error;

    /// Load all poles in input order
    fn load_poles(&mut self) -> Result<Vec<Pole>, Self::Error>;
}

/// Trait for writing interpreted records
///
/// Implemented by the export layer (makeready-cli). A sink receives the
/// complete record set exactly once, after the whole pass has succeeded.
pub trait RecordSink {
    /// Error type for export
    type Error;

    /// Write all three record collections as one artifact
    fn write_records(&mut self, records: &RecordSet) -> Result<(), Self::Error>;
}
