//! Makeready Domain Layer
//!
//! Core types for turning pole inspection notes into make-ready records.
//! This crate holds no parsing or I/O; it defines the values that every
//! other layer passes around and the traits for the collaborators at the
//! edges.
//!
//! ## Key Concepts
//!
//! - **Pole**: one inspected utility structure (a row of the input table)
//! - **HeightValue**: an exact total-inch height with `feet'-inches"` formatting
//! - **Records**: make-ready, attachment-info and pole-detail rows
//! - **Tag merge**: fallback tag selection for poles without a primary tag

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod height;
pub mod pole;
pub mod record;
pub mod tags;
pub mod traits;

// Re-exports for convenience
pub use height::{format_raw, HeightError, HeightValue};
pub use pole::{Cell, Pole, PoleId, PoleState, TagCandidate};
pub use record::{
    AttachmentInfoRecord, AttachmentRecord, PoleDetailRecord, PoleRef, RecordSet,
};
pub use tags::merge_tags;
