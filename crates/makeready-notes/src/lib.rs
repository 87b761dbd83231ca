//! Makeready Notes
//!
//! Turns free-text make-ready inspection notes into structured records.
//!
//! # Overview
//!
//! Field crews describe the work on each pole in short sentences such as
//! `Loop Telecom Pennsylvania LLC Com at 20-6 Raise 18`. This crate reads
//! those sentences with a fixed keyword and token-position grammar, does the
//! height arithmetic exactly in inches, and assembles three record sets:
//! make-ready rows, attachment-info rows and pole-detail rows.
//!
//! # Architecture
//!
//! ```text
//! Poles → PoleIterator → LineClassifier → HeightClauseExtractor → RecordAssembler → RecordSet
//! ```
//!
//! A pass is all-or-nothing. Any malformed height, unknown token or missing
//! height clause aborts the run and no records are returned.
//!
//! # Example Usage
//!
//! ```
//! use makeready_domain::Pole;
//! use makeready_notes::NotePipeline;
//!
//! # fn main() -> Result<(), makeready_notes::NotesError> {
//! let poles = vec![
//!     Pole::new("1001")
//!         .with_note("Loop Telecom Pennsylvania LLC Com at 20-6 Raise 18")
//!         .with_address("12 Main St, Scranton, PA"),
//! ];
//!
//! let pipeline = NotePipeline::with_default_vocabulary()?;
//! let output = pipeline.run(&poles)?;
//!
//! assert_eq!(output.records.make_ready[0].new_height, "22'-0\"");
//! assert_eq!(output.records.pole_details.len(), 1);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod assembler;
mod classifier;
mod clause;
mod config;
mod error;
pub mod export;
mod pipeline;
mod types;

#[cfg(test)]
mod tests;

pub use assembler::{street_name, RecordAssembler};
pub use classifier::LineClassifier;
pub use clause::{strip_punctuation, HeightClauseExtractor, LOWER, RAISE};
pub use config::{CompanyEntry, TokenLabel, Vocabulary, VOCABULARY_VERSION};
pub use error::NotesError;
pub use pipeline::{interpret_notes, note_lines, NotePipeline, PoleIterator, SurveyedPole};
pub use types::{ClassifiedLine, HeightClause, PipelineOutput, PipelineStats};
