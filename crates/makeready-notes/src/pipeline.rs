//! The note pipeline: poles in, three record collections out

use crate::assembler::RecordAssembler;
use crate::classifier::LineClassifier;
use crate::clause::HeightClauseExtractor;
use crate::config::Vocabulary;
use crate::error::NotesError;
use crate::types::{PipelineOutput, PipelineStats};
use makeready_domain::{AttachmentRecord, Pole, PoleRef, PoleState, RecordSet};
use tracing::{debug, info};

/// One pole that takes part in interpretation
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SurveyedPole<'a> {
    /// Numeric pole without note text
    Unsurveyed(&'a Pole),
    /// Numeric pole with its note text
    Surveyed(&'a Pole, &'a str),
}

/// Walks poles in input order, skipping reference poles
#[derive(Debug, Clone)]
pub struct PoleIterator<'a> {
    poles: std::slice::Iter<'a, Pole>,
    skipped: usize,
}

impl<'a> PoleIterator<'a> {
    /// Iterate over `poles`
    pub fn new(poles: &'a [Pole]) -> Self {
        Self {
            poles: poles.iter(),
            skipped: 0,
        }
    }

    /// Reference poles skipped so far
    pub fn skipped(&self) -> usize {
        self.skipped
    }
}

impl<'a> Iterator for PoleIterator<'a> {
    type Item = SurveyedPole<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        for pole in self.poles.by_ref() {
            match pole.state() {
                PoleState::Reference => {
                    debug!(pole = %pole.id, "skipping reference pole");
                    self.skipped += 1;
                }
                PoleState::Unsurveyed => return Some(SurveyedPole::Unsurveyed(pole)),
                PoleState::Surveyed(note) => return Some(SurveyedPole::Surveyed(pole, note)),
            }
        }
        None
    }
}

/// Split a note into lines on runs of newlines
pub fn note_lines(note: &str) -> impl Iterator<Item = &str> {
    note.split('\n').filter(|line| !line.is_empty())
}

/// Interprets make-ready notes for a table of poles
///
/// A pass is all-or-nothing: the first error from any line aborts the run
/// and no records are returned.
#[derive(Debug, Clone)]
pub struct NotePipeline {
    vocabulary: Vocabulary,
    classifier: LineClassifier,
    assembler: RecordAssembler,
}

impl NotePipeline {
    /// Create a pipeline over a validated vocabulary
    pub fn new(vocabulary: Vocabulary) -> Result<Self, NotesError> {
        vocabulary.validate().map_err(NotesError::Config)?;
        let classifier = LineClassifier::new(&vocabulary)?;
        let assembler = RecordAssembler::new(vocabulary.distinguished_company.clone());
        Ok(Self {
            vocabulary,
            classifier,
            assembler,
        })
    }

    /// Create a pipeline with the built-in vocabulary
    pub fn with_default_vocabulary() -> Result<Self, NotesError> {
        Self::new(Vocabulary::default())
    }

    /// The active vocabulary
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// The line classifier
    pub fn classifier(&self) -> &LineClassifier {
        &self.classifier
    }

    /// The height clause extractor
    pub fn extractor(&self) -> HeightClauseExtractor<'_> {
        HeightClauseExtractor::new(&self.vocabulary)
    }

    /// Interpret all poles
    pub fn run(&self, poles: &[Pole]) -> Result<PipelineOutput, NotesError> {
        let mut records = RecordSet::new();
        let mut stats = PipelineStats {
            poles_seen: poles.len(),
            ..PipelineStats::default()
        };

        info!(poles = poles.len(), "interpreting make-ready notes");

        let mut iter = PoleIterator::new(poles);
        for surveyed in iter.by_ref() {
            match surveyed {
                SurveyedPole::Unsurveyed(pole) => {
                    stats.unsurveyed_poles += 1;
                    records
                        .make_ready
                        .push(AttachmentRecord::not_surveyed(PoleRef::from(pole)));
                }
                SurveyedPole::Surveyed(pole, note) => {
                    self.interpret_note(pole, note, &mut records, &mut stats)?;
                }
            }
        }
        stats.reference_poles = iter.skipped();

        info!(
            make_ready = records.make_ready.len(),
            attachment_info = records.attachment_info.len(),
            pole_details = records.pole_details.len(),
            lines_accepted = stats.lines_accepted,
            lines_discarded = stats.lines_discarded(),
            "interpretation complete"
        );

        Ok(PipelineOutput { records, stats })
    }

    fn interpret_note(
        &self,
        pole: &Pole,
        note: &str,
        records: &mut RecordSet,
        stats: &mut PipelineStats,
    ) -> Result<(), NotesError> {
        let extractor = self.extractor();

        for line in note_lines(note) {
            stats.lines_seen += 1;

            let Some(classified) = self.classifier.classify(line) else {
                debug!(pole = %pole.id, line, "discarding note line");
                continue;
            };

            let clause = extractor.extract(pole.id.as_str(), classified.remainder)?;
            self.assembler
                .assemble(pole, classified.company, clause, records)?;
            stats.lines_accepted += 1;
        }
        Ok(())
    }
}

/// Interpret notes with the built-in vocabulary and return the records
pub fn interpret_notes(poles: &[Pole]) -> Result<RecordSet, NotesError> {
    let pipeline = NotePipeline::with_default_vocabulary()?;
    Ok(pipeline.run(poles)?.records)
}
