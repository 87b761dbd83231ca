//! Intermediate and result types for note interpretation

use makeready_domain::RecordSet;
use serde::Serialize;

/// A note line that named a known company and mentions hardware and an action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedLine<'a> {
    /// Canonical attacher label
    pub company: &'a str,
    /// Line text after the matched company prefix
    pub remainder: &'a str,
}

/// Fields pulled from the height clause of a classified line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeightClause {
    /// Canonical attachment type
    pub attachment_type: String,
    /// Canonical action
    pub action: String,
    /// Existing height, formatted `feet'-inches"`
    pub existing_height: String,
    /// New height, formatted `feet'-inches"`
    pub new_height: String,
}

/// Counters collected during one interpretation pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PipelineStats {
    /// Poles visited
    pub poles_seen: usize,
    /// Reference poles skipped
    pub reference_poles: usize,
    /// Poles with no note text
    pub unsurveyed_poles: usize,
    /// Note lines examined
    pub lines_seen: usize,
    /// Note lines turned into records
    pub lines_accepted: usize,
}

impl PipelineStats {
    /// Note lines discarded by the classifier
    pub fn lines_discarded(&self) -> usize {
        self.lines_seen - self.lines_accepted
    }

    /// Generate a summary report
    pub fn summary(&self) -> String {
        [
            format!("Poles seen: {}", self.poles_seen),
            format!("Reference poles skipped: {}", self.reference_poles),
            format!("Unsurveyed poles: {}", self.unsurveyed_poles),
            format!("Note lines: {}", self.lines_seen),
            format!("  accepted: {}", self.lines_accepted),
            format!("  discarded: {}", self.lines_discarded()),
        ]
        .join("\n")
    }
}

/// Result of a successful interpretation pass
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PipelineOutput {
    /// The three record collections
    pub records: RecordSet,
    /// Pass counters
    pub stats: PipelineStats,
}
