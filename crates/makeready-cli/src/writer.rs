//! Artifact writing and the export error log.
//!
//! Artifacts are written to a temporary file in the destination directory
//! and renamed into place, so a reader never sees a partial file.

use crate::error::Result;
use makeready_domain::traits::RecordSink;
use makeready_domain::RecordSet;
use makeready_notes::export::{make_ready_workbook, Workbook};
use serde::Serialize;
use std::fmt::Display;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};
use tempfile::NamedTempFile;
use tracing::{debug, info};
use uuid::Uuid;

/// Suffix of the make-ready workbook
pub const MAKE_READY_SUFFIX: &str = "verizon-MRS.json";
/// Suffix of the pole import sheet
pub const VETRO_SUFFIX: &str = "Vetro-data.json";
/// Suffix of the make-ready notes sheet
pub const MRN_SUFFIX: &str = "MRN-data.json";
/// Error log file name inside the output directory
pub const ERROR_LOG: &str = "error.log";

/// Artifact file name for an export
pub fn artifact_name(name: &str, suffix: &str) -> String {
    format!("{}-{}", name, suffix)
}

fn current_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// On-disk artifact document.
#[derive(Debug, Serialize)]
struct Artifact<'a> {
    run_id: String,
    generated_at: u64,
    sheets: &'a Workbook,
}

/// Writes one export artifact atomically.
#[derive(Debug, Clone)]
pub struct ArtifactWriter {
    path: PathBuf,
    run_id: Uuid,
}

impl ArtifactWriter {
    /// Create a writer for `dir/file_name` with a fresh run id.
    pub fn new(dir: &Path, file_name: &str) -> Self {
        Self {
            path: dir.join(file_name),
            run_id: Uuid::now_v7(),
        }
    }

    /// Destination path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Run identifier stamped into the artifact
    pub fn run_id(&self) -> Uuid {
        self.run_id
    }

    /// Serialize `workbook` and move it into place.
    pub fn write_workbook(&self, workbook: &Workbook) -> Result<()> {
        let dir = match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir)?;

        let artifact = Artifact {
            run_id: self.run_id.to_string(),
            generated_at: current_timestamp(),
            sheets: workbook,
        };

        let mut tmp = NamedTempFile::new_in(dir)?;
        serde_json::to_writer_pretty(&mut tmp, &artifact)?;
        tmp.write_all(b"\n")?;
        tmp.persist(&self.path)?;

        info!(
            path = %self.path.display(),
            run_id = %self.run_id,
            sheets = workbook.sheets.len(),
            "artifact written"
        );
        Ok(())
    }
}

impl RecordSink for ArtifactWriter {
    type Error = crate::error::CliError;

    fn write_records(&mut self, records: &RecordSet) -> Result<()> {
        self.write_workbook(&make_ready_workbook(records))
    }
}

/// Append one line describing `error` to the error log in `dir`.
pub fn append_error_log(dir: &Path, error: &dyn Display) -> Result<()> {
    fs::create_dir_all(dir)?;
    let path = dir.join(ERROR_LOG);
    let mut file = OpenOptions::new().create(true).append(true).open(&path)?;
    let message = error.to_string().replace('\n', " ");
    writeln!(file, "{}", message)?;
    debug!(path = %path.display(), "error logged");
    Ok(())
}
