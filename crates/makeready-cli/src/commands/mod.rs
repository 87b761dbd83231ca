//! Command implementations.

pub mod export;
pub mod make_ready;
pub mod parse_line;
pub mod profile;
pub mod vocabulary;

pub use self::export::{execute_export, SheetKind};
pub use self::make_ready::execute_make_ready;
pub use self::parse_line::execute_parse_line;
pub use self::profile::execute_profile;
pub use self::vocabulary::execute_vocabulary;

use crate::error::{CliError, Result};
use crate::writer::append_error_log;
use std::path::Path;
use tracing::warn;

/// Record a failed export in the error log of `dir` and pass the result on.
pub(crate) fn log_failure<T>(dir: &Path, result: Result<T>) -> Result<T> {
    if let Err(e) = &result {
        if let CliError::Notes(notes) = e {
            warn!(kind = notes.kind(), "interpretation aborted, no artifact written");
        }
        if let Err(log_err) = append_error_log(dir, e) {
            warn!(error = %log_err, "could not write error log");
        }
    }
    result
}
