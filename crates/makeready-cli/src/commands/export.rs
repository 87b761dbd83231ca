//! Pole sheet exports (Vetro import and make-ready notes).

use crate::cli::ExportArgs;
use crate::commands::log_failure;
use crate::config::Config;
use crate::error::Result;
use crate::ingest::JsonPoleSource;
use crate::output::Formatter;
use crate::writer::{artifact_name, ArtifactWriter, MRN_SUFFIX, VETRO_SUFFIX};
use makeready_domain::merge_tags;
use makeready_domain::traits::PoleSource;
use makeready_notes::export::{mrn_sheet, vetro_sheet, Workbook};
use std::path::{Path, PathBuf};
use tracing::info;

/// Which pole sheet to export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetKind {
    /// Latitude, Longitude, SCID, Pole Type, Tag, Owner
    Vetro,
    /// SCID, Tag, Latitude, Longitude, Make Ready Notes
    Mrn,
}

impl SheetKind {
    fn suffix(self) -> &'static str {
        match self {
            SheetKind::Vetro => VETRO_SUFFIX,
            SheetKind::Mrn => MRN_SUFFIX,
        }
    }
}

/// Execute a pole sheet export.
pub fn execute_export(
    kind: SheetKind,
    args: ExportArgs,
    config: &Config,
    formatter: &Formatter,
) -> Result<()> {
    let dir = config.output_dir(args.output.as_deref(), &args.input);
    let (path, rows, merged) = log_failure(&dir, run(kind, &args, &dir))?;

    println!("{}", formatter.format_export(&path, rows, merged)?);
    Ok(())
}

fn run(kind: SheetKind, args: &ExportArgs, dir: &Path) -> Result<(PathBuf, usize, usize)> {
    let mut poles = JsonPoleSource::open(&args.input)?.load_poles()?;
    let merged = merge_tags(&mut poles);
    info!(poles = poles.len(), merged, "tags merged");

    let sheet = match kind {
        SheetKind::Vetro => vetro_sheet(&poles),
        SheetKind::Mrn => mrn_sheet(&poles),
    };
    let rows = sheet.row_count();

    let writer = ArtifactWriter::new(dir, &artifact_name(&args.name, kind.suffix()));
    writer.write_workbook(&Workbook {
        sheets: vec![sheet],
    })?;
    Ok((writer.path().to_path_buf(), rows, merged))
}
