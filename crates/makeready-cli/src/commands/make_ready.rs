//! Make-ready command implementation.

use crate::cli::MakeReadyArgs;
use crate::commands::log_failure;
use crate::config::Config;
use crate::error::Result;
use crate::ingest::JsonPoleSource;
use crate::output::Formatter;
use crate::writer::{artifact_name, ArtifactWriter, MAKE_READY_SUFFIX};
use makeready_domain::traits::{PoleSource, RecordSink};
use makeready_domain::{merge_tags, Pole};
use makeready_notes::{NotePipeline, PipelineOutput};
use std::path::{Path, PathBuf};
use tracing::info;

/// Execute the make-ready command.
pub fn execute_make_ready(
    args: MakeReadyArgs,
    config: &Config,
    formatter: &Formatter,
) -> Result<()> {
    let dir = config.output_dir(args.export.output.as_deref(), &args.export.input);
    let (path, output) = log_failure(&dir, run(&args, config, &dir))?;

    println!(
        "{}",
        formatter.format_make_ready(&path, &output.records, &output.stats)?
    );
    Ok(())
}

/// Interpret the owner's poles and write the workbook.
///
/// Elco tags are merged across the whole table before the owner filter.
/// Nothing is written unless every note line was interpreted.
fn run(args: &MakeReadyArgs, config: &Config, dir: &Path) -> Result<(PathBuf, PipelineOutput)> {
    let vocabulary = config.vocabulary(args.vocabulary.as_deref())?;
    let pipeline = NotePipeline::new(vocabulary)?;

    let mut poles = JsonPoleSource::open(&args.export.input)?.load_poles()?;
    let merged = merge_tags(&mut poles);
    let owner = args.owner.as_deref().unwrap_or(&config.settings.owner);
    let selected = select_owner(poles, owner);
    info!(owner, poles = selected.len(), merged, "selected poles");

    let output = pipeline.run(&selected)?;

    let mut writer = ArtifactWriter::new(dir, &artifact_name(&args.export.name, MAKE_READY_SUFFIX));
    writer.write_records(&output.records)?;
    Ok((writer.path().to_path_buf(), output))
}

/// Keep only poles owned by `owner`, in input order.
fn select_owner(poles: Vec<Pole>, owner: &str) -> Vec<Pole> {
    poles.into_iter().filter(|p| p.owner == owner).collect()
}
