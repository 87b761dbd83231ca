//! Parse-line command implementation.

use crate::cli::ParseLineArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use makeready_notes::{HeightClause, NotePipeline};

/// Pole label used in errors for a line given on the command line
const COMMAND_LINE_POLE: &str = "<command line>";

/// Execute the parse-line command.
pub fn execute_parse_line(args: ParseLineArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let vocabulary = config.vocabulary(args.vocabulary.as_deref())?;
    let pipeline = NotePipeline::new(vocabulary)?;

    let parsed = parse_line(&pipeline, &args.line)?;
    let output = formatter.format_parsed_line(
        &args.line,
        parsed.as_ref().map(|(company, clause)| (company.as_str(), clause)),
    )?;
    if !output.is_empty() {
        println!("{}", output);
    }
    Ok(())
}

/// Classify and extract one line.
///
/// Returns `None` for a line the classifier discards.
fn parse_line(pipeline: &NotePipeline, line: &str) -> Result<Option<(String, HeightClause)>> {
    let Some(classified) = pipeline.classifier().classify(line) else {
        return Ok(None);
    };
    let clause = pipeline
        .extractor()
        .extract(COMMAND_LINE_POLE, classified.remainder)?;
    Ok(Some((classified.company.to_string(), clause)))
}
