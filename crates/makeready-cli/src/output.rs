//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use makeready_domain::{AttachmentRecord, RecordSet};
use makeready_notes::{HeightClause, PipelineStats};
use std::path::Path;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format the result of a make-ready run.
    pub fn format_make_ready(
        &self,
        path: &Path,
        records: &RecordSet,
        stats: &PipelineStats,
    ) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let value = serde_json::json!({
                    "artifact": path.display().to_string(),
                    "make_ready": records.make_ready.len(),
                    "attachment_info": records.attachment_info.len(),
                    "pole_details": records.pole_details.len(),
                    "stats": stats,
                });
                Ok(serde_json::to_string_pretty(&value)?)
            }
            OutputFormat::Table => {
                let mut out = self.format_records_table(&records.make_ready);
                out.push('\n');
                out.push_str(&stats.summary());
                out.push('\n');
                out.push_str(&self.artifact_written(path));
                Ok(out)
            }
            OutputFormat::Quiet => Ok(path.display().to_string()),
        }
    }

    /// Format the result of a single-sheet export.
    pub fn format_export(&self, path: &Path, rows: usize, merged_tags: usize) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let value = serde_json::json!({
                    "artifact": path.display().to_string(),
                    "rows": rows,
                    "merged_tags": merged_tags,
                });
                Ok(serde_json::to_string_pretty(&value)?)
            }
            OutputFormat::Table => Ok(format!(
                "{}\n{}",
                self.info(&format!("{} row(s), {} tag(s) merged", rows, merged_tags)),
                self.artifact_written(path)
            )),
            OutputFormat::Quiet => Ok(path.display().to_string()),
        }
    }

    /// Format make-ready rows as a table.
    fn format_records_table(&self, records: &[AttachmentRecord]) -> String {
        if records.is_empty() {
            return self.colorize("No make-ready rows.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record([
            "Pole Ref #",
            "Attacher Company",
            "Attachment Type",
            "Action",
            "Existing Height",
            "New Height",
        ]);

        for record in records {
            builder.push_record([
                record.pole.pole_ref.as_str(),
                &record.attacher_company,
                &record.attachment_type,
                &record.action,
                &record.existing_height,
                &record.new_height,
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        table.to_string()
    }

    /// Format the interpretation of one note line.
    ///
    /// `parsed` is `None` when the classifier discarded the line.
    pub fn format_parsed_line(
        &self,
        line: &str,
        parsed: Option<(&str, &HeightClause)>,
    ) -> Result<String> {
        match (self.format, parsed) {
            (OutputFormat::Json, Some((company, clause))) => {
                let value = serde_json::json!({
                    "line": line,
                    "accepted": true,
                    "attacher_company": company,
                    "clause": clause,
                });
                Ok(serde_json::to_string_pretty(&value)?)
            }
            (OutputFormat::Json, None) => {
                let value = serde_json::json!({ "line": line, "accepted": false });
                Ok(serde_json::to_string_pretty(&value)?)
            }
            (OutputFormat::Table, Some((company, clause))) => {
                let mut builder = Builder::default();
                builder.push_record(["Field", "Value"]);
                builder.push_record(["Attacher Company", company]);
                builder.push_record(["Attachment Type", &clause.attachment_type]);
                builder.push_record(["Action", &clause.action]);
                builder.push_record(["Existing Height", &clause.existing_height]);
                builder.push_record(["New Height", &clause.new_height]);

                let mut table = builder.build();
                table.with(Style::rounded());
                Ok(table.to_string())
            }
            (OutputFormat::Table, None) => Ok(self.warning(
                "Line discarded: no known company, hardware keyword or action keyword",
            )),
            (OutputFormat::Quiet, Some((company, clause))) => Ok(format!(
                "{}\t{}\t{}\t{}\t{}",
                company,
                clause.attachment_type,
                clause.action,
                clause.existing_height,
                clause.new_height
            )),
            (OutputFormat::Quiet, None) => Ok(String::new()),
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Format the artifact location.
    pub fn artifact_written(&self, path: &Path) -> String {
        self.success(&format!("Wrote {}", path.display()))
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}
