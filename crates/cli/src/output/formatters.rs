//! Output formatters

use anyhow::Result;
use serde::Serialize;

use crate::commands::score::{FileOutcome, ScoreSummary};

/// JSON formatter
pub struct JsonFormatter;

impl JsonFormatter {
    /// Format a value as pretty JSON
    pub fn format<T: Serialize>(value: &T) -> Result<String> {
        Ok(serde_json::to_string_pretty(value)?)
    }
}

/// Plain text formatter
pub struct PlainFormatter;

impl PlainFormatter {
    /// One line per prediction file: the path, then either the metrics line
    /// or `skipped: <reason>`, separated by a tab
    pub fn summary(summary: &ScoreSummary) -> Result<String> {
        let lines: Vec<String> = summary
            .files
            .iter()
            .map(|file| match &file.outcome {
                FileOutcome::Scored { report } => format!(
                    "{}\t{}",
                    file.path.display(),
                    report.metrics.format_line(summary.decimals)
                ),
                FileOutcome::Skipped { reason, .. } => {
                    format!("{}\tskipped: {}", file.path.display(), reason)
                }
            })
            .collect();
        Ok(lines.join("\n"))
    }
}
