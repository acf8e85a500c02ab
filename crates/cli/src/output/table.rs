//! Table formatting utilities

use anyhow::Result;
use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, *};

use crate::commands::score::{FileOutcome, ScoreSummary};

/// Table formatter
pub struct TableFormatter;

impl TableFormatter {
    /// Create a new table with default styling
    pub fn new() -> Table {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .apply_modifier(UTF8_ROUND_CORNERS)
            .set_content_arrangement(ContentArrangement::Dynamic);
        table
    }

    /// One row per prediction file; 1C files get an extra row per dimension
    pub fn summary(summary: &ScoreSummary) -> Result<String> {
        let mut table = Self::new();
        table.set_header(vec![
            "File",
            "Subtask",
            "Instances",
            "Accuracy",
            "Precision",
            "Recall",
            "F1",
        ]);

        let decimals = summary.decimals;
        let value = |v: f64| Cell::new(format!("{:.prec$}", v, prec = decimals));

        for file in &summary.files {
            let name = file.path.display().to_string();
            match &file.outcome {
                FileOutcome::Scored { report } => {
                    let m = &report.metrics;
                    table.add_row(vec![
                        Cell::new(name),
                        Cell::new(report.subtask),
                        Cell::new(report.instances),
                        value(m.accuracy),
                        value(m.precision),
                        value(m.recall),
                        value(m.f1).fg(Color::Green),
                    ]);
                    for dimension in &report.dimensions {
                        let m = &dimension.metrics;
                        table.add_row(vec![
                            Cell::new(format!("  {}", dimension.dimension)),
                            Cell::new(""),
                            Cell::new(""),
                            value(m.accuracy),
                            value(m.precision),
                            value(m.recall),
                            value(m.f1),
                        ]);
                    }
                }
                FileOutcome::Skipped { reason, .. } => {
                    table.add_row(vec![
                        Cell::new(name),
                        Cell::new("skipped").fg(Color::Red),
                        Cell::new(reason),
                    ]);
                }
            }
        }

        Ok(table.to_string())
    }
}
