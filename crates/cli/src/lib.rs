//! Command-line scorer for the hate speech detection shared task
//!
//! Prediction files are checked, scored against a gold file, and the results
//! logged; a summary can also be printed as JSON, a table or plain text.

pub mod commands;
pub mod output;

pub use commands::score::{FileOutcome, FileScore, ScoreArgs, ScoreSummary};
pub use commands::CommandContext;
pub use output::{Formattable, JsonFormatter, OutputFormat, PlainFormatter, TableFormatter};

/// Re-export common types
pub use anyhow::{Context, Result};
