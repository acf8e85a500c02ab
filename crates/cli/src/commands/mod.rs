//! CLI commands

pub mod score;

use crate::output::OutputFormat;
use hate_scorer_common::ScorerConfig;

/// Context passed to all commands
pub struct CommandContext {
    pub config: ScorerConfig,
    /// Summary printed to stdout after the run, if any
    pub output_format: Option<OutputFormat>,
}

impl CommandContext {
    /// Create a new command context
    pub fn new(config: ScorerConfig, output_format: Option<OutputFormat>) -> Self {
        Self {
            config,
            output_format,
        }
    }
}
