//! Configuration management for scoring runs.
//!
//! Settings are layered, later sources overriding earlier ones:
//! 1. Built-in defaults
//! 2. `scorer.toml` in the working directory (if present)
//! 3. An explicit file passed by the caller (must exist)
//! 4. Environment variables prefixed with `SCORER_`
//!
//! ## Example Configuration
//!
//! ```toml
//! log_level = "debug"
//! json_logging = false
//! decimals = 4
//! strict_format = true
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Scorer configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScorerConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Emit log lines as JSON
    #[serde(default)]
    pub json_logging: bool,

    /// Decimal places in the reported metrics
    #[serde(default = "default_decimals")]
    pub decimals: usize,

    /// Run the format checker on each prediction file before parsing it
    #[serde(default = "default_strict_format")]
    pub strict_format: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_decimals() -> usize {
    4
}

fn default_strict_format() -> bool {
    true
}

impl Default for ScorerConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            json_logging: false,
            decimals: default_decimals(),
            strict_format: default_strict_format(),
        }
    }
}

impl ScorerConfig {
    /// Load configuration from files and the environment.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use hate_scorer_common::config::ScorerConfig;
    ///
    /// let config = ScorerConfig::load(None).expect("Failed to load configuration");
    /// println!("Reporting {} decimals", config.decimals);
    /// ```
    pub fn load(file: Option<&Path>) -> Result<Self> {
        let mut builder = config::Config::builder()
            .set_default("log_level", default_log_level())?
            .set_default("json_logging", false)?
            .set_default("decimals", default_decimals() as u64)?
            .set_default("strict_format", default_strict_format())?
            .add_source(config::File::with_name("scorer").required(false));

        if let Some(file) = file {
            builder = builder.add_source(config::File::from(file).required(true));
        }

        // Example: SCORER_LOG_LEVEL=debug
        let settings = builder
            .add_source(config::Environment::with_prefix("SCORER").try_parsing(true))
            .build()
            .context("Failed to build configuration")?;

        let scorer_config: ScorerConfig = settings
            .try_deserialize()
            .context("Failed to deserialize configuration")?;

        scorer_config.validate()?;

        Ok(scorer_config)
    }

    /// Check value ranges.
    pub fn validate(&self) -> Result<()> {
        if !LOG_LEVELS.contains(&self.log_level.to_ascii_lowercase().as_str()) {
            anyhow::bail!(
                "Invalid log level '{}', expected one of {}",
                self.log_level,
                LOG_LEVELS.join(", ")
            );
        }

        if !(1..=10).contains(&self.decimals) {
            anyhow::bail!("Decimals must be between 1 and 10, got {}", self.decimals);
        }

        Ok(())
    }
}
