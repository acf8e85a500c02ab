//! Shared plumbing for the scorer crates:
//! - Configuration loading
//! - Logging setup

pub mod config;
pub mod telemetry;

pub use config::ScorerConfig;
pub use telemetry::init_tracing;
