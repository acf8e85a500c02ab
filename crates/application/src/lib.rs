//! Scoring logic for the hate speech detection shared task
//!
//! ## Modules
//!
//! - `scoring` - Label file parsing, identifier checks and metrics
//! - `format_checker` - Structural checks run on submissions before scoring
//!
//! ## Example
//!
//! ```no_run
//! use hate_scorer_application::{check_format, evaluate};
//! use std::path::Path;
//!
//! let pred = Path::new("run1_subtask_1A.tsv");
//! let gold = Path::new("gold_subtask_1A.tsv");
//!
//! if check_format(pred) {
//!     let report = evaluate(pred, gold)?;
//!     println!("{}", report.metrics.format_line(4));
//! }
//! # Ok::<(), hate_scorer_domain::ScorerError>(())
//! ```

pub mod format_checker;
pub mod scoring;

pub use format_checker::{
    check_format, check_format_as, inspect_content, inspect_format, inspect_format_as,
    validate_files,
};
pub use scoring::{
    classification_metrics, correct_labels, evaluate, evaluate_1c, evaluate_subtask,
    label_mismatch, read_gold_file, read_labels, read_prediction_file, FileRole, LabelSource,
};

pub use hate_scorer_domain::{ScorerError, ScorerResult};
