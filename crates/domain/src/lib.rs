//! Hate Scorer Domain Types
//!
//! Core types shared by the scorer crates: subtasks and their file layouts,
//! label records, identifier-keyed label sets, score reports, errors and
//! format-check findings.
//!
//! ## Usage
//!
//! ```rust
//! use hate_scorer_domain::{LabelRecord, LabelSet, Subtask};
//! use std::path::Path;
//!
//! let subtask = Subtask::detect(Path::new("run_subtask_1A.tsv")).unwrap();
//! assert_eq!(subtask.expected_columns(), 3);
//!
//! let mut gold = LabelSet::new(subtask);
//! gold.insert("101", LabelRecord::single("Abusive"));
//! assert_eq!(gold.len(), 1);
//! ```

#![warn(clippy::all)]

pub mod errors;
pub mod label;
pub mod label_set;
pub mod report;
pub mod subtask;
pub mod validation;

pub use errors::{LabelMismatch, ScorerError, ScorerResult};
pub use label::{LabelDimension, LabelRecord};
pub use label_set::LabelSet;
pub use report::{ClassificationMetrics, DimensionScore, ScoreReport};
pub use subtask::{Subtask, SubtaskParseError};
pub use validation::{IssueSeverity, ValidationIssue, ValidationResult};
