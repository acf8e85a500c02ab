//! Scoring module - reading labels and computing metrics
//!
//! Files are parsed into label sets, checked for matching identifiers,
//! aligned in gold order and then scored.

pub mod alignment;
pub mod evaluator;
pub mod metrics;
pub mod parser;
pub mod validator;

pub use alignment::{align_single, align_triple, AlignedLabels, DimensionAlignment};
pub use evaluator::{evaluate, evaluate_1c, evaluate_subtask, LabelSource};
pub use metrics::{classification_metrics, ClassCounts, ConfusionCounts};
pub use parser::{parse_labels, read_gold_file, read_labels, read_prediction_file, FileRole};
pub use validator::{correct_labels, label_mismatch};
