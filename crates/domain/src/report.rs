//! Score reports produced by the evaluator.

use crate::label::LabelDimension;
use crate::subtask::Subtask;
use serde::{Deserialize, Serialize};

/// The four competition metrics.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ClassificationMetrics {
    /// Fraction of exact label matches
    pub accuracy: f64,
    /// Precision averaged over classes, weighted by gold support
    pub precision: f64,
    /// Recall averaged over classes, weighted by gold support
    pub recall: f64,
    /// F1 from pooled confusion counts
    pub f1: f64,
}

impl ClassificationMetrics {
    /// Unweighted arithmetic mean of each metric. Returns zeros for no input.
    pub fn mean(metrics: &[ClassificationMetrics]) -> Self {
        if metrics.is_empty() {
            return Self::default();
        }

        let n = metrics.len() as f64;
        let sum = metrics.iter().fold(Self::default(), |acc, m| Self {
            accuracy: acc.accuracy + m.accuracy,
            precision: acc.precision + m.precision,
            recall: acc.recall + m.recall,
            f1: acc.f1 + m.f1,
        });

        Self {
            accuracy: sum.accuracy / n,
            precision: sum.precision / n,
            recall: sum.recall / n,
            f1: sum.f1 / n,
        }
    }

    /// Render as the tab-separated result line.
    pub fn format_line(&self, decimals: usize) -> String {
        format!(
            "Accuracy={:.prec$}\tPrecision={:.prec$}\tRecall={:.prec$}\tF1={:.prec$}",
            self.accuracy,
            self.precision,
            self.recall,
            self.f1,
            prec = decimals
        )
    }
}

/// Metrics for one label dimension of subtask 1C.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DimensionScore {
    pub dimension: LabelDimension,
    pub metrics: ClassificationMetrics,
}

/// Result of scoring one prediction file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreReport {
    /// Subtask the predictions were scored as
    pub subtask: Subtask,
    /// Number of aligned identifiers
    pub instances: usize,
    /// Reported metrics (averaged over dimensions for 1C)
    pub metrics: ClassificationMetrics,
    /// Per-dimension metrics; empty for single-label subtasks
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dimensions: Vec<DimensionScore>,
}

impl ScoreReport {
    /// Report for a single-label subtask.
    pub fn single(subtask: Subtask, instances: usize, metrics: ClassificationMetrics) -> Self {
        Self {
            subtask,
            instances,
            metrics,
            dimensions: Vec::new(),
        }
    }

    /// Report averaging per-dimension metrics.
    pub fn averaged(instances: usize, dimensions: Vec<DimensionScore>) -> Self {
        let per_dimension: Vec<ClassificationMetrics> =
            dimensions.iter().map(|d| d.metrics).collect();
        Self {
            subtask: Subtask::MultiLabel,
            instances,
            metrics: ClassificationMetrics::mean(&per_dimension),
            dimensions,
        }
    }

    /// Metrics for one dimension, if this report carries them.
    pub fn dimension(&self, dimension: LabelDimension) -> Option<&ClassificationMetrics> {
        self.dimensions
            .iter()
            .find(|d| d.dimension == dimension)
            .map(|d| &d.metrics)
    }
}
