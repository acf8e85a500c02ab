//! Classification metrics over aligned label sequences.
//!
//! Definitions follow the usual multi-class conventions:
//! - accuracy is the share of exact matches
//! - weighted precision and recall average the per-class values over every
//!   class seen in gold or predictions, weighting each class by its gold
//!   support; a class that is never predicted has precision 0
//! - micro F1 is computed from true/false positives and negatives pooled over
//!   all classes

use hate_scorer_domain::{ClassificationMetrics, ScorerError, ScorerResult};
use std::collections::BTreeMap;
use tracing::debug;

/// Confusion counts for one class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClassCounts {
    pub true_positives: usize,
    pub false_positives: usize,
    pub false_negatives: usize,
    /// Occurrences of the class in the gold sequence
    pub support: usize,
}

impl ClassCounts {
    pub fn precision(&self) -> f64 {
        ratio(self.true_positives, self.true_positives + self.false_positives)
    }

    pub fn recall(&self) -> f64 {
        ratio(self.true_positives, self.true_positives + self.false_negatives)
    }
}

/// Per-class confusion counts, keyed by label in sorted order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConfusionCounts<'a> {
    classes: BTreeMap<&'a str, ClassCounts>,
    total: usize,
}

impl<'a> ConfusionCounts<'a> {
    /// Count over parallel gold and predicted sequences of equal length.
    pub fn from_labels(gold: &[&'a str], predicted: &[&'a str]) -> ScorerResult<Self> {
        if gold.len() != predicted.len() {
            return Err(ScorerError::Misaligned {
                id: format!("position {}", gold.len().min(predicted.len())),
                reason: format!(
                    "{} gold labels but {} predictions",
                    gold.len(),
                    predicted.len()
                ),
            });
        }

        let mut classes: BTreeMap<&'a str, ClassCounts> = BTreeMap::new();
        for (&g, &p) in gold.iter().zip(predicted) {
            classes.entry(g).or_default().support += 1;
            if g == p {
                classes.entry(g).or_default().true_positives += 1;
            } else {
                classes.entry(g).or_default().false_negatives += 1;
                classes.entry(p).or_default().false_positives += 1;
            }
        }

        Ok(Self {
            classes,
            total: gold.len(),
        })
    }

    /// Number of aligned pairs.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Counts for one class.
    pub fn class(&self, label: &str) -> Option<&ClassCounts> {
        self.classes.get(label)
    }

    /// Labels seen in gold or predictions, sorted.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.classes.keys().copied()
    }

    /// Share of exact matches.
    pub fn accuracy(&self) -> f64 {
        ratio(self.pooled(|c| c.true_positives), self.total)
    }

    /// Per-class precision weighted by gold support.
    pub fn weighted_precision(&self) -> f64 {
        self.weighted(ClassCounts::precision)
    }

    /// Per-class recall weighted by gold support.
    pub fn weighted_recall(&self) -> f64 {
        self.weighted(ClassCounts::recall)
    }

    /// F1 from pooled confusion counts.
    pub fn micro_f1(&self) -> f64 {
        let tp = self.pooled(|c| c.true_positives);
        let fp = self.pooled(|c| c.false_positives);
        let fn_ = self.pooled(|c| c.false_negatives);
        ratio(2 * tp, 2 * tp + fp + fn_)
    }

    /// All four metrics at once.
    pub fn metrics(&self) -> ClassificationMetrics {
        ClassificationMetrics {
            accuracy: self.accuracy(),
            precision: self.weighted_precision(),
            recall: self.weighted_recall(),
            f1: self.micro_f1(),
        }
    }

    fn pooled(&self, count: impl Fn(&ClassCounts) -> usize) -> usize {
        self.classes.values().map(count).sum()
    }

    fn weighted(&self, metric: impl Fn(&ClassCounts) -> f64) -> f64 {
        let support = self.pooled(|c| c.support);
        if support == 0 {
            return 0.0;
        }

        self.classes
            .values()
            .map(|c| metric(c) * c.support as f64)
            .sum::<f64>()
            / support as f64
    }
}

/// Compute accuracy, weighted precision, weighted recall and micro F1.
pub fn classification_metrics(
    gold: &[&str],
    predicted: &[&str],
) -> ScorerResult<ClassificationMetrics> {
    if gold.is_empty() && predicted.is_empty() {
        return Err(ScorerError::EmptyLabels);
    }

    let counts = ConfusionCounts::from_labels(gold, predicted)?;
    let metrics = counts.metrics();

    debug!(
        instances = counts.total(),
        classes = counts.classes.len(),
        accuracy = metrics.accuracy,
        precision = metrics.precision,
        recall = metrics.recall,
        f1 = metrics.f1,
        "Computed classification metrics"
    );

    Ok(metrics)
}

/// Zero when the denominator is zero.
fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}
