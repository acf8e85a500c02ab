//! Evaluation entry points.
//!
//! Predictions and gold labels can be handed over already parsed or as file
//! paths; paths are parsed with the layout their names imply. Identifier sets
//! are checked before any metric is computed.

use crate::scoring::alignment::{align_single, align_triple};
use crate::scoring::metrics::classification_metrics;
use crate::scoring::parser::{read_gold_file, read_prediction_file};
use crate::scoring::validator::label_mismatch;
use hate_scorer_domain::{
    DimensionScore, LabelSet, ScoreReport, ScorerError, ScorerResult, Subtask,
};
use std::borrow::Cow;
use std::path::Path;
use tracing::{debug, instrument};

/// Where labels come from.
#[derive(Debug, Clone, Copy)]
pub enum LabelSource<'a> {
    /// Labels already parsed
    Parsed(&'a LabelSet),
    /// A file to parse first
    Path(&'a Path),
}

impl<'a> From<&'a LabelSet> for LabelSource<'a> {
    fn from(labels: &'a LabelSet) -> Self {
        Self::Parsed(labels)
    }
}

impl<'a> From<&'a Path> for LabelSource<'a> {
    fn from(path: &'a Path) -> Self {
        Self::Path(path)
    }
}

/// Score a single-label subtask (1A or 1B).
#[instrument(skip_all)]
pub fn evaluate<'a>(
    predictions: impl Into<LabelSource<'a>>,
    gold: impl Into<LabelSource<'a>>,
) -> ScorerResult<ScoreReport> {
    let (predictions, gold) = resolve(predictions.into(), gold.into())?;

    let aligned = align_single(&predictions, &gold)?;
    let metrics = classification_metrics(&aligned.gold, &aligned.predicted)?;

    let subtask = if predictions.subtask().is_multi_label() {
        gold.subtask()
    } else {
        predictions.subtask()
    };

    Ok(ScoreReport::single(subtask, aligned.len(), metrics))
}

/// Score the multi-label subtask (1C).
///
/// Each of hate_type, hate_severity and to_whom is scored on its own; the
/// reported metrics are their unweighted means.
#[instrument(skip_all)]
pub fn evaluate_1c<'a>(
    predictions: impl Into<LabelSource<'a>>,
    gold: impl Into<LabelSource<'a>>,
) -> ScorerResult<ScoreReport> {
    let (predictions, gold) = resolve(predictions.into(), gold.into())?;

    let aligned = align_triple(&predictions, &gold)?;
    let mut dimensions = Vec::with_capacity(aligned.len());
    for entry in &aligned {
        let metrics = classification_metrics(&entry.labels.gold, &entry.labels.predicted)?;
        debug!(dimension = %entry.dimension, "{}", metrics.format_line(4));
        dimensions.push(DimensionScore {
            dimension: entry.dimension,
            metrics,
        });
    }

    Ok(ScoreReport::averaged(gold.len(), dimensions))
}

/// Score with the entry point that matches the subtask.
pub fn evaluate_subtask<'a>(
    subtask: Subtask,
    predictions: impl Into<LabelSource<'a>>,
    gold: impl Into<LabelSource<'a>>,
) -> ScorerResult<ScoreReport> {
    if subtask.is_multi_label() {
        evaluate_1c(predictions, gold)
    } else {
        evaluate(predictions, gold)
    }
}

fn resolve<'a>(
    predictions: LabelSource<'a>,
    gold: LabelSource<'a>,
) -> ScorerResult<(Cow<'a, LabelSet>, Cow<'a, LabelSet>)> {
    let predictions = match predictions {
        LabelSource::Parsed(labels) => Cow::Borrowed(labels),
        LabelSource::Path(path) => Cow::Owned(read_prediction_file(path)?),
    };
    let gold = match gold {
        LabelSource::Parsed(labels) => Cow::Borrowed(labels),
        LabelSource::Path(path) => Cow::Owned(read_gold_file(path)?),
    };

    if let Some(mismatch) = label_mismatch(&predictions, &gold) {
        return Err(ScorerError::LabelMismatch(mismatch));
    }

    Ok((predictions, gold))
}

#[cfg(test)]
mod tests {
    use super::*;
    use hate_scorer_domain::{LabelDimension, LabelRecord};

    fn single(pairs: &[(&str, &str)]) -> LabelSet {
        let mut labels = LabelSet::new(Subtask::HateType);
        for (id, label) in pairs {
            labels.insert(*id, LabelRecord::single(*label));
        }
        labels
    }

    fn triple(rows: &[(&str, [&str; 3])]) -> LabelSet {
        let mut labels = LabelSet::new(Subtask::MultiLabel);
        for (id, [t, s, w]) in rows {
            labels.insert(*id, LabelRecord::triple(*t, *s, *w));
        }
        labels
    }

    #[test]
    fn test_evaluate_perfect() {
        let gold = single(&[("1", "Abusive"), ("2", "None"), ("3", "Sexism")]);
        let report = evaluate(&gold, &gold).unwrap();

        assert_eq!(report.subtask, Subtask::HateType);
        assert_eq!(report.instances, 3);
        assert_eq!(report.metrics.accuracy, 1.0);
        assert_eq!(report.metrics.f1, 1.0);
        assert!(report.dimensions.is_empty());
    }

    #[test]
    fn test_evaluate_refuses_mismatched_ids() {
        let gold = single(&[("1", "None"), ("2", "None")]);
        let pred = single(&[("1", "None"), ("3", "None")]);

        let err = evaluate(&pred, &gold).unwrap_err();
        assert!(matches!(err, ScorerError::LabelMismatch(_)));
    }

    #[test]
    fn test_evaluate_1c_is_mean_of_dimensions() {
        let gold = triple(&[
            ("1", ["Abusive", "Mild", "Individual"]),
            ("2", ["None", "Little to None", "None"]),
            ("3", ["Sexism", "Severe", "Individual"]),
            ("4", ["Profane", "Mild", "Community"]),
        ]);
        let pred = triple(&[
            ("1", ["Abusive", "Severe", "Individual"]),
            ("2", ["None", "Little to None", "Society"]),
            ("3", ["Abusive", "Severe", "Individual"]),
            ("4", ["Profane", "Little to None", "Community"]),
        ]);

        let report = evaluate_1c(&pred, &gold).unwrap();
        assert_eq!(report.subtask, Subtask::MultiLabel);
        assert_eq!(report.dimensions.len(), 3);

        let h = report.dimension(LabelDimension::HateType).unwrap();
        let s = report.dimension(LabelDimension::HateSeverity).unwrap();
        let w = report.dimension(LabelDimension::ToWhom).unwrap();

        assert!((h.accuracy - 0.75).abs() < 1e-12);
        assert!((s.accuracy - 0.5).abs() < 1e-12);
        assert!((w.accuracy - 0.75).abs() < 1e-12);

        let acc = (h.accuracy + s.accuracy + w.accuracy) / 3.0;
        let precision = (h.precision + s.precision + w.precision) / 3.0;
        assert!((report.metrics.accuracy - acc).abs() < 1e-12);
        assert!((report.metrics.precision - precision).abs() < 1e-12);
    }

    #[test]
    fn test_evaluate_subtask_dispatch() {
        let gold = triple(&[("1", ["None", "Little to None", "None"])]);
        assert_eq!(
            evaluate_subtask(Subtask::MultiLabel, &gold, &gold).unwrap().subtask,
            Subtask::MultiLabel
        );
        assert!(evaluate_subtask(Subtask::HateType, &gold, &gold).is_err());
    }

    #[test]
    fn test_evaluate_empty_sets() {
        let empty = single(&[]);
        assert!(matches!(
            evaluate(&empty, &empty),
            Err(ScorerError::EmptyLabels)
        ));
    }
}
