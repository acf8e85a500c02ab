//! Pairing of predicted and gold labels.
//!
//! Sequences follow the gold file's row order so that position `i` of the
//! predicted sequence and position `i` of the gold sequence always describe
//! the same identifier.

use hate_scorer_domain::{LabelDimension, LabelRecord, LabelSet, ScorerError, ScorerResult};

/// Parallel predicted and gold label sequences.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AlignedLabels<'a> {
    pub predicted: Vec<&'a str>,
    pub gold: Vec<&'a str>,
}

impl<'a> AlignedLabels<'a> {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            predicted: Vec::with_capacity(capacity),
            gold: Vec::with_capacity(capacity),
        }
    }

    fn push(&mut self, predicted: &'a str, gold: &'a str) {
        self.predicted.push(predicted);
        self.gold.push(gold);
    }

    pub fn len(&self) -> usize {
        self.gold.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gold.is_empty()
    }
}

/// Aligned sequences for one dimension of subtask 1C.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DimensionAlignment<'a> {
    pub dimension: LabelDimension,
    pub labels: AlignedLabels<'a>,
}

/// Align single-label records in gold order.
pub fn align_single<'a>(
    predictions: &'a LabelSet,
    gold: &'a LabelSet,
) -> ScorerResult<AlignedLabels<'a>> {
    let mut aligned = AlignedLabels::with_capacity(gold.len());

    for (id, gold_record) in gold.iter() {
        let pred_record = prediction_for(predictions, id)?;
        let (Some(p), Some(g)) = (pred_record.as_single(), gold_record.as_single()) else {
            return Err(misaligned(id, "expected a single label"));
        };
        aligned.push(p, g);
    }

    Ok(aligned)
}

/// Align three-label records in gold order, one pair of sequences per dimension.
pub fn align_triple<'a>(
    predictions: &'a LabelSet,
    gold: &'a LabelSet,
) -> ScorerResult<Vec<DimensionAlignment<'a>>> {
    let mut aligned: Vec<DimensionAlignment<'a>> = LabelDimension::ALL
        .into_iter()
        .map(|dimension| DimensionAlignment {
            dimension,
            labels: AlignedLabels::with_capacity(gold.len()),
        })
        .collect();

    for (id, gold_record) in gold.iter() {
        let pred_record = prediction_for(predictions, id)?;
        if !pred_record.is_triple() || !gold_record.is_triple() {
            return Err(misaligned(id, "expected hate_type, hate_severity and to_whom labels"));
        }

        for entry in aligned.iter_mut() {
            if let (Some(p), Some(g)) = (
                pred_record.dimension(entry.dimension),
                gold_record.dimension(entry.dimension),
            ) {
                entry.labels.push(p, g);
            }
        }
    }

    Ok(aligned)
}

fn prediction_for<'a>(predictions: &'a LabelSet, id: &str) -> ScorerResult<&'a LabelRecord> {
    predictions
        .get(id)
        .ok_or_else(|| misaligned(id, "no prediction for this identifier"))
}

fn misaligned(id: &str, reason: &str) -> ScorerError {
    ScorerError::Misaligned {
        id: id.to_string(),
        reason: reason.to_string(),
    }
}
