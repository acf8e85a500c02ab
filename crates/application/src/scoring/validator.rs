//! Identifier checks between a prediction file and the gold file.

use hate_scorer_domain::{LabelMismatch, LabelSet};
use std::collections::BTreeSet;
use tracing::error;

/// Describe how prediction identifiers differ from gold identifiers.
///
/// A count difference takes precedence; either way the identifiers found in
/// only one of the two sets are included.
pub fn label_mismatch(predictions: &LabelSet, gold: &LabelSet) -> Option<LabelMismatch> {
    let pred_ids = predictions.id_set();
    let gold_ids = gold.id_set();
    let different: BTreeSet<String> = pred_ids
        .symmetric_difference(&gold_ids)
        .map(|id| id.to_string())
        .collect();

    if predictions.len() != gold.len() {
        Some(LabelMismatch::Count {
            predicted: predictions.len(),
            expected: gold.len(),
            different,
        })
    } else if different.is_empty() {
        None
    } else {
        Some(LabelMismatch::Ids(different))
    }
}

/// Check that predictions cover exactly the gold identifiers, logging any
/// difference.
pub fn correct_labels(predictions: &LabelSet, gold: &LabelSet) -> bool {
    match label_mismatch(predictions, gold) {
        Some(mismatch) => {
            error!("{}", mismatch);
            false
        }
        None => true,
    }
}
