//! Fluent builders and generators for in-memory label sets.

use fake::Fake;
use hate_scorer_domain::{LabelDimension, LabelRecord, LabelSet, Subtask};
use proptest::prelude::*;

use crate::fixtures::{HATE_SEVERITY_LABELS, HATE_TYPE_LABELS, TO_WHOM_LABELS};

/// Builder for creating LabelSet test instances
#[derive(Clone)]
pub struct LabelSetBuilder {
    labels: LabelSet,
}

impl LabelSetBuilder {
    pub fn new(subtask: Subtask) -> Self {
        Self {
            labels: LabelSet::new(subtask),
        }
    }

    pub fn with_single(self, id: impl Into<String>, label: impl Into<String>) -> Self {
        self.with_record(id, LabelRecord::single(label))
    }

    pub fn with_triple(
        self,
        id: impl Into<String>,
        hate_type: impl Into<String>,
        hate_severity: impl Into<String>,
        to_whom: impl Into<String>,
    ) -> Self {
        self.with_record(id, LabelRecord::triple(hate_type, hate_severity, to_whom))
    }

    pub fn with_record(mut self, id: impl Into<String>, record: LabelRecord) -> Self {
        self.labels.insert(id, record);
        self
    }

    pub fn build(self) -> LabelSet {
        self.labels
    }
}

/// Label vocabulary of a single-label subtask, or of one 1C dimension
pub fn vocabulary(subtask: Subtask, dimension: LabelDimension) -> &'static [&'static str] {
    match (subtask, dimension) {
        (Subtask::HateTarget, _) => TO_WHOM_LABELS,
        (Subtask::MultiLabel, LabelDimension::HateSeverity) => HATE_SEVERITY_LABELS,
        (Subtask::MultiLabel, LabelDimension::ToWhom) => TO_WHOM_LABELS,
        _ => HATE_TYPE_LABELS,
    }
}

fn pick(labels: &[&str]) -> String {
    labels[(0..labels.len()).fake::<usize>()].to_string()
}

/// Random labels for identifiers `1..=count`
pub fn random_labels(subtask: Subtask, count: usize) -> LabelSet {
    let mut labels = LabelSet::with_capacity(subtask, count);
    for id in 1..=count {
        labels.insert(id.to_string(), random_record(subtask));
    }
    labels
}

/// A random record in the layout of the subtask
pub fn random_record(subtask: Subtask) -> LabelRecord {
    if subtask.is_multi_label() {
        LabelRecord::triple(
            pick(vocabulary(subtask, LabelDimension::HateType)),
            pick(vocabulary(subtask, LabelDimension::HateSeverity)),
            pick(vocabulary(subtask, LabelDimension::ToWhom)),
        )
    } else {
        LabelRecord::single(pick(vocabulary(subtask, LabelDimension::HateType)))
    }
}

/// Copy of `labels` with the first `count` records changed to a different
/// label in every column
pub fn with_wrong_labels(labels: &LabelSet, count: usize) -> LabelSet {
    let subtask = labels.subtask();
    let mut wrong = LabelSet::with_capacity(subtask, labels.len());

    for (index, (id, record)) in labels.iter().enumerate() {
        let record = if index < count {
            flip(subtask, record)
        } else {
            record.clone()
        };
        wrong.insert(id, record);
    }
    wrong
}

fn flip(subtask: Subtask, record: &LabelRecord) -> LabelRecord {
    let next = |dimension: LabelDimension, current: &str| {
        let vocab = vocabulary(subtask, dimension);
        let position = vocab.iter().position(|l| *l == current).unwrap_or(0);
        vocab[(position + 1) % vocab.len()].to_string()
    };

    match record {
        LabelRecord::Single(label) => LabelRecord::single(next(LabelDimension::HateType, label)),
        LabelRecord::Triple {
            hate_type,
            hate_severity,
            to_whom,
        } => LabelRecord::triple(
            next(LabelDimension::HateType, hate_type),
            next(LabelDimension::HateSeverity, hate_severity),
            next(LabelDimension::ToWhom, to_whom),
        ),
    }
}

/// Strategy producing non-empty label sets with identifiers `1..=n`
pub fn label_set_strategy(subtask: Subtask, max_len: usize) -> impl Strategy<Value = LabelSet> {
    let record = if subtask.is_multi_label() {
        (
            prop::sample::select(vocabulary(subtask, LabelDimension::HateType)),
            prop::sample::select(vocabulary(subtask, LabelDimension::HateSeverity)),
            prop::sample::select(vocabulary(subtask, LabelDimension::ToWhom)),
        )
            .prop_map(|(t, s, w)| LabelRecord::triple(t, s, w))
            .boxed()
    } else {
        prop::sample::select(vocabulary(subtask, LabelDimension::HateType))
            .prop_map(LabelRecord::single)
            .boxed()
    };

    prop::collection::vec(record, 1..=max_len.max(1)).prop_map(move |records| {
        let mut labels = LabelSet::with_capacity(subtask, records.len());
        for (index, record) in records.into_iter().enumerate() {
            labels.insert((index + 1).to_string(), record);
        }
        labels
    })
}
