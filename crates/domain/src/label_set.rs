//! Identifier-keyed label mappings parsed from gold and prediction files.

use crate::label::LabelRecord;
use crate::subtask::Subtask;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Insertion-ordered mapping from identifier to labels.
///
/// Iteration follows the order in which identifiers were first inserted,
/// which is the row order of the source file. Re-inserting an identifier
/// replaces its labels without moving it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelSet {
    subtask: Subtask,
    records: IndexMap<String, LabelRecord>,
}

impl LabelSet {
    /// Create an empty label set for a subtask.
    pub fn new(subtask: Subtask) -> Self {
        Self {
            subtask,
            records: IndexMap::new(),
        }
    }

    /// Create an empty label set with room for `capacity` identifiers.
    pub fn with_capacity(subtask: Subtask, capacity: usize) -> Self {
        Self {
            subtask,
            records: IndexMap::with_capacity(capacity),
        }
    }

    /// Subtask whose layout produced this set.
    pub fn subtask(&self) -> Subtask {
        self.subtask
    }

    /// Insert labels for an identifier, returning the labels it replaced.
    pub fn insert(&mut self, id: impl Into<String>, record: LabelRecord) -> Option<LabelRecord> {
        self.records.insert(id.into(), record)
    }

    /// Labels for an identifier.
    pub fn get(&self, id: &str) -> Option<&LabelRecord> {
        self.records.get(id)
    }

    /// Number of identifiers.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the set holds no identifiers.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Identifiers in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(String::as_str)
    }

    /// Identifier/label pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &LabelRecord)> {
        self.records.iter().map(|(id, record)| (id.as_str(), record))
    }

    /// Identifiers as a sorted set.
    pub fn id_set(&self) -> BTreeSet<&str> {
        self.ids().collect()
    }
}
