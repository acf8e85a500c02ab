//! On-disk fixtures for gold and prediction files.
//!
//! Every [`TsvFixture`] owns a fresh temporary directory that is removed when
//! the fixture is dropped.

use anyhow::{Context, Result};
use hate_scorer_domain::{LabelRecord, LabelSet};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Hate type labels used by subtask 1A and the first 1C column
pub const HATE_TYPE_LABELS: &[&str] = &[
    "None",
    "Religious Hate",
    "Sexism",
    "Political Hate",
    "Profane",
    "Abusive",
];

/// Severity labels used by the second 1C column
pub const HATE_SEVERITY_LABELS: &[&str] = &["Little to None", "Mild", "Severe"];

/// Target labels used by subtask 1B and the third 1C column
pub const TO_WHOM_LABELS: &[&str] = &["None", "Individual", "Organization", "Community", "Society"];

/// Model name written into prediction files
pub const DEFAULT_MODEL: &str = "BERT";

/// A throwaway directory holding TSV files.
#[derive(Debug)]
pub struct TsvFixture {
    dir: TempDir,
}

impl TsvFixture {
    /// Create an empty fixture directory
    pub fn new() -> Result<Self> {
        let dir = tempfile::Builder::new()
            .prefix("hate-scorer-")
            .tempdir()
            .context("Failed to create fixture directory")?;
        Ok(Self { dir })
    }

    /// The fixture directory
    pub fn dir(&self) -> &Path {
        self.dir.path()
    }

    /// Path of a file inside the fixture; the file need not exist
    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Write arbitrary contents
    pub fn write_raw(&self, name: &str, contents: &str) -> Result<PathBuf> {
        let path = self.path(name);
        fs::write(&path, contents)
            .with_context(|| format!("Failed to write fixture {}", path.display()))?;
        Ok(path)
    }

    /// Write arbitrary bytes, e.g. invalid UTF-8
    pub fn write_bytes(&self, name: &str, contents: &[u8]) -> Result<PathBuf> {
        let path = self.path(name);
        fs::write(&path, contents)
            .with_context(|| format!("Failed to write fixture {}", path.display()))?;
        Ok(path)
    }

    /// Write a gold file in the layout of the set's subtask
    pub fn write_gold(&self, name: &str, labels: &LabelSet) -> Result<PathBuf> {
        self.write_raw(name, &gold_tsv(labels))
    }

    /// Write a prediction file in the layout of the set's subtask
    pub fn write_predictions(&self, name: &str, labels: &LabelSet) -> Result<PathBuf> {
        self.write_raw(name, &prediction_tsv(labels, DEFAULT_MODEL))
    }
}

/// Render a gold file: `id \t text \t label(s)`
pub fn gold_tsv(labels: &LabelSet) -> String {
    let mut out = if labels.subtask().is_multi_label() {
        String::from("id\ttext\thate_type\thate_severity\tto_whom\n")
    } else {
        String::from("id\ttext\tlabel\n")
    };

    for (id, record) in labels.iter() {
        out.push_str(&format!("{}\tsample text {}\t{}\n", id, id, label_cells(record)));
    }
    out
}

/// Render a prediction file: `id \t label(s) \t model`
pub fn prediction_tsv(labels: &LabelSet, model: &str) -> String {
    let mut out = if labels.subtask().is_multi_label() {
        String::from("id\thate_type\thate_severity\tto_whom\tmodel\n")
    } else {
        String::from("id\tlabel\tmodel\n")
    };

    for (id, record) in labels.iter() {
        out.push_str(&format!("{}\t{}\t{}\n", id, label_cells(record), model));
    }
    out
}

fn label_cells(record: &LabelRecord) -> String {
    match record {
        LabelRecord::Single(label) => label.clone(),
        LabelRecord::Triple {
            hate_type,
            hate_severity,
            to_whom,
        } => format!("{}\t{}\t{}", hate_type, hate_severity, to_whom),
    }
}
