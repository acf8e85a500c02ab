//! Readers for tab-separated gold and prediction files.
//!
//! Both file kinds start with a header row that is skipped. Every other row
//! must have exactly the column count of its subtask; the first row that does
//! not fails the whole file so that no partially read label set is scored.

use hate_scorer_domain::{LabelRecord, LabelSet, ScorerError, ScorerResult, Subtask};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, error, instrument, warn};

/// Which kind of file is being read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileRole {
    /// `id \t label(s) \t model`
    Prediction,
    /// `id \t metadata \t label(s)`
    Gold,
}

impl FileRole {
    /// Index of the first label column.
    fn label_column(&self) -> usize {
        match self {
            Self::Prediction => 1,
            Self::Gold => 2,
        }
    }
}

/// Read a prediction file, taking the subtask from its name.
pub fn read_prediction_file(path: &Path) -> ScorerResult<LabelSet> {
    let subtask = Subtask::detect(path).ok_or_else(|| {
        error!(
            path = %path.display(),
            "File name must contain subtask_1A, subtask_1B or subtask_1C"
        );
        ScorerError::UnknownSubtask(path.to_path_buf())
    })?;
    read_labels(path, subtask, FileRole::Prediction)
}

/// Read a gold file, taking the layout from its name.
///
/// Names that mention neither 1A nor 1B are read with the 1C layout.
pub fn read_gold_file(path: &Path) -> ScorerResult<LabelSet> {
    read_labels(path, Subtask::detect_gold(path), FileRole::Gold)
}

/// Read a file with an explicit subtask layout.
#[instrument(skip_all, fields(path = %path.display(), subtask = %subtask, role = ?role))]
pub fn read_labels(path: &Path, subtask: Subtask, role: FileRole) -> ScorerResult<LabelSet> {
    let content = fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => ScorerError::FileNotFound(path.to_path_buf()),
        _ => ScorerError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    parse_labels(&content, path, subtask, role).inspect_err(|err| {
        if err.is_format_error() {
            error!("{}", err);
        }
    })
}

/// Parse file contents already in memory. `path` is only used in errors.
pub fn parse_labels(
    content: &str,
    path: &Path,
    subtask: Subtask,
    role: FileRole,
) -> ScorerResult<LabelSet> {
    let mut lines = content.lines();
    if lines.next().is_none() {
        return Err(ScorerError::MissingHeader(path.to_path_buf()));
    }

    let expected = subtask.expected_columns();
    let first = role.label_column();
    let mut labels = LabelSet::new(subtask);

    // Line numbers are 1-based and count the header
    for (line_no, line) in lines.enumerate().map(|(i, l)| (i + 2, l)) {
        let cols: Vec<&str> = line.trim_end().split('\t').collect();
        if cols.len() != expected {
            return Err(ScorerError::ColumnCount {
                path: path.to_path_buf(),
                line: line_no,
                subtask,
                expected,
                found: cols.len(),
            });
        }

        let record = if subtask.is_multi_label() {
            LabelRecord::triple(
                cols[first].trim(),
                cols[first + 1].trim(),
                cols[first + 2].trim(),
            )
        } else {
            LabelRecord::single(cols[first].trim())
        };

        if labels.insert(cols[0], record).is_some() {
            warn!(id = cols[0], line = line_no, "Duplicate identifier, keeping the later labels");
        }
    }

    debug!(records = labels.len(), "Parsed label file");

    Ok(labels)
}
