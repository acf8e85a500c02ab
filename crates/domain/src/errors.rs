//! Error types for scoring runs.
//!
//! Every failure the scorer can hit while reading, checking or scoring a
//! file is a variant of [`ScorerError`]. Callers decide per variant whether
//! to skip the current file or abort the run.

use crate::subtask::Subtask;
use std::collections::BTreeSet;
use std::path::PathBuf;

/// Scoring error
#[derive(Debug, thiserror::Error)]
pub enum ScorerError {
    /// The file could not be read
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file does not exist
    #[error("File doesn't exist: {0}")]
    FileNotFound(PathBuf),

    /// The file is empty, so it has no header row
    #[error("File has no header row: {0}")]
    MissingHeader(PathBuf),

    /// The file name does not say which subtask it belongs to
    #[error("Cannot determine subtask from file name: {0}")]
    UnknownSubtask(PathBuf),

    /// A row has the wrong number of tab-separated columns
    #[error("{path} line {line}: subtask {subtask} expects {expected} TAB separated columns, found {found}")]
    ColumnCount {
        path: PathBuf,
        line: usize,
        subtask: Subtask,
        expected: usize,
        found: usize,
    },

    /// Prediction and gold records cannot be paired
    #[error("Cannot align identifier {id}: {reason}")]
    Misaligned { id: String, reason: String },

    /// There is nothing to score
    #[error("No labels to score")]
    EmptyLabels,

    /// Prediction identifiers differ from the gold identifiers
    #[error("{0}")]
    LabelMismatch(LabelMismatch),

    /// The format checker rejected the file
    #[error("Format check failed: {0}")]
    FormatRejected(PathBuf),
}

impl ScorerError {
    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Io { .. } => "IO_ERROR",
            Self::FileNotFound(_) => "FILE_NOT_FOUND",
            Self::MissingHeader(_) => "MISSING_HEADER",
            Self::UnknownSubtask(_) => "UNKNOWN_SUBTASK",
            Self::ColumnCount { .. } => "COLUMN_COUNT",
            Self::Misaligned { .. } => "MISALIGNED",
            Self::EmptyLabels => "EMPTY_LABELS",
            Self::LabelMismatch(_) => "LABEL_MISMATCH",
            Self::FormatRejected(_) => "FORMAT_REJECTED",
        }
    }

    /// Whether this error is a malformed-input error rather than an I/O failure.
    pub fn is_format_error(&self) -> bool {
        matches!(
            self,
            Self::MissingHeader(_)
                | Self::UnknownSubtask(_)
                | Self::ColumnCount { .. }
                | Self::FormatRejected(_)
        )
    }
}

/// How the prediction identifiers differ from the gold identifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LabelMismatch {
    /// The files hold a different number of identifiers; `different` lists
    /// the identifiers found in only one of them
    Count {
        predicted: usize,
        expected: usize,
        different: BTreeSet<String>,
    },
    /// Same count, but these identifiers appear in only one of the files
    Ids(BTreeSet<String>),
}

impl LabelMismatch {
    /// Identifiers found in only one of the two files
    pub fn different_ids(&self) -> &BTreeSet<String> {
        match self {
            Self::Count { different, .. } | Self::Ids(different) => different,
        }
    }
}

impl std::fmt::Display for LabelMismatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Count {
                predicted,
                expected,
                different,
            } => write!(
                f,
                "Number of predictions ({}) is not the expected one ({}). Different IDs: {:?}",
                predicted, expected, different
            ),
            Self::Ids(ids) => write!(
                f,
                "IDs of documents in prediction file don't match the gold labels file. Different IDs: {:?}",
                ids
            ),
        }
    }
}

/// Result alias for scoring operations
pub type ScorerResult<T> = Result<T, ScorerError>;
