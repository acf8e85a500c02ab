//! Subtasks of the shared task and their file layouts.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// A shared-task subtask.
///
/// Subtasks 1A and 1B carry a single label per row; subtask 1C carries
/// three independent labels (hate type, severity, target).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Subtask {
    /// Subtask 1A: type of hate
    #[serde(rename = "1A")]
    HateType,
    /// Subtask 1B: target of hate
    #[serde(rename = "1B")]
    HateTarget,
    /// Subtask 1C: type, severity and target together
    #[serde(rename = "1C")]
    MultiLabel,
}

impl Subtask {
    /// All subtasks in detection order.
    pub const ALL: [Subtask; 3] = [Self::HateType, Self::HateTarget, Self::MultiLabel];

    /// Short code used in file names and reports ("1A", "1B", "1C").
    pub fn code(&self) -> &'static str {
        match self {
            Self::HateType => "1A",
            Self::HateTarget => "1B",
            Self::MultiLabel => "1C",
        }
    }

    /// Marker substring that identifies this subtask in a file name.
    pub fn file_marker(&self) -> &'static str {
        match self {
            Self::HateType => "subtask_1A",
            Self::HateTarget => "subtask_1B",
            Self::MultiLabel => "subtask_1C",
        }
    }

    /// Number of tab-separated columns every row must have.
    pub fn expected_columns(&self) -> usize {
        if self.is_multi_label() {
            5
        } else {
            3
        }
    }

    /// Whether rows carry three labels instead of one.
    pub fn is_multi_label(&self) -> bool {
        matches!(self, Self::MultiLabel)
    }

    /// Detect the subtask named by a path, checking 1A, then 1B, then 1C.
    pub fn detect(path: &Path) -> Option<Self> {
        let name = path.to_string_lossy();
        Self::ALL
            .into_iter()
            .find(|subtask| name.contains(subtask.file_marker()))
    }

    /// Detect the layout of a gold file.
    ///
    /// Gold files that do not name 1A or 1B are read with the 1C layout.
    pub fn detect_gold(path: &Path) -> Self {
        match Self::detect(path) {
            Some(subtask @ (Self::HateType | Self::HateTarget)) => subtask,
            _ => Self::MultiLabel,
        }
    }
}

impl fmt::Display for Subtask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Error returned when a subtask code cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown subtask '{0}', expected one of 1A, 1B, 1C")]
pub struct SubtaskParseError(pub String);

impl FromStr for Subtask {
    type Err = SubtaskParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().trim_start_matches("subtask_").to_ascii_uppercase();
        match code.as_str() {
            "1A" => Ok(Self::HateType),
            "1B" => Ok(Self::HateTarget),
            "1C" => Ok(Self::MultiLabel),
            _ => Err(SubtaskParseError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_detect_from_file_name() {
        let path = PathBuf::from("/runs/team_subtask_1A_run1.tsv");
        assert_eq!(Subtask::detect(&path), Some(Subtask::HateType));

        let path = PathBuf::from("subtask_1B/pred.tsv");
        assert_eq!(Subtask::detect(&path), Some(Subtask::HateTarget));

        let path = PathBuf::from("blp25_subtask_1C_dev.tsv");
        assert_eq!(Subtask::detect(&path), Some(Subtask::MultiLabel));

        assert_eq!(Subtask::detect(&PathBuf::from("predictions.tsv")), None);
    }

    #[test]
    fn test_detect_gold_falls_back_to_multi_label() {
        assert_eq!(
            Subtask::detect_gold(&PathBuf::from("gold_subtask_1B.tsv")),
            Subtask::HateTarget
        );
        assert_eq!(
            Subtask::detect_gold(&PathBuf::from("gold.tsv")),
            Subtask::MultiLabel
        );
    }

    #[test]
    fn test_expected_columns() {
        assert_eq!(Subtask::HateType.expected_columns(), 3);
        assert_eq!(Subtask::HateTarget.expected_columns(), 3);
        assert_eq!(Subtask::MultiLabel.expected_columns(), 5);
    }

    #[test]
    fn test_parse_codes() {
        assert_eq!("1a".parse::<Subtask>().unwrap(), Subtask::HateType);
        assert_eq!("subtask_1C".parse::<Subtask>().unwrap(), Subtask::MultiLabel);
        assert!("2A".parse::<Subtask>().is_err());
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&Subtask::HateTarget).unwrap();
        assert_eq!(json, "\"1B\"");
        assert_eq!(Subtask::MultiLabel.to_string(), "1C");
    }
}
