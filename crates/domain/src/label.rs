//! Label records attached to each identifier.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the three label dimensions of subtask 1C.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelDimension {
    /// Kind of hate (abusive, sexism, religious hate, ...)
    HateType,
    /// How severe the hate is
    HateSeverity,
    /// Who the hate is directed at
    ToWhom,
}

impl LabelDimension {
    /// Dimensions in column order.
    pub const ALL: [LabelDimension; 3] = [Self::HateType, Self::HateSeverity, Self::ToWhom];

    /// Column name used in the data files.
    pub fn name(&self) -> &'static str {
        match self {
            Self::HateType => "hate_type",
            Self::HateSeverity => "hate_severity",
            Self::ToWhom => "to_whom",
        }
    }
}

impl fmt::Display for LabelDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Labels attached to one identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LabelRecord {
    /// A single label (subtasks 1A and 1B)
    Single(String),
    /// Three labels (subtask 1C)
    Triple {
        hate_type: String,
        hate_severity: String,
        to_whom: String,
    },
}

impl LabelRecord {
    /// Create a single-label record.
    pub fn single(label: impl Into<String>) -> Self {
        Self::Single(label.into())
    }

    /// Create a three-label record.
    pub fn triple(
        hate_type: impl Into<String>,
        hate_severity: impl Into<String>,
        to_whom: impl Into<String>,
    ) -> Self {
        Self::Triple {
            hate_type: hate_type.into(),
            hate_severity: hate_severity.into(),
            to_whom: to_whom.into(),
        }
    }

    /// The label of a single-label record.
    pub fn as_single(&self) -> Option<&str> {
        match self {
            Self::Single(label) => Some(label),
            Self::Triple { .. } => None,
        }
    }

    /// The value of one dimension of a three-label record.
    pub fn dimension(&self, dimension: LabelDimension) -> Option<&str> {
        match self {
            Self::Single(_) => None,
            Self::Triple {
                hate_type,
                hate_severity,
                to_whom,
            } => Some(match dimension {
                LabelDimension::HateType => hate_type,
                LabelDimension::HateSeverity => hate_severity,
                LabelDimension::ToWhom => to_whom,
            }),
        }
    }

    /// Whether this record holds three labels.
    pub fn is_triple(&self) -> bool {
        matches!(self, Self::Triple { .. })
    }
}

impl fmt::Display for LabelRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single(label) => f.write_str(label),
            Self::Triple {
                hate_type,
                hate_severity,
                to_whom,
            } => write!(f, "{} / {} / {}", hate_type, hate_severity, to_whom),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_accessors() {
        let record = LabelRecord::single("Abusive");
        assert_eq!(record.as_single(), Some("Abusive"));
        assert_eq!(record.dimension(LabelDimension::HateType), None);
        assert!(!record.is_triple());
    }

    #[test]
    fn test_triple_dimensions() {
        let record = LabelRecord::triple("Profane", "Mild", "Community");
        assert_eq!(record.as_single(), None);
        assert_eq!(record.dimension(LabelDimension::HateType), Some("Profane"));
        assert_eq!(record.dimension(LabelDimension::HateSeverity), Some("Mild"));
        assert_eq!(record.dimension(LabelDimension::ToWhom), Some("Community"));
    }

    #[test]
    fn test_dimension_names_follow_column_order() {
        let names: Vec<&str> = LabelDimension::ALL.iter().map(|d| d.name()).collect();
        assert_eq!(names, vec!["hate_type", "hate_severity", "to_whom"]);
    }
}
