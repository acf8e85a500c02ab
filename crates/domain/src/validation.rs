//! Findings collected while checking a submission file.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of checking one file.
///
/// Errors make the file unusable; warnings are reported but do not block
/// scoring.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidationResult {
    /// Whether no errors were found
    pub valid: bool,

    /// Blocking findings
    pub errors: Vec<ValidationIssue>,

    /// Non-blocking findings
    pub warnings: Vec<ValidationIssue>,
}

impl ValidationResult {
    /// A result with no findings
    pub fn success() -> Self {
        Self {
            valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// A result with a single error
    pub fn error(location: impl Into<String>, message: impl Into<String>) -> Self {
        let mut result = Self::success();
        result.add_error(location, message);
        result
    }

    /// Record a blocking finding
    pub fn add_error(&mut self, location: impl Into<String>, message: impl Into<String>) {
        self.valid = false;
        self.errors
            .push(ValidationIssue::new(IssueSeverity::Error, location, message));
    }

    /// Record a non-blocking finding
    pub fn add_warning(&mut self, location: impl Into<String>, message: impl Into<String>) {
        self.warnings
            .push(ValidationIssue::new(IssueSeverity::Warning, location, message));
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// All findings, errors first
    pub fn issues(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.errors.iter().chain(self.warnings.iter())
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::success()
    }
}

/// A single finding.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidationIssue {
    /// Where the problem is, e.g. "line 4" or "header"
    pub location: String,

    /// What is wrong
    pub message: String,

    pub severity: IssueSeverity,
}

impl ValidationIssue {
    pub fn new(
        severity: IssueSeverity,
        location: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            location: location.into(),
            message: message.into(),
            severity,
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.location, self.message)
    }
}

/// Severity of a finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueSeverity {
    /// The file cannot be scored
    Error,
    /// The file can be scored but looks suspicious
    Warning,
}

impl IssueSeverity {
    pub fn is_blocking(&self) -> bool {
        matches!(self, Self::Error)
    }
}
