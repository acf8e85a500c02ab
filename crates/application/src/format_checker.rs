//! Structural checks run on submissions before they are scored.
//!
//! A submission passes when its file name names a subtask, it has a header
//! row, and every data row has the subtask's column count, non-empty
//! identifier and label cells, and an identifier not used on an earlier row.

use hate_scorer_domain::{Subtask, ValidationResult};
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, error, warn};

/// Check that every path exists and is a regular file.
pub fn validate_files<P: AsRef<Path>>(paths: &[P]) -> bool {
    let mut all_exist = true;
    for path in paths {
        let path = path.as_ref();
        if !path.is_file() {
            error!("File doesn't exist: {}", path.display());
            all_exist = false;
        }
    }
    all_exist
}

/// Check a prediction file, taking the subtask from its name.
pub fn check_format(path: &Path) -> bool {
    check_format_as(path, None)
}

/// Check a prediction file, optionally forcing the subtask layout.
///
/// Findings are logged; returns whether the file can be scored.
pub fn check_format_as(path: &Path, subtask: Option<Subtask>) -> bool {
    let result = inspect_format_as(path, subtask);

    for issue in result.issues() {
        if issue.severity.is_blocking() {
            error!("{}: {}", path.display(), issue);
        } else {
            warn!("{}: {}", path.display(), issue);
        }
    }

    !result.has_errors()
}

/// Collect format findings for a prediction file.
pub fn inspect_format(path: &Path) -> ValidationResult {
    inspect_format_as(path, None)
}

/// Collect format findings, optionally forcing the subtask layout.
pub fn inspect_format_as(path: &Path, subtask: Option<Subtask>) -> ValidationResult {
    let Some(subtask) = subtask.or_else(|| Subtask::detect(path)) else {
        return ValidationResult::error(
            "file name",
            "must contain subtask_1A, subtask_1B or subtask_1C",
        );
    };

    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            return ValidationResult::error("file", "doesn't exist");
        }
        Err(err) if err.kind() == ErrorKind::InvalidData => {
            return ValidationResult::error("file", "is not valid UTF-8");
        }
        Err(err) => return ValidationResult::error("file", format!("cannot be read: {}", err)),
    };

    inspect_content(&content, subtask)
}

/// Collect format findings for file contents already in memory.
pub fn inspect_content(content: &str, subtask: Subtask) -> ValidationResult {
    let expected = subtask.expected_columns();
    let mut result = ValidationResult::success();
    let mut lines = content.lines();

    match lines.next() {
        None => {
            result.add_error("header", "file is empty");
            return result;
        }
        Some(header) => {
            let found = header.trim_end().split('\t').count();
            if found != expected {
                result.add_warning(
                    "header",
                    format!("expected {} TAB separated columns, found {}", expected, found),
                );
            }
        }
    }

    let mut first_seen: HashMap<&str, usize> = HashMap::new();
    let mut rows = 0usize;

    for (line_no, line) in lines.enumerate().map(|(i, l)| (i + 2, l)) {
        rows += 1;
        let location = format!("line {}", line_no);
        let cols: Vec<&str> = line.trim_end().split('\t').collect();

        if cols.len() != expected {
            result.add_error(
                location,
                format!(
                    "subtask {} expects {} TAB separated columns, found {}",
                    subtask,
                    expected,
                    cols.len()
                ),
            );
            continue;
        }

        let id = cols[0];
        if id.trim().is_empty() {
            result.add_error(location.clone(), "empty identifier");
        } else if let Some(previous) = first_seen.insert(id, line_no) {
            result.add_error(
                location.clone(),
                format!("duplicate identifier '{}' (first seen on line {})", id, previous),
            );
            first_seen.insert(id, previous);
        }

        // the model column is last, so an empty one has already been trimmed away
        if cols[1..expected - 1].iter().any(|label| label.trim().is_empty()) {
            result.add_error(location, "empty label");
        }
    }

    if rows == 0 {
        result.add_warning("file", "no prediction rows after the header");
    }

    debug!(
        subtask = %subtask,
        rows,
        errors = result.errors.len(),
        warnings = result.warnings.len(),
        "Checked file format"
    );

    result
}
