//! Structured error types for composition runs.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// A single schema violation at a specific key path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    /// Dotted key path of the offending value (e.g. `output.filename`).
    pub path: String,
    /// The shape the schema expected at that path.
    pub expected: String,
}

impl ValidationIssue {
    pub fn new(path: impl Into<String>, expected: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            expected: expected.into(),
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: expected {}", self.path, self.expected)
    }
}

/// The merged configuration does not conform to the schema.
///
/// Carries every offending key path, not just the first one found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    pub issues: Vec<ValidationIssue>,
}

impl ValidationError {
    pub fn new(issues: Vec<ValidationIssue>) -> Self {
        Self { issues }
    }

    /// Paths of all offending keys, in schema order.
    pub fn paths(&self) -> Vec<&str> {
        self.issues.iter().map(|i| i.path.as_str()).collect()
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "configuration failed validation ({} issue{})",
            self.issues.len(),
            if self.issues.len() == 1 { "" } else { "s" }
        )?;
        for issue in &self.issues {
            write!(f, "\n  - {}", issue)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// Failure modes of a composition run.
///
/// Every variant stems from static misconfiguration, never from a transient
/// condition, so there is no retry path anywhere in the engine.
#[derive(Debug, Error)]
pub enum ComposeError {
    /// A part failed while constructing its fragment.
    #[error("part '{part}' failed: {reason}")]
    Part { part: &'static str, reason: String },

    /// The merged configuration was rejected by the schema.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl ComposeError {
    pub fn part(part: &'static str, reason: impl Into<String>) -> Self {
        Self::Part {
            part,
            reason: reason.into(),
        }
    }
}

/// Result type for composition operations.
pub type ComposeResult<T> = std::result::Result<T, ComposeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_lists_every_path() {
        let err = ValidationError::new(vec![
            ValidationIssue::new("entry", "at least one entry chunk"),
            ValidationIssue::new("output.filename", "a filename pattern"),
        ]);

        assert_eq!(err.paths(), vec!["entry", "output.filename"]);
        let rendered = err.to_string();
        assert!(rendered.contains("2 issues"));
        assert!(rendered.contains("entry: expected at least one entry chunk"));
        assert!(rendered.contains("output.filename"));
    }

    #[test]
    fn part_error_names_the_part() {
        let err = ComposeError::part("transpile", "include list is empty");
        assert_eq!(
            err.to_string(),
            "part 'transpile' failed: include list is empty"
        );
    }
}
