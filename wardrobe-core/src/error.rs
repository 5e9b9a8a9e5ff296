//! Error types for cut-list calculation.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// A single violated configuration rule, tagged with the offending field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Field path, e.g. `width_cm` or `door_sections[1]`.
    pub field: String,
    /// Human-readable explanation.
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Main error type for the calculator.
#[derive(Debug, Error)]
pub enum CutlistError {
    #[error("Configuration has {} validation error(s); first: {}", .errors.len(), first_message(.errors))]
    Validation { errors: Vec<ValidationError> },

    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Invalid configuration file {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unknown preset '{name}'")]
    UnknownPreset { name: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn first_message(errors: &[ValidationError]) -> String {
    errors
        .first()
        .map(ToString::to_string)
        .unwrap_or_else(|| "none".to_string())
}

impl CutlistError {
    /// Validation errors carried by this error, if any.
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            CutlistError::Validation { errors } => errors,
            _ => &[],
        }
    }
}

/// Result type alias for calculator operations.
pub type Result<T> = std::result::Result<T, CutlistError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::new("width_cm", "Width must not be negative");
        assert_eq!(err.to_string(), "width_cm: Width must not be negative");
    }

    #[test]
    fn test_cutlist_error_validation_message() {
        let err = CutlistError::Validation {
            errors: vec![
                ValidationError::new("depth_cm", "Depth must not be negative"),
                ValidationError::new("price_per_m2", "Price per m² must be greater than 0"),
            ],
        };
        let message = err.to_string();
        assert!(message.contains("2 validation error(s)"));
        assert!(message.contains("depth_cm: Depth must not be negative"));
        assert_eq!(err.validation_errors().len(), 2);
    }

    #[test]
    fn test_cutlist_error_other_has_no_validation_errors() {
        let err = CutlistError::UnknownPreset {
            name: "tiny".into(),
        };
        assert!(err.validation_errors().is_empty());
        assert_eq!(err.to_string(), "Unknown preset 'tiny'");
    }
}
