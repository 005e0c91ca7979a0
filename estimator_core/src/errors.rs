//! # Error Types
//!
//! Structured error types for estimator_core. Both variants carry enough
//! context for a caller to tell the user which field to fix, and both
//! serialize cleanly to JSON.
//!
//! ## Example
//!
//! ```rust
//! use estimator_core::errors::{EstimateError, EstimateResult};
//!
//! fn validate_length(length_m: f64) -> EstimateResult<()> {
//!     if length_m <= 0.0 {
//!         return Err(EstimateError::invalid_input(
//!             "length",
//!             length_m.to_string(),
//!             "Length must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for estimator_core operations
pub type EstimateResult<T> = Result<T, EstimateError>;

/// Structured error type for estimation operations.
///
/// Validation happens before any material is computed, so an error
/// always means no partial result was produced.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum EstimateError {
    /// A dimension is missing, not a number, non-finite, zero or negative
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// The project type selector is not one of the recognized values
    #[error("Unknown project type: '{value}'")]
    UnknownProjectType { value: String },
}

impl EstimateError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        EstimateError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an UnknownProjectType error
    pub fn unknown_project_type(value: impl Into<String>) -> Self {
        EstimateError::UnknownProjectType { value: value.into() }
    }

    /// Name of the offending input field.
    pub fn field(&self) -> &str {
        match self {
            EstimateError::InvalidInput { field, .. } => field,
            EstimateError::UnknownProjectType { .. } => "project_type",
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            EstimateError::InvalidInput { .. } => "INVALID_INPUT",
            EstimateError::UnknownProjectType { .. } => "UNKNOWN_PROJECT_TYPE",
        }
    }
}
