//! # Error Types
//!
//! Structured error types for wheel_core. Each variant carries enough context
//! to understand and fix the problem programmatically rather than parsing a
//! message string.
//!
//! ## Example
//!
//! ```rust
//! use wheel_core::errors::{WheelError, WheelResult};
//!
//! fn validate_spoke_count(n_spokes: usize) -> WheelResult<()> {
//!     if n_spokes % 2 != 0 {
//!         return Err(WheelError::invalid_input(
//!             "n_spokes",
//!             n_spokes.to_string(),
//!             "Spoke count must be even",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for wheel_core operations
pub type WheelResult<T> = Result<T, WheelError>;

/// Structured error type for wheel model operations.
///
/// Validation errors are fatal to the call that raised them; there is no
/// retry or recovery path. Missing-density conditions are *not* errors and
/// are reported through [`crate::diagnostics`] instead.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum WheelError {
    /// An input value is invalid (out of range, inconsistent, ambiguous)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A required field is missing
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// An operation needs more spokes than the wheel currently has
    #[error("{operation} requires at least {required} spokes, wheel has {found}")]
    InsufficientSpokes {
        operation: String,
        required: usize,
        found: usize,
    },
}

impl WheelError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        WheelError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MissingField error
    pub fn missing_field(field: impl Into<String>) -> Self {
        WheelError::MissingField {
            field: field.into(),
        }
    }

    /// Create an InsufficientSpokes error
    pub fn insufficient_spokes(
        operation: impl Into<String>,
        required: usize,
        found: usize,
    ) -> Self {
        WheelError::InsufficientSpokes {
            operation: operation.into(),
            required,
            found,
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            WheelError::InvalidInput { .. } => "INVALID_INPUT",
            WheelError::MissingField { .. } => "MISSING_FIELD",
            WheelError::InsufficientSpokes { .. } => "INSUFFICIENT_SPOKES",
        }
    }
}
