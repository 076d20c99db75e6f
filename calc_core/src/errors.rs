//! # Error Types
//!
//! Structured error types for calc_core. Every failure is classified, never
//! recovered: these are pure computations, so the same input always produces
//! the same error and callers decide how to present it.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::errors::{CalcError, CalcResult};
//!
//! fn validate_side(name: &str, value: f64) -> CalcResult<()> {
//!     if value <= 0.0 {
//!         return Err(CalcError::invalid_triangle(format!(
//!             "{} must be positive, got {}",
//!             name, value
//!         )));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_side("opposite", -1.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for calc_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculation operations.
///
/// Each variant provides specific context about what went wrong,
/// enabling programmatic error handling by UIs, HTTP layers and LLM tools.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// Conversion category id is not one of the known categories
    #[error("Unknown conversion category: '{category}'")]
    UnknownCategory { category: String },

    /// Unit id does not belong to the requested category
    #[error("Unknown unit '{unit}' for category '{category}'")]
    UnknownUnit { category: String, unit: String },

    /// Side lengths do not describe a right triangle (ratio outside [-1, 1],
    /// division by zero, non-positive side)
    #[error("Invalid triangle: {reason}")]
    InvalidTriangle { reason: String },

    /// A trigonometric ratio is undefined at this angle (reciprocal of zero)
    #[error("{function}({angle_degrees}°) is undefined")]
    UndefinedValue {
        function: String,
        angle_degrees: f64,
    },

    /// An input value is invalid (non-finite, out of range, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// Currency code is not in the supported list
    #[error("Unknown currency: '{code}'")]
    UnknownCurrency { code: String },

    /// Exchange rate table has no usable rate for a currency
    #[error("No exchange rate available for {code}")]
    MissingRate { code: String },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Schema version mismatch
    #[error("Version mismatch: file version {file_version}, expected {expected_version}")]
    VersionMismatch {
        file_version: String,
        expected_version: String,
    },
}

impl CalcError {
    /// Create an UnknownCategory error
    pub fn unknown_category(category: impl Into<String>) -> Self {
        CalcError::UnknownCategory {
            category: category.into(),
        }
    }

    /// Create an UnknownUnit error
    pub fn unknown_unit(category: impl Into<String>, unit: impl Into<String>) -> Self {
        CalcError::UnknownUnit {
            category: category.into(),
            unit: unit.into(),
        }
    }

    /// Create an InvalidTriangle error
    pub fn invalid_triangle(reason: impl Into<String>) -> Self {
        CalcError::InvalidTriangle {
            reason: reason.into(),
        }
    }

    /// Create an UndefinedValue error
    pub fn undefined_value(function: impl Into<String>, angle_degrees: f64) -> Self {
        CalcError::UndefinedValue {
            function: function.into(),
            angle_degrees,
        }
    }

    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an UnknownCurrency error
    pub fn unknown_currency(code: impl Into<String>) -> Self {
        CalcError::UnknownCurrency { code: code.into() }
    }

    /// Create a MissingRate error
    pub fn missing_rate(code: impl Into<String>) -> Self {
        CalcError::MissingRate { code: code.into() }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Check if this is a recoverable error (e.g., can retry).
    ///
    /// Only I/O can succeed on a second attempt; calculation errors are
    /// deterministic.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, CalcError::FileError { .. })
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::UnknownCategory { .. } => "UNKNOWN_CATEGORY",
            CalcError::UnknownUnit { .. } => "UNKNOWN_UNIT",
            CalcError::InvalidTriangle { .. } => "INVALID_TRIANGLE",
            CalcError::UndefinedValue { .. } => "UNDEFINED_VALUE",
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::UnknownCurrency { .. } => "UNKNOWN_CURRENCY",
            CalcError::MissingRate { .. } => "MISSING_RATE",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
            CalcError::VersionMismatch { .. } => "VERSION_MISMATCH",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(e: serde_json::Error) -> Self {
        CalcError::SerializationError {
            reason: e.to_string(),
        }
    }
}
