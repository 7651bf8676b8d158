//! # Error Types
//!
//! Structured error types for calcify_core. Every failure a formula module
//! can produce is one of these variants; callers serialize them into the
//! error envelope rather than matching on message strings.
//!
//! ## Example
//!
//! ```rust
//! use calcify_core::errors::{CalcError, CalcResult};
//!
//! fn validate_amount(amount: f64) -> CalcResult<()> {
//!     if amount <= 0.0 {
//!         return Err(CalcError::invalid_input(
//!             "amount",
//!             amount.to_string(),
//!             "Amount must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for calcify_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculation operations.
///
/// All errors are terminal for the call: nothing is retried or recovered
/// internally, each variant is surfaced to the caller as a failure envelope.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// A required parameter is absent, empty, or non-numeric
    #[error("Missing or non-numeric input: {field}")]
    MissingInput { field: String },

    /// A parameter is present but semantically out of range
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A source or destination unit is not in the relevant conversion table
    #[error("Unsupported {category} unit: {unit}")]
    UnsupportedUnit { unit: String, category: String },

    /// The conversion category itself is not recognized
    #[error("Unsupported conversion category: {category}")]
    UnsupportedCategory { category: String },
}

impl CalcError {
    /// Create a MissingInput error
    pub fn missing_input(field: impl Into<String>) -> Self {
        CalcError::MissingInput {
            field: field.into(),
        }
    }

    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an UnsupportedUnit error
    pub fn unsupported_unit(unit: impl Into<String>, category: impl Into<String>) -> Self {
        CalcError::UnsupportedUnit {
            unit: unit.into(),
            category: category.into(),
        }
    }

    /// Create an UnsupportedCategory error
    pub fn unsupported_category(category: impl Into<String>) -> Self {
        CalcError::UnsupportedCategory {
            category: category.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::MissingInput { .. } => "MISSING_INPUT",
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::UnsupportedUnit { .. } => "UNSUPPORTED_UNIT",
            CalcError::UnsupportedCategory { .. } => "UNSUPPORTED_CATEGORY",
        }
    }
}

/// Check that a computed value is finite before it is attached to a
/// result.
///
/// Extreme-but-valid inputs can overflow f64 arithmetic to infinity or
/// NaN, and serde_json renders non-finite floats as `null`. Every numeric
/// output field passes through this guard so arithmetic overflow surfaces
/// as an `InvalidInput` failure instead of a null field inside a success
/// envelope.
pub fn ensure_finite(field: &str, value: f64) -> CalcResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CalcError::invalid_input(
            field,
            value.to_string(),
            "Inputs are out of range for a finite result",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::invalid_input("amount", "-5.0", "Amount must be positive");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::missing_input("dob").error_code(), "MISSING_INPUT");
        assert_eq!(
            CalcError::unsupported_unit("Furlong", "length").error_code(),
            "UNSUPPORTED_UNIT"
        );
        assert_eq!(
            CalcError::unsupported_category("pressure").error_code(),
            "UNSUPPORTED_CATEGORY"
        );
    }

    #[test]
    fn test_ensure_finite() {
        assert_eq!(ensure_finite("x", 1.5).unwrap(), 1.5);
        assert_eq!(ensure_finite("x", 0.0).unwrap(), 0.0);
        assert_eq!(
            ensure_finite("x", f64::NAN).unwrap_err().error_code(),
            "INVALID_INPUT"
        );
        assert_eq!(
            ensure_finite("x", f64::INFINITY).unwrap_err().error_code(),
            "INVALID_INPUT"
        );
    }

    #[test]
    fn test_display_messages() {
        let error = CalcError::missing_input("principal");
        assert_eq!(error.to_string(), "Missing or non-numeric input: principal");

        let error = CalcError::unsupported_category("volume");
        assert_eq!(error.to_string(), "Unsupported conversion category: volume");
    }
}
