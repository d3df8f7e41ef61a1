//! # Error Types
//!
//! Domain-specific error types for xrptip-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  xrptip-core errors (this file)                                        │
//! │  ├── CoreError        - Domain errors (payment requests, wallet links) │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  xrptip-config errors (separate crate)                                 │
//! │  └── ConfigError      - File, TOML and environment failures            │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError / ConfigError → caller              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## What Is NOT An Error
//! Fee calculation never fails. An empty, partial or negative amount in a
//! live form yields the zero breakdown, and callers branch on
//! `breakdown.total.is_positive()`.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A payment was requested but no positive amount is selected.
    ///
    /// ## When This Occurs
    /// - Custom amount field holds "0", "-3" or text that isn't a number
    /// - Custom amount rounds to zero drops
    #[error("No tip amount selected")]
    NoAmountSelected,

    /// The Xaman sign request could not be encoded.
    #[error("Failed to encode wallet transaction: {0}")]
    TransactionEncoding(#[from] serde_json::Error),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Used for early validation of addresses, tags, usernames and fee
/// configuration before any URI or policy is built from them.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too short.
    #[error("{field} must be at least {min} characters")]
    TooShort { field: String, min: usize },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange {
        field: String,
        min: String,
        max: String,
    },

    /// Invalid format (e.g., address with a forbidden character).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Two fields contradict each other.
    #[error("{field} must not be less than {other}")]
    LessThan { field: String, other: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(CoreError::NoAmountSelected.to_string(), "No tip amount selected");

        let err = ValidationError::LessThan {
            field: "max_fee".to_string(),
            other: "min_fee".to_string(),
        };
        assert_eq!(err.to_string(), "max_fee must not be less than min_fee");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "username".to_string(),
        };
        assert_eq!(err.to_string(), "username is required");

        let err = ValidationError::OutOfRange {
            field: "fee_percentage".to_string(),
            min: "0".to_string(),
            max: "1".to_string(),
        };
        assert_eq!(err.to_string(), "fee_percentage must be between 0 and 1");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "address".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
