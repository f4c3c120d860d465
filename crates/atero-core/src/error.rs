//! # Error Types
//!
//! Domain-specific error types for atero-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  atero-core errors (this file)                                         │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  atero-session errors (separate crate)                                 │
//! │  └── SessionError     - What the presentation layer sees               │
//! │                                                                         │
//! │  Flow: ValidationError → SessionError → user-facing message            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field name, bounds)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message; nothing here is
//!    fatal - every error path returns control to the caller
//!
//! Lookup-by-id misses are NOT errors anywhere in this crate: unknown ids
//! produce `Option`/`bool` no-op results.

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when user input doesn't meet requirements: empty
/// required fields, out-of-range prices, malformed card fields, invalid
/// table numbers. This is the only recoverable error kind in the system -
/// it is always surfaced as a message on the same screen, never a crash.
#[derive(Debug, Error, PartialEq, Eq)]
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
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g., malformed card expiry, non-numeric table).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::TooShort {
            field: "description".to_string(),
            min: 10,
        };
        assert_eq!(
            err.to_string(),
            "description must be at least 10 characters"
        );

        let err = ValidationError::InvalidFormat {
            field: "expiry".to_string(),
            reason: "expected MM/YY".to_string(),
        };
        assert_eq!(err.to_string(), "expiry has invalid format: expected MM/YY");

        let err = ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 1,
            max: 100_000,
        };
        assert_eq!(err.to_string(), "price must be between 1 and 100000");
    }
}
