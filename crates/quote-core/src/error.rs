//! # Error Types
//!
//! Domain-specific error types for quote-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  quote-core errors (this file)                                         │
//! │  ├── CoreError        - Domain errors (words range, missing lines)     │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  quote-store errors (separate crate)                                   │
//! │  └── StoreError       - Remote data store failures                     │
//! │                                                                         │
//! │  quote-cli errors (app)                                                │
//! │  └── AppError         - What the operator sees                         │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → AppError → stderr                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The totals engine itself has no error path: malformed numbers degrade to
//! zero. Errors here come from the formatter's range limit, draft editing
//! and record building.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    /// The words formatter only spells amounts below one hundred crore.
    ///
    /// ## When This Occurs
    /// - `words_of(1_000_000_000)` or anything larger
    #[error("Amount {value} is out of range for words (maximum {max})")]
    AmountOutOfRange { value: u64, max: u64 },

    /// A draft edit referenced a row that doesn't exist.
    #[error("Line {index} not found (draft has {len} lines)")]
    LineNotFound { index: usize, len: usize },

    /// Quotation number couldn't be read.
    #[error("Invalid quotation id: {0}")]
    InvalidQuotationId(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when user input doesn't meet requirements.
/// Used for early validation before anything is sent to the store.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },
}

impl ValidationError {
    /// Creates a Required error for `field`.
    pub fn required(field: impl Into<String>) -> Self {
        ValidationError::Required {
            field: field.into(),
        }
    }
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
        let err = CoreError::AmountOutOfRange {
            value: 1_000_000_000,
            max: 999_999_999,
        };
        assert_eq!(
            err.to_string(),
            "Amount 1000000000 is out of range for words (maximum 999999999)"
        );

        let err = CoreError::LineNotFound { index: 3, len: 2 };
        assert_eq!(err.to_string(), "Line 3 not found (draft has 2 lines)");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::required("Created By");
        assert_eq!(err.to_string(), "Created By is required");

        let err = ValidationError::TooLong {
            field: "Client Name".to_string(),
            max: 200,
        };
        assert_eq!(err.to_string(), "Client Name must be at most 200 characters");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::required("Created By");
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
