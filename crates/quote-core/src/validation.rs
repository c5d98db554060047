//! # Validation Module
//!
//! Input validation for the values that leave this system: new client
//! records and the quotation's creator.
//!
//! ## What Is Not Validated
//! Quantities, rates and the discount percent are never rejected. They are
//! coerced (see [`crate::money::coerce_number`]) so a malformed row can't
//! block a quotation. A negative discount is allowed and raises the taxable
//! amount.
//!
//! ## Usage
//! ```rust
//! use quote_core::validation::{validate_client_name, validate_created_by};
//!
//! assert!(validate_client_name("Acme Corp").is_ok());
//! assert!(validate_created_by(None).is_err());
//! ```

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest client name accepted.
pub const MAX_CLIENT_NAME_LEN: usize = 200;

/// Validates a new client's name.
///
/// ## Rules
/// - Must not be empty
/// - At most 200 characters
pub fn validate_client_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::required("Client Name"));
    }

    if name.chars().count() > MAX_CLIENT_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "Client Name".to_string(),
            max: MAX_CLIENT_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates the "Created By" selection and returns the team record id.
///
/// A quotation can't be saved without knowing who created it.
pub fn validate_created_by(created_by: Option<&str>) -> ValidationResult<&str> {
    match created_by.map(str::trim) {
        Some(id) if !id.is_empty() => Ok(id),
        _ => Err(ValidationError::required("Created By")),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_client_name() {
        assert!(validate_client_name("Acme Corp").is_ok());
        assert_eq!(
            validate_client_name("   "),
            Err(ValidationError::required("Client Name"))
        );
        assert!(matches!(
            validate_client_name(&"A".repeat(201)),
            Err(ValidationError::TooLong { max: 200, .. })
        ));
    }

    #[test]
    fn test_validate_created_by() {
        assert_eq!(validate_created_by(Some(" recTeam1 ")), Ok("recTeam1"));
        assert!(validate_created_by(Some("")).is_err());
        assert!(validate_created_by(None).is_err());
    }
}
