//! # Store Error Types
//!
//! Error types for remote data store operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  HTTP failure (reqwest::Error) / non-2xx response / bad JSON           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← Adds context and categorization            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  AppError (in quote-cli) ← What the operator sees                      │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use quote_core::ValidationError;
use thiserror::Error;

/// Remote data store errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Record not found.
    ///
    /// ## When This Occurs
    /// - The store answered 404 for a record id
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// Required settings are absent. Every missing name is listed.
    #[error("Missing configuration: {}", missing.join(", "))]
    MissingConfiguration { missing: Vec<String> },

    /// A setting is present but unusable.
    #[error("Invalid configuration {name}: {reason}")]
    InvalidConfiguration { name: String, reason: String },

    /// The store rejected the request.
    ///
    /// ## When This Occurs
    /// - Unknown table or field name (422)
    /// - Bad or revoked API key (401/403)
    /// - Rate limiting (429)
    #[error("Store request failed ({status}): {message}")]
    Api { status: u16, message: String },

    /// The request never got an answer (DNS, TLS, timeout).
    #[error("Transport error: {0}")]
    Transport(String),

    /// The response body couldn't be read.
    #[error("Decode error: {0}")]
    Decode(String),

    /// A create call succeeded but no record id came back.
    #[error("Store did not return a record id for table {table}; verify table name and field schema")]
    MissingRecordId { table: String },

    /// Input rejected before any request was made.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl StoreError {
    /// Creates a NotFound error for a given entity type and ID.
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        StoreError::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }

    /// Whether this is a `NotFound`.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }
}

/// Convert reqwest errors to StoreError.
///
/// ## Error Mapping
/// ```text
/// decode failure (body not JSON) → StoreError::Decode
/// anything else                  → StoreError::Transport
/// ```
impl From<reqwest::Error> for StoreError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            StoreError::Decode(err.to_string())
        } else {
            StoreError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Decode(err.to_string())
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_configuration_lists_all() {
        let err = StoreError::MissingConfiguration {
            missing: vec!["AIRTABLE_API_KEY".to_string(), "AIRTABLE_BASE_ID".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "Missing configuration: AIRTABLE_API_KEY, AIRTABLE_BASE_ID"
        );
    }

    #[test]
    fn test_not_found() {
        let err = StoreError::not_found("Quotations", "rec123");
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Quotations not found: rec123");
    }

    #[test]
    fn test_json_error_is_decode() {
        let err: StoreError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(matches!(err, StoreError::Decode(_)));
    }
}
