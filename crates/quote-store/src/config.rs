//! # Store Configuration
//!
//! Where the data lives and the key that opens it.
//!
//! ```text
//! AIRTABLE_API_KEY            secret, required
//! AIRTABLE_BASE_ID            required
//! AIRTABLE_CLIENTS_TABLE      required
//! AIRTABLE_PRODUCTS_TABLE     required
//! AIRTABLE_QUOTATIONS_TABLE   required
//! AIRTABLE_TEAM_TABLE         default "Team"
//! AIRTABLE_API_URL            default https://api.airtable.com/v0
//! AIRTABLE_TIMEOUT_SECS       default 30
//! ```
//!
//! The key is held in a [`Secret`]: `Debug` prints it redacted and nothing
//! in this crate serializes or logs it. Only [`crate::client::TableClient`]
//! exposes it, to build the `Authorization` header.

use std::env;
use std::time::Duration;

use secrecy::Secret;

use crate::error::{StoreError, StoreResult};

pub const DEFAULT_API_URL: &str = "https://api.airtable.com/v0";
pub const DEFAULT_TEAM_TABLE: &str = "Team";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Names of the tables the desk reads and writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableNames {
    pub clients: String,
    pub products: String,
    pub quotations: String,
    pub team: String,
}

/// Remote store configuration.
///
/// ## Example
/// ```rust
/// use quote_store::StoreConfig;
///
/// let config = StoreConfig::new("appXYZ", "key-123")
///     .api_url("http://localhost:8080/v0")
///     .timeout_secs(5);
/// assert!(!format!("{:?}", config).contains("key-123"));
/// ```
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub api_url: String,
    pub base_id: String,
    pub api_key: Secret<String>,
    pub tables: TableNames,
    pub timeout: Duration,
}

impl StoreConfig {
    /// Configuration for `base_id` with default table names and endpoint.
    pub fn new(base_id: impl Into<String>, api_key: impl Into<String>) -> Self {
        StoreConfig {
            api_url: DEFAULT_API_URL.to_string(),
            base_id: base_id.into(),
            api_key: Secret::new(api_key.into()),
            tables: TableNames {
                clients: "Clients".to_string(),
                products: "Products".to_string(),
                quotations: "Quotations".to_string(),
                team: DEFAULT_TEAM_TABLE.to_string(),
            },
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Sets the API endpoint (tests point this at a local mock server).
    pub fn api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }

    pub fn tables(mut self, tables: TableNames) -> Self {
        self.tables = tables;
        self
    }

    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.timeout = Duration::from_secs(secs);
        self
    }

    /// Loads configuration from the process environment.
    pub fn from_env() -> StoreResult<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Loads configuration through `lookup`, which maps a variable name to
    /// its value. Blank values count as missing.
    ///
    /// ## Errors
    /// - `MissingConfiguration` naming every required variable that's absent
    /// - `InvalidConfiguration` for an unreadable timeout
    pub fn from_lookup<F>(lookup: F) -> StoreResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let required = [
            "AIRTABLE_API_KEY",
            "AIRTABLE_BASE_ID",
            "AIRTABLE_CLIENTS_TABLE",
            "AIRTABLE_PRODUCTS_TABLE",
            "AIRTABLE_QUOTATIONS_TABLE",
        ];
        let values: Vec<Option<String>> = required.iter().map(|name| get(name)).collect();
        let missing: Vec<String> = required
            .iter()
            .zip(&values)
            .filter(|(_, value)| value.is_none())
            .map(|(name, _)| name.to_string())
            .collect();

        if !missing.is_empty() {
            return Err(StoreError::MissingConfiguration { missing });
        }

        let mut values = values.into_iter().flatten();
        let mut next = || values.next().unwrap_or_default();
        let (api_key, base_id, clients, products, quotations) = (next(), next(), next(), next(), next());

        let timeout_secs = match get("AIRTABLE_TIMEOUT_SECS") {
            Some(raw) => raw
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or_else(|| StoreError::InvalidConfiguration {
                    name: "AIRTABLE_TIMEOUT_SECS".to_string(),
                    reason: format!("expected a positive number of seconds, got {:?}", raw),
                })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(StoreConfig::new(base_id, api_key)
            .api_url(get("AIRTABLE_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string()))
            .tables(TableNames {
                clients,
                products,
                quotations,
                team: get("AIRTABLE_TEAM_TABLE").unwrap_or_else(|| DEFAULT_TEAM_TABLE.to_string()),
            })
            .timeout_secs(timeout_secs))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
