//! CLI configuration module.
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults. Store credentials are loaded separately by
//! [`quote_store::StoreConfig::from_env`] and never pass through here.

use std::env;
use std::path::PathBuf;

use quote_core::DEFAULT_VALIDITY_DAYS;

/// CLI configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Root directory for stored documents (`<dir>/quotations/<file>.pdf`).
    pub artifact_dir: PathBuf,

    /// Public URL prefix the artifact directory is served under, if any.
    /// Without one, stored documents get `file://` URLs.
    pub artifact_base_url: Option<String>,

    /// Days between quotation date and expiry date.
    pub validity_days: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            artifact_dir: PathBuf::from("./artifacts"),
            artifact_base_url: None,
            validity_days: DEFAULT_VALIDITY_DAYS,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration through `lookup` (variable name → value).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let defaults = AppConfig::default();

        Ok(AppConfig {
            artifact_dir: get("QUOTE_ARTIFACT_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.artifact_dir),

            artifact_base_url: match get("QUOTE_ARTIFACT_BASE_URL") {
                Some(url) if url.starts_with("http://") || url.starts_with("https://") => {
                    Some(url.trim_end_matches('/').to_string())
                }
                Some(_) => {
                    return Err(ConfigError::InvalidValue(
                        "QUOTE_ARTIFACT_BASE_URL".to_string(),
                    ))
                }
                None => None,
            },

            validity_days: match get("QUOTE_VALIDITY_DAYS") {
                Some(raw) => raw
                    .parse()
                    .map_err(|_| ConfigError::InvalidValue("QUOTE_VALIDITY_DAYS".to_string()))?,
                None => defaults.validity_days,
            },
        })
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
