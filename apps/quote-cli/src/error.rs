//! Error types for the Quotation Desk CLI.

use quote_core::CoreError;
use quote_store::StoreError;

use crate::config::ConfigError;

/// CLI errors.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Invalid draft {path}: {reason}")]
    InvalidDraft { path: String, reason: String },

    #[error("Client not found: {0}")]
    ClientNotFound(String),

    #[error("Rendering failed: {0}")]
    Render(String),

    #[error("Storing {filename} failed: {reason}")]
    Artifact { filename: String, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    pub fn artifact(filename: impl Into<String>, reason: impl ToString) -> Self {
        AppError::Artifact {
            filename: filename.into(),
            reason: reason.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quote_core::ValidationError;

    #[test]
    fn test_core_errors_pass_through() {
        let err: AppError = CoreError::from(ValidationError::required("Created By")).into();
        assert_eq!(err.to_string(), "Validation error: Created By is required");
    }

    #[test]
    fn test_artifact_message() {
        let err = AppError::artifact("Q-00001.pdf", "disk full");
        assert_eq!(err.to_string(), "Storing Q-00001.pdf failed: disk full");
    }
}
