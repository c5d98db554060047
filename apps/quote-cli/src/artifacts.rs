//! Local artifact storage.
//!
//! Documents land in `<root>/quotations/<filename>`. When the directory is
//! served over HTTP, `base_url` maps it to public URLs; otherwise the URL is
//! a `file://` path.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::debug;

use crate::error::AppError;
use crate::workflow::{ArtifactStore, RenderedArtifact};

/// Subfolder every quotation document is stored under.
pub const QUOTATIONS_DIR: &str = "quotations";

/// Stores artifacts on the local filesystem.
#[derive(Debug, Clone)]
pub struct LocalArtifactStore {
    root: PathBuf,
    base_url: Option<String>,
}

impl LocalArtifactStore {
    pub fn new(root: impl Into<PathBuf>, base_url: Option<String>) -> Self {
        LocalArtifactStore {
            root: root.into(),
            base_url: base_url.map(|url| url.trim_end_matches('/').to_string()),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn url_for(&self, filename: &str, path: &Path) -> String {
        match &self.base_url {
            Some(base) => format!("{}/{}/{}", base, QUOTATIONS_DIR, filename),
            None => format!("file://{}", path.display()),
        }
    }
}

#[async_trait]
impl ArtifactStore for LocalArtifactStore {
    async fn store(&self, filename: &str, artifact: &RenderedArtifact) -> Result<String, AppError> {
        if filename.is_empty() || filename.contains(['/', '\\']) || filename.starts_with('.') {
            return Err(AppError::artifact(filename, "invalid filename"));
        }

        let dir = self.root.join(QUOTATIONS_DIR);
        tokio::fs::create_dir_all(&dir)
            .await
            .map_err(|e| AppError::artifact(filename, e))?;

        let path = dir.join(filename);
        tokio::fs::write(&path, &artifact.bytes)
            .await
            .map_err(|e| AppError::artifact(filename, e))?;

        let path = tokio::fs::canonicalize(&path).await.unwrap_or(path);
        debug!(
            path = %path.display(),
            bytes = artifact.bytes.len(),
            content_type = %artifact.content_type,
            "Artifact written"
        );

        Ok(self.url_for(filename, &path))
    }
}
