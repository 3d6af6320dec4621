//! Local filesystem resume store.

use std::path::PathBuf;

use async_trait::async_trait;
use bytes::Bytes;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::debug;
use uuid::Uuid;

use hirehub_core::config::storage::StorageConfig;
use hirehub_core::error::{AppError, ErrorKind};
use hirehub_core::result::AppResult;

use crate::store::ResumeStore;

/// Stores resume blobs on the local filesystem and serves them from a
/// configured public base URL.
#[derive(Debug, Clone)]
pub struct LocalResumeStore {
    /// Root directory for all stored resumes.
    root: PathBuf,
    /// Public base URL under which stored resumes are reachable.
    public_base_url: String,
}

impl LocalResumeStore {
    /// Create a new local resume store rooted at the configured path.
    pub async fn new(config: &StorageConfig) -> AppResult<Self> {
        let root = PathBuf::from(&config.resume_root);
        fs::create_dir_all(&root).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to create resume root: {}", root.display()),
                e,
            )
        })?;
        Ok(Self {
            root,
            public_base_url: config.public_base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Generate a unique object name preserving the original extension.
    fn unique_name(original_filename: &str) -> String {
        let extension = original_filename
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_lowercase())
            .unwrap_or_else(|| "bin".to_string());
        format!("resume-{}.{extension}", Uuid::new_v4())
    }
}

#[async_trait]
impl ResumeStore for LocalResumeStore {
    async fn store(&self, original_filename: &str, content: Bytes) -> AppResult<String> {
        let name = Self::unique_name(original_filename);
        let path = self.root.join(&name);

        let mut file = fs::File::create(&path).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to create resume file: {}", path.display()),
                e,
            )
        })?;
        file.write_all(&content).await.map_err(|e| {
            AppError::with_source(ErrorKind::Storage, "Failed to write resume file", e)
        })?;
        file.flush().await.map_err(|e| {
            AppError::with_source(ErrorKind::Storage, "Failed to flush resume file", e)
        })?;

        debug!(name = %name, bytes = content.len(), "Stored resume");
        Ok(format!("{}/{name}", self.public_base_url))
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(self.root.exists() && self.root.is_dir())
    }
}
