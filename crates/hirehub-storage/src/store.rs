//! The resume store abstraction.

use async_trait::async_trait;
use bytes::Bytes;

use hirehub_core::result::AppResult;

/// Stores resume blobs and addresses them by public URL.
///
/// Implementations generate a unique object name; callers never choose
/// where a blob lands.
#[async_trait]
pub trait ResumeStore: Send + Sync {
    /// Store the given bytes and return the public URL of the blob.
    ///
    /// `original_filename` is used only to preserve the file extension.
    async fn store(&self, original_filename: &str, content: Bytes) -> AppResult<String>;

    /// Check the store is reachable and writable.
    async fn health_check(&self) -> AppResult<bool>;
}
