//! Resume storage configuration.

use serde::{Deserialize, Serialize};

/// Resume blob storage configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Root directory where resume files are written.
    #[serde(default = "default_resume_root")]
    pub resume_root: String,
    /// Public base URL under which stored resumes are served.
    #[serde(default = "default_public_base_url")]
    pub public_base_url: String,
    /// Maximum resume size in bytes (default 5 MB).
    #[serde(default = "default_max_resume_size")]
    pub max_resume_size_bytes: u64,
}

fn default_resume_root() -> String {
    "data/resumes".to_string()
}

fn default_public_base_url() -> String {
    "http://localhost:8080/resumes".to_string()
}

fn default_max_resume_size() -> u64 {
    5 * 1024 * 1024
}
