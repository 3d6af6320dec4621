//! Resume upload validation: file type allow-list and size cap.

use hirehub_core::config::storage::StorageConfig;
use hirehub_core::error::AppError;

/// File extensions accepted for resumes.
const ALLOWED_EXTENSIONS: &[&str] = &["pdf", "doc", "docx"];

/// MIME types accepted for resumes.
const ALLOWED_MIME_TYPES: &[&str] = &[
    "application/pdf",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
];

/// Validates resume uploads before they reach the store.
#[derive(Debug, Clone)]
pub struct ResumePolicy {
    /// Maximum resume size in bytes.
    max_size_bytes: u64,
}

impl ResumePolicy {
    /// Create a policy from storage configuration.
    pub fn new(config: &StorageConfig) -> Self {
        Self {
            max_size_bytes: config.max_resume_size_bytes,
        }
    }

    /// Validate a resume's filename, declared content type, and size.
    pub fn validate(
        &self,
        filename: &str,
        content_type: Option<&str>,
        size_bytes: u64,
    ) -> Result<(), AppError> {
        let extension = filename
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_lowercase())
            .unwrap_or_default();

        if !ALLOWED_EXTENSIONS.contains(&extension.as_str()) {
            return Err(AppError::validation(
                "Only PDF, DOC, and DOCX files are allowed",
            ));
        }

        if let Some(mime) = content_type {
            if !ALLOWED_MIME_TYPES.contains(&mime) {
                return Err(AppError::validation(
                    "Only PDF, DOC, and DOCX files are allowed",
                ));
            }
        }

        if size_bytes == 0 {
            return Err(AppError::validation("Resume file is empty"));
        }

        if size_bytes > self.max_size_bytes {
            return Err(AppError::validation(format!(
                "Resume exceeds the maximum size of {} bytes",
                self.max_size_bytes
            )));
        }

        Ok(())
    }
}
