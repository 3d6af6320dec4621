//! Email notification configuration.

use serde::{Deserialize, Serialize};

/// SMTP settings for the outbound notification sink.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailConfig {
    /// Whether outbound email is enabled. When disabled, notifications are
    /// logged and dropped.
    #[serde(default)]
    pub enabled: bool,
    /// SMTP relay hostname.
    #[serde(default = "default_smtp_host")]
    pub smtp_host: String,
    /// SMTP username.
    #[serde(default)]
    pub smtp_user: String,
    /// SMTP password.
    #[serde(default)]
    pub smtp_password: String,
    /// From address for all outbound mail.
    #[serde(default = "default_from_address")]
    pub from_address: String,
}

fn default_smtp_host() -> String {
    "localhost".to_string()
}

fn default_from_address() -> String {
    "no-reply@hirehub.local".to_string()
}
