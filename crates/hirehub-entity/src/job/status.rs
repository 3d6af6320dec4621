//! Job posting status enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle status of a job posting.
///
/// Every job starts `pending` and only an admin moves it to `open`
/// (approval) or `closed` (rejection or explicit close). There is no
/// transition out of `closed` exposed to employers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "job_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    /// Awaiting admin review; invisible to applicants.
    Pending,
    /// Admin-approved; visible in listings and accepting applications.
    Open,
    /// Rejected or explicitly closed. Terminal for employers.
    Closed,
}

impl JobStatus {
    /// Whether the job accepts new applications.
    pub fn accepts_applications(&self) -> bool {
        matches!(self, Self::Open)
    }

    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Open => "open",
            Self::Closed => "closed",
        }
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for JobStatus {
    type Err = hirehub_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "open" => Ok(Self::Open),
            "closed" => Ok(Self::Closed),
            _ => Err(hirehub_core::AppError::validation(format!(
                "Invalid job status: '{s}'. Expected one of: pending, open, closed"
            ))),
        }
    }
}
