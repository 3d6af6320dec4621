//! Application status enumeration and transition rules.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Review status of a job application.
///
/// `accepted` and `rejected` are terminal. Every other transition an
/// employer or admin requests is allowed, except moving an application
/// back to `pending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "application_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    /// Submitted, not yet looked at.
    Pending,
    /// Under review.
    Reviewing,
    /// Shortlisted for the role.
    Shortlisted,
    /// Accepted. Terminal.
    Accepted,
    /// Rejected. Terminal.
    Rejected,
}

impl ApplicationStatus {
    /// Check if the status is terminal.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Accepted | Self::Rejected)
    }

    /// Check whether a transition to `next` is legal.
    pub fn can_transition_to(&self, next: ApplicationStatus) -> bool {
        if self.is_terminal() {
            return false;
        }
        next != Self::Pending
    }

    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Reviewing => "reviewing",
            Self::Shortlisted => "shortlisted",
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
        }
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ApplicationStatus {
    type Err = hirehub_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "reviewing" => Ok(Self::Reviewing),
            "shortlisted" => Ok(Self::Shortlisted),
            "accepted" => Ok(Self::Accepted),
            "rejected" => Ok(Self::Rejected),
            _ => Err(hirehub_core::AppError::validation(format!(
                "Invalid application status: '{s}'. Expected one of: \
                 pending, reviewing, shortlisted, accepted, rejected"
            ))),
        }
    }
}
