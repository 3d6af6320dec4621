//! Application submission and review.

pub mod service;

pub use service::{ApplicationService, ApplicationWithJob, ResumeUpload};
