//! Job posting domain entities.

pub mod classification;
pub mod model;
pub mod status;

pub use classification::{ExperienceLevel, JobCategory, JobType};
pub use model::{CreateJob, Job, JobFilter, SalaryRange, UpdateJob};
pub use status::JobStatus;
