//! Job application domain entities.

pub mod model;
pub mod status;

pub use model::{Application, CreateApplication};
pub use status::ApplicationStatus;
