//! Admin operations — user management and the platform dashboard.

pub mod service;

pub use service::{AdminService, OverviewStats};
