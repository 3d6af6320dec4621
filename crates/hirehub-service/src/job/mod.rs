//! Job posting lifecycle — creation, listing, review, and closure.

pub mod service;

pub use service::JobService;
