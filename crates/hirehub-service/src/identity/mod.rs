//! Registration, login, token authentication, and profile self-service.

pub mod service;

pub use service::{AuthSession, IdentityService, RegisterRequest, UpdateProfileRequest};
