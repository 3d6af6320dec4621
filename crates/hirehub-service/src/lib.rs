//! # hirehub-service
//!
//! Business logic service layer for HireHub. Each service orchestrates
//! repositories, storage, authentication, and notifications to implement
//! application-level use cases.
//!
//! Services follow constructor injection — all dependencies are provided
//! at construction time via `Arc` references. Authorization happens at
//! the top of every mutating method, in order: role, employer approval
//! gate, resource ownership. No side effect runs before the policy
//! checks pass.

pub mod admin;
pub mod application;
pub mod identity;
pub mod job;

pub use admin::AdminService;
pub use application::ApplicationService;
pub use identity::IdentityService;
pub use job::JobService;
