//! # hirehub-auth
//!
//! Authentication and authorization for the HireHub platform.
//!
//! ## Modules
//!
//! - `jwt` — stateless session token creation and validation
//! - `password` — Argon2id password hashing and policy enforcement
//! - `policy` — the ordered authorization pipeline: role, approval
//!   gate, and resource ownership checks as pure functions

pub mod jwt;
pub mod password;
pub mod policy;

pub use jwt::{Claims, JwtDecoder, JwtEncoder};
pub use password::{PasswordHasher, PasswordValidator};
