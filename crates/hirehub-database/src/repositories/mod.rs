//! Repository implementations, one per aggregate.

pub mod application;
pub mod job;
pub mod user;

pub use application::{ApplicationRepository, ApplicationWithApplicant};
pub use job::{JobRepository, JobWithPoster};
pub use user::UserRepository;
