//! # hirehub-database
//!
//! PostgreSQL connection management, migrations, and repository
//! implementations for HireHub. Repositories are the only place SQL
//! lives; services depend on them rather than on the pool directly.

pub mod connection;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;
