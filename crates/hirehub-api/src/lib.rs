//! # hirehub-api
//!
//! HTTP API layer for HireHub, built on Axum. Routes live under `/api`
//! and handlers translate between DTOs and the service layer; all
//! authorization decisions happen in `hirehub-service`.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use error::ApiError;
pub use state::AppState;
