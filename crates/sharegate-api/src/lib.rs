//! # sharegate-api
//!
//! HTTP API layer for ShareGate built on Axum.
//!
//! Provides the REST endpoints, middleware (request logging, CORS,
//! compression, body limit), DTOs, error mapping, and the static home page
//! fallback.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use error::ApiError;
pub use router::build_router;
pub use state::AppState;
