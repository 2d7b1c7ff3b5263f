//! # roomhub-api
//!
//! HTTP API layer for Roomhub built on Axum.
//!
//! Provides the public booking endpoints, the token-gated admin surface,
//! DTOs with request validation, extractors, CORS, and error mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::run_server;
pub use state::AppState;
