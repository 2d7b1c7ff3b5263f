//! # roomhub-core
//!
//! Core crate for Roomhub. Contains configuration schemas, the unified
//! error system, and the shared value types (booking periods, hour ranges,
//! pagination) used by every other crate.
//!
//! This crate has **no** internal dependencies on other Roomhub crates.

pub mod config;
pub mod error;
pub mod result;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
