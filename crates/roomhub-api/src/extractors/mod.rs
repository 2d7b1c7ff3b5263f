//! Request extractors.

pub mod admin;
pub mod pagination;

pub use admin::AdminToken;
pub use pagination::PaginationParams;
