//! Room administration and public listing.

pub mod service;

pub use service::RoomService;
