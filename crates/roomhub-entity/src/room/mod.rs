//! Room entity.

pub mod model;

pub use model::{CreateRoom, MAX_PRICE_PER_DAY, Room, UpdateRoom};
