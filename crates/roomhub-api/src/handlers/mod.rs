//! HTTP request handlers.

pub mod ad;
pub mod admin;
pub mod health;
pub mod reservation;
pub mod room;
