//! Admin console handlers. Every handler here requires the admin bearer
//! token via the [`AdminToken`](crate::extractors::AdminToken) extractor.

pub mod ad;
pub mod reservation;
pub mod room;
