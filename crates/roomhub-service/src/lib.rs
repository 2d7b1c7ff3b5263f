//! # roomhub-service
//!
//! Business logic service layer for Roomhub. Each service orchestrates
//! repositories and the notification queue to implement application-level
//! use cases; the booking module holds the availability and pricing core.
//!
//! Services follow constructor injection — all dependencies are provided
//! at construction time via `Arc` references.

pub mod advertisement;
pub mod booking;
pub mod notification;
pub mod room;

pub use advertisement::AdvertisementService;
pub use booking::{AvailabilityService, BookingRequest, ReservationService};
pub use notification::NotificationService;
pub use room::RoomService;
