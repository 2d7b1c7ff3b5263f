//! Response DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use roomhub_entity::reservation::Reservation;

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message.
    pub message: String,
}

/// A reservation plus its derived effective price.
#[derive(Debug, Clone, Serialize)]
pub struct ReservationView {
    /// The reservation row.
    #[serde(flatten)]
    pub reservation: Reservation,
    /// `admin_adjusted_price` when set, otherwise `total_price` — the
    /// figure invoices display.
    pub effective_price: i64,
}

impl From<Reservation> for ReservationView {
    fn from(reservation: Reservation) -> Self {
        let effective_price = reservation.effective_price();
        Self {
            reservation,
            effective_price,
        }
    }
}

/// The calendar days blocked on a room.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OccupiedDatesResponse {
    /// Every blocked day, ascending.
    pub dates: Vec<NaiveDate>,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status.
    pub status: String,
    /// Version.
    pub version: String,
}

/// Detailed health response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailedHealthResponse {
    /// Overall status.
    pub status: String,
    /// Database status.
    pub database: String,
    /// Version.
    pub version: String,
}
