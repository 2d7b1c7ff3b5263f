//! Reservation entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use roomhub_core::types::period::BookingPeriod;

use super::catering::{BreakfastOption, CateringSelection};
use super::status::ReservationStatus;

/// A room reservation.
///
/// `total_price` is computed once at creation and never recomputed; the
/// admin override pair (`admin_adjusted_price`/`admin_price_note`) is a
/// side-channel on top of it, so the invoice can always show both what the
/// formula produced and what was actually charged.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Reservation {
    /// Unique reservation identifier.
    pub id: Uuid,
    /// The reserved room.
    pub room_id: Uuid,
    /// Customer full name.
    pub customer_name: String,
    /// Customer email address.
    pub customer_email: String,
    /// Customer phone number.
    pub customer_phone: String,
    /// Purpose of the event (meeting, training, conference, ...).
    pub event_object: String,
    /// First reserved instant (inclusive).
    pub start_time: DateTime<Utc>,
    /// Last reserved instant (inclusive).
    pub end_time: DateTime<Utc>,
    /// First hour of use each day (0–23).
    pub start_hour: i16,
    /// Last hour of use each day (0–23).
    pub end_hour: i16,
    /// Lifecycle status.
    pub status: ReservationStatus,
    /// Total price computed at creation (room + catering).
    pub total_price: i64,
    /// Room cost before the half-day rule.
    pub room_price_original: i64,
    /// Room cost actually charged (halved when the half-day rule fired).
    pub room_price_applied: i64,
    /// Whether the half-day rule fired.
    pub is_half_day: bool,
    /// Full lunch selected.
    pub lunch_selected: bool,
    /// Breakfast tier id (1–3), if any.
    pub breakfast_option: Option<i16>,
    /// Coffee break selected.
    pub coffee_break_selected: bool,
    /// Number of attendees.
    pub number_of_guests: i32,
    /// Free-form customer notes.
    pub notes: Option<String>,
    /// Admin price override, if set.
    pub admin_adjusted_price: Option<i64>,
    /// Admin note explaining the override.
    pub admin_price_note: Option<String>,
    /// Client-supplied key deduplicating retried submissions.
    pub idempotency_key: Option<String>,
    /// When the reservation was created.
    pub created_at: DateTime<Utc>,
    /// When the reservation was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Reservation {
    /// The price shown on invoices: the admin override when present,
    /// otherwise the computed total.
    pub fn effective_price(&self) -> i64 {
        self.admin_adjusted_price.unwrap_or(self.total_price)
    }

    /// The reserved interval as a validated period.
    pub fn period(&self) -> BookingPeriod {
        BookingPeriod {
            start: self.start_time,
            end: self.end_time,
        }
    }

    /// The catering add-ons as a value object.
    pub fn catering(&self) -> CateringSelection {
        CateringSelection {
            lunch: self.lunch_selected,
            breakfast: self.breakfast_option.and_then(BreakfastOption::from_id),
            coffee_break: self.coffee_break_selected,
        }
    }
}

/// Data required to persist a new reservation.
///
/// Built by the lifecycle service after validation and pricing; repositories
/// never compute prices themselves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateReservation {
    /// The reserved room.
    pub room_id: Uuid,
    /// Customer full name.
    pub customer_name: String,
    /// Customer email address.
    pub customer_email: String,
    /// Customer phone number.
    pub customer_phone: String,
    /// Purpose of the event.
    pub event_object: String,
    /// First reserved instant.
    pub start_time: DateTime<Utc>,
    /// Last reserved instant.
    pub end_time: DateTime<Utc>,
    /// First hour of use (0–23).
    pub start_hour: i16,
    /// Last hour of use (0–23).
    pub end_hour: i16,
    /// Computed total price.
    pub total_price: i64,
    /// Room cost before the half-day rule.
    pub room_price_original: i64,
    /// Room cost actually charged.
    pub room_price_applied: i64,
    /// Whether the half-day rule fired.
    pub is_half_day: bool,
    /// Full lunch selected.
    pub lunch_selected: bool,
    /// Breakfast tier id (1–3), if any.
    pub breakfast_option: Option<i16>,
    /// Coffee break selected.
    pub coffee_break_selected: bool,
    /// Number of attendees.
    pub number_of_guests: i32,
    /// Free-form customer notes.
    pub notes: Option<String>,
    /// Client-supplied deduplication key.
    pub idempotency_key: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reservation() -> Reservation {
        Reservation {
            id: Uuid::new_v4(),
            room_id: Uuid::new_v4(),
            customer_name: "Jean Dupont".to_string(),
            customer_email: "jean.dupont@example.com".to_string(),
            customer_phone: "+241 01 02 03 04".to_string(),
            event_object: "Formation".to_string(),
            start_time: Utc::now(),
            end_time: Utc::now() + chrono::Duration::days(2),
            start_hour: 8,
            end_hour: 18,
            status: ReservationStatus::Pending,
            total_price: 400_000,
            room_price_original: 300_000,
            room_price_applied: 300_000,
            is_half_day: false,
            lunch_selected: true,
            breakfast_option: None,
            coffee_break_selected: false,
            number_of_guests: 4,
            notes: None,
            admin_adjusted_price: None,
            admin_price_note: None,
            idempotency_key: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_effective_price_prefers_override() {
        let mut r = reservation();
        assert_eq!(r.effective_price(), 400_000);

        r.admin_adjusted_price = Some(350_000);
        r.admin_price_note = Some("partner rate".to_string());
        assert_eq!(r.effective_price(), 350_000);
        // The computed baseline is retained for the invoice audit trail.
        assert_eq!(r.total_price, 400_000);

        r.admin_adjusted_price = None;
        assert_eq!(r.effective_price(), 400_000);
    }

    #[test]
    fn test_catering_projection() {
        let mut r = reservation();
        r.breakfast_option = Some(2);
        let catering = r.catering();
        assert!(catering.lunch);
        assert_eq!(catering.breakfast, Some(BreakfastOption::Two));
        assert!(!catering.coffee_break);
    }
}
