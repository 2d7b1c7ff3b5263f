//! Reservation lifecycle: creation, status transitions, admin price
//! overrides.
//!
//! Everything that mutates a reservation goes through this service. The
//! ordering inside [`ReservationService::create`] is part of the contract:
//! field validation first (so a capacity overrun is reported before any
//! availability query runs), then the availability read, then pricing, then
//! the atomic insert that re-checks availability under the room lock.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use roomhub_core::error::AppError;
use roomhub_core::result::AppResult;
use roomhub_core::types::pagination::{PageRequest, PageResponse};
use roomhub_core::types::period::{BookingPeriod, HourRange};
use roomhub_database::repositories::reservation::ReservationRepository;
use roomhub_database::repositories::room::RoomRepository;
use roomhub_entity::reservation::{
    BreakfastOption, CateringSelection, CreateReservation, Reservation, ReservationStatus,
};
use roomhub_entity::room::Room;

use crate::booking::availability::AvailabilityService;
use crate::booking::pricing::compute_quote;
use crate::notification::NotificationService;

/// A booking submission, from the public form or an admin manual entry —
/// both go through the same path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingRequest {
    /// The requested room.
    pub room_id: Uuid,
    /// Customer full name.
    pub customer_name: String,
    /// Customer email address.
    pub customer_email: String,
    /// Customer phone number.
    pub customer_phone: String,
    /// Purpose of the event.
    pub event_object: String,
    /// First requested instant.
    pub start_time: DateTime<Utc>,
    /// Last requested instant.
    pub end_time: DateTime<Utc>,
    /// First hour of use (0–23).
    pub start_hour: u8,
    /// Last hour of use (0–23).
    pub end_hour: u8,
    /// Number of attendees.
    pub number_of_guests: i32,
    /// Full lunch selected.
    pub lunch_selected: bool,
    /// Breakfast tier id (1–3), if any.
    pub breakfast_option: Option<i16>,
    /// Coffee break selected.
    pub coffee_break_selected: bool,
    /// Free-form customer notes.
    pub notes: Option<String>,
    /// Client-supplied deduplication key for safe retries.
    pub idempotency_key: Option<String>,
}

/// Orchestrates reservation creation and every later mutation.
#[derive(Debug, Clone)]
pub struct ReservationService {
    room_repo: Arc<RoomRepository>,
    reservation_repo: Arc<ReservationRepository>,
    availability: Arc<AvailabilityService>,
    notifier: Arc<NotificationService>,
}

impl ReservationService {
    /// Creates a new reservation service.
    pub fn new(
        room_repo: Arc<RoomRepository>,
        reservation_repo: Arc<ReservationRepository>,
        availability: Arc<AvailabilityService>,
        notifier: Arc<NotificationService>,
    ) -> Self {
        Self {
            room_repo,
            reservation_repo,
            availability,
            notifier,
        }
    }

    /// Handle a booking submission: validate, check availability, price,
    /// persist, notify. Returns the persisted reservation in `pending`
    /// state.
    pub async fn create(&self, request: BookingRequest) -> AppResult<Reservation> {
        let room = self
            .room_repo
            .find_by_id(request.room_id)
            .await?
            .ok_or_else(|| AppError::not_found("Room not found"))?;

        let (period, hours, catering) = validate_request(&room, &request)?;

        self.availability
            .ensure_available(room.id, &period)
            .await?;

        let quote = compute_quote(
            room.price_per_day,
            &period,
            &hours,
            &catering,
            request.number_of_guests,
        );
        if quote.total <= 0 {
            return Err(AppError::validation(
                "No valid date range was selected; the total price is zero",
            ));
        }

        let data = CreateReservation {
            room_id: room.id,
            customer_name: request.customer_name,
            customer_email: request.customer_email,
            customer_phone: request.customer_phone,
            event_object: request.event_object,
            start_time: period.start,
            end_time: period.end,
            start_hour: i16::from(hours.start_hour),
            end_hour: i16::from(hours.end_hour),
            total_price: quote.total,
            room_price_original: quote.room_price_original,
            room_price_applied: quote.room_price_applied,
            is_half_day: quote.is_half_day,
            lunch_selected: catering.lunch,
            breakfast_option: catering.breakfast.map(|b| b.id()),
            coffee_break_selected: catering.coffee_break,
            number_of_guests: request.number_of_guests,
            notes: request.notes,
            idempotency_key: request.idempotency_key,
        };

        let reservation = self.reservation_repo.create(&data).await?;

        info!(
            reservation_id = %reservation.id,
            room_id = %room.id,
            total_price = reservation.total_price,
            "Reservation created"
        );

        self.notifier.reservation_created(&room, &reservation).await;

        Ok(reservation)
    }

    /// Apply a status transition.
    ///
    /// Re-applying the current status is a no-op returning the unchanged
    /// reservation, which makes repeated cancellations idempotent. A
    /// transition to `cancelled` releases the dates and enqueues the
    /// cancellation notice; the stored `total_price` is never recomputed.
    pub async fn update_status(
        &self,
        id: Uuid,
        new_status: ReservationStatus,
    ) -> AppResult<Reservation> {
        let current = self
            .reservation_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Reservation not found"))?;

        if current.status == new_status {
            return Ok(current);
        }

        if !current.status.can_transition_to(new_status) {
            return Err(AppError::validation(format!(
                "Cannot transition a {} reservation to {}",
                current.status, new_status
            )));
        }

        let updated = self
            .reservation_repo
            .update_status(id, new_status)
            .await?
            .ok_or_else(|| AppError::not_found("Reservation not found"))?;

        info!(
            reservation_id = %updated.id,
            from = %current.status,
            to = %new_status,
            "Reservation status updated"
        );

        if new_status == ReservationStatus::Cancelled {
            match self.room_repo.find_by_id(updated.room_id).await {
                Ok(Some(room)) => {
                    self.notifier.reservation_cancelled(&room, &updated).await;
                }
                Ok(None) => {
                    warn!(reservation_id = %updated.id, "Room vanished, skipping cancellation notice");
                }
                Err(e) => {
                    warn!(reservation_id = %updated.id, error = %e, "Failed to load room for cancellation notice");
                }
            }
        }

        Ok(updated)
    }

    /// Store an admin price override. The computed `total_price` is kept as
    /// the audit baseline; only the effective price changes.
    pub async fn set_admin_price(
        &self,
        id: Uuid,
        price: i64,
        note: Option<String>,
    ) -> AppResult<Reservation> {
        if price < 0 {
            return Err(AppError::validation("The adjusted price cannot be negative"));
        }

        self.reservation_repo
            .set_admin_price(id, price, note.as_deref())
            .await?
            .ok_or_else(|| AppError::not_found("Reservation not found"))
    }

    /// Clear the admin price override, reverting the effective price to the
    /// originally computed total.
    pub async fn reset_admin_price(&self, id: Uuid) -> AppResult<Reservation> {
        self.reservation_repo
            .reset_admin_price(id)
            .await?
            .ok_or_else(|| AppError::not_found("Reservation not found"))
    }

    /// Fetch one reservation.
    pub async fn get(&self, id: Uuid) -> AppResult<Reservation> {
        self.reservation_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Reservation not found"))
    }

    /// Paginated admin listing, optionally filtered by status.
    pub async fn list(
        &self,
        status: Option<ReservationStatus>,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Reservation>> {
        self.reservation_repo.find_all(status, page).await
    }

    /// The non-cancelled reservations of a room (public calendar feed).
    pub async fn list_active_for_room(&self, room_id: Uuid) -> AppResult<Vec<Reservation>> {
        if self.room_repo.find_by_id(room_id).await?.is_none() {
            return Err(AppError::not_found("Room not found"));
        }
        self.reservation_repo.find_active_by_room(room_id).await
    }
}

/// Field validation for a booking submission. Runs before any availability
/// query or pricing: a capacity overrun must be rejected without touching
/// the calendar.
fn validate_request(
    room: &Room,
    request: &BookingRequest,
) -> AppResult<(BookingPeriod, HourRange, CateringSelection)> {
    if !room.accepts_bookings() {
        return Err(AppError::validation(
            "This room is not open for booking at the moment",
        ));
    }

    for (value, field) in [
        (&request.customer_name, "customer_name"),
        (&request.customer_email, "customer_email"),
        (&request.customer_phone, "customer_phone"),
        (&request.event_object, "event_object"),
    ] {
        if value.trim().is_empty() {
            return Err(AppError::validation(format!("Field '{field}' is required")));
        }
    }

    if request.number_of_guests < 1 {
        return Err(AppError::validation("At least one guest is required"));
    }
    if request.number_of_guests > room.capacity {
        return Err(AppError::validation(format!(
            "Number of guests ({}) exceeds the room capacity ({})",
            request.number_of_guests, room.capacity
        )));
    }

    let breakfast = match request.breakfast_option {
        None => None,
        Some(id) => Some(BreakfastOption::from_id(id).ok_or_else(|| {
            AppError::validation(format!("Unknown breakfast option: {id}"))
        })?),
    };

    let period = BookingPeriod::new(request.start_time, request.end_time)?;
    let hours = HourRange::new(request.start_hour, request.end_hour)?;

    let catering = CateringSelection {
        lunch: request.lunch_selected,
        breakfast,
        coffee_break: request.coffee_break_selected,
    };

    Ok((period, hours, catering))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use roomhub_core::error::ErrorKind;

    fn room(capacity: i32) -> Room {
        Room {
            id: Uuid::new_v4(),
            name: "Salle Okoumé".to_string(),
            description: None,
            capacity,
            price_per_day: 100_000,
            image_url: None,
            amenities: vec![],
            available: true,
            reserved: false,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn request(room_id: Uuid, guests: i32) -> BookingRequest {
        BookingRequest {
            room_id,
            customer_name: "Jean Dupont".to_string(),
            customer_email: "jean.dupont@example.com".to_string(),
            customer_phone: "+241 01 02 03 04".to_string(),
            event_object: "Formation".to_string(),
            start_time: Utc.with_ymd_and_hms(2024, 3, 10, 8, 0, 0).unwrap(),
            end_time: Utc.with_ymd_and_hms(2024, 3, 12, 18, 59, 59).unwrap(),
            start_hour: 8,
            end_hour: 18,
            number_of_guests: guests,
            lunch_selected: false,
            breakfast_option: None,
            coffee_break_selected: false,
            notes: None,
            idempotency_key: None,
        }
    }

    #[test]
    fn test_guests_over_capacity_rejected_before_anything_else() {
        let room = room(50);
        let err = validate_request(&room, &request(room.id, 60)).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
        assert!(err.message.contains("capacity"));
    }

    #[test]
    fn test_reserved_room_rejects_submissions() {
        let mut room = room(50);
        room.reserved = true;
        let err = validate_request(&room, &request(room.id, 10)).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }

    #[test]
    fn test_missing_required_fields_rejected() {
        let room = room(50);
        let mut req = request(room.id, 10);
        req.event_object = "   ".to_string();
        let err = validate_request(&room, &req).unwrap_err();
        assert!(err.message.contains("event_object"));
    }

    #[test]
    fn test_inverted_dates_rejected() {
        let room = room(50);
        let mut req = request(room.id, 10);
        std::mem::swap(&mut req.start_time, &mut req.end_time);
        assert!(validate_request(&room, &req).is_err());
    }

    #[test]
    fn test_unknown_breakfast_option_rejected() {
        let room = room(50);
        let mut req = request(room.id, 10);
        req.breakfast_option = Some(7);
        let err = validate_request(&room, &req).unwrap_err();
        assert!(err.message.contains("breakfast"));
    }

    #[test]
    fn test_valid_request_yields_period_hours_and_catering() {
        let room = room(50);
        let mut req = request(room.id, 10);
        req.lunch_selected = true;
        req.breakfast_option = Some(3);
        let (period, hours, catering) = validate_request(&room, &req).unwrap();
        assert_eq!(period.days(), 3);
        assert_eq!(hours.span_hours(), 10);
        assert!(catering.lunch);
        assert_eq!(catering.breakfast, Some(BreakfastOption::Three));
    }
}
