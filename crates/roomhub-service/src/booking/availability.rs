//! Availability checking.
//!
//! The read-time check here gives bookers fast rejection and powers the
//! greyed-out calendar. It is re-run at commit time inside the reservation
//! repository's insert transaction, so passing here is never the only thing
//! standing between two concurrent submissions and a double-booking.

use std::collections::BTreeSet;
use std::sync::Arc;

use chrono::NaiveDate;
use uuid::Uuid;

use roomhub_core::result::AppResult;
use roomhub_core::types::period::BookingPeriod;
use roomhub_database::repositories::reservation::{ReservationRepository, conflict_error};
use roomhub_entity::reservation::Reservation;

/// Read-only availability queries over a room's reservations.
#[derive(Debug, Clone)]
pub struct AvailabilityService {
    reservation_repo: Arc<ReservationRepository>,
}

impl AvailabilityService {
    /// Creates a new availability service.
    pub fn new(reservation_repo: Arc<ReservationRepository>) -> Self {
        Self { reservation_repo }
    }

    /// Returns the non-cancelled reservations overlapping the candidate
    /// period, under the closed-interval test.
    pub async fn find_conflicts(
        &self,
        room_id: Uuid,
        period: &BookingPeriod,
    ) -> AppResult<Vec<Reservation>> {
        self.reservation_repo.find_conflicts(room_id, period).await
    }

    /// Rejects with a `Conflict` error naming the conflicting periods when
    /// the candidate period is not free.
    pub async fn ensure_available(&self, room_id: Uuid, period: &BookingPeriod) -> AppResult<()> {
        let conflicts = self.find_conflicts(room_id, period).await?;
        if conflicts.is_empty() {
            Ok(())
        } else {
            Err(conflict_error(&conflicts))
        }
    }

    /// Every calendar day blocked on the room, for the public calendar.
    ///
    /// A reservation blocks whole days from its start date through its end
    /// date inclusive, even though it also carries hour-of-day bounds.
    pub async fn occupied_days(&self, room_id: Uuid) -> AppResult<Vec<NaiveDate>> {
        let reservations = self.reservation_repo.find_active_by_room(room_id).await?;

        let mut days = BTreeSet::new();
        for reservation in &reservations {
            days.extend(reservation.period().each_day());
        }

        Ok(days.into_iter().collect())
    }
}
