//! Reservation repository implementation.
//!
//! The availability read (`find_conflicts`) is a fast-rejection affordance;
//! the correctness guarantee lives in [`ReservationRepository::create`],
//! which re-checks overlap inside a transaction holding a per-room advisory
//! lock, with the schema's exclusion constraint as a last-resort backstop.

use sqlx::PgPool;
use sqlx::postgres::PgDatabaseError;
use uuid::Uuid;

use roomhub_core::error::{AppError, ErrorKind};
use roomhub_core::result::AppResult;
use roomhub_core::types::pagination::{PageRequest, PageResponse};
use roomhub_core::types::period::BookingPeriod;
use roomhub_entity::reservation::{CreateReservation, Reservation, ReservationStatus};

/// Postgres error code for an exclusion-constraint violation.
const EXCLUSION_VIOLATION: &str = "23P01";

/// Repository for reservation persistence and the write-time overlap check.
#[derive(Debug, Clone)]
pub struct ReservationRepository {
    pool: PgPool,
}

impl ReservationRepository {
    /// Create a new reservation repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a reservation by ID.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Reservation>> {
        sqlx::query_as::<_, Reservation>("SELECT * FROM reservations WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find reservation", e)
            })
    }

    /// List reservations with pagination, optionally filtered by status.
    pub async fn find_all(
        &self,
        status: Option<ReservationStatus>,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Reservation>> {
        let total: i64 = match status {
            Some(status) => {
                sqlx::query_scalar("SELECT COUNT(*) FROM reservations WHERE status = $1")
                    .bind(status)
                    .fetch_one(&self.pool)
                    .await
            }
            None => {
                sqlx::query_scalar("SELECT COUNT(*) FROM reservations")
                    .fetch_one(&self.pool)
                    .await
            }
        }
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count reservations", e))?;

        let reservations = match status {
            Some(status) => {
                sqlx::query_as::<_, Reservation>(
                    "SELECT * FROM reservations WHERE status = $1 \
                     ORDER BY created_at DESC LIMIT $2 OFFSET $3",
                )
                .bind(status)
                .bind(page.limit() as i64)
                .bind(page.offset() as i64)
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query_as::<_, Reservation>(
                    "SELECT * FROM reservations ORDER BY created_at DESC LIMIT $1 OFFSET $2",
                )
                .bind(page.limit() as i64)
                .bind(page.offset() as i64)
                .fetch_all(&self.pool)
                .await
            }
        }
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list reservations", e))?;

        Ok(PageResponse::new(
            reservations,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// List the non-cancelled reservations of a room, earliest first.
    ///
    /// Feeds the public calendar, which greys out every occupied day.
    pub async fn find_active_by_room(&self, room_id: Uuid) -> AppResult<Vec<Reservation>> {
        sqlx::query_as::<_, Reservation>(
            "SELECT * FROM reservations WHERE room_id = $1 AND status <> 'cancelled' \
             ORDER BY start_time ASC",
        )
        .bind(room_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list room reservations", e)
        })
    }

    /// Find the non-cancelled reservations of a room whose closed
    /// `[start_time, end_time]` interval overlaps the candidate period.
    pub async fn find_conflicts(
        &self,
        room_id: Uuid,
        period: &BookingPeriod,
    ) -> AppResult<Vec<Reservation>> {
        sqlx::query_as::<_, Reservation>(
            "SELECT * FROM reservations WHERE room_id = $1 AND status <> 'cancelled' \
             AND start_time <= $2 AND end_time >= $3 ORDER BY start_time ASC",
        )
        .bind(room_id)
        .bind(period.end)
        .bind(period.start)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to check conflicts", e))
    }

    /// Persist a new reservation, atomically re-checking availability.
    ///
    /// Two concurrent submissions for the same room serialize on the
    /// advisory lock, so the second sees the first one's row and gets a
    /// `Conflict` instead of a double-booking. An `idempotency_key` that
    /// already exists short-circuits to the previously created row, making
    /// client retries after transient failures safe.
    pub async fn create(&self, data: &CreateReservation) -> AppResult<Reservation> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        if let Some(key) = &data.idempotency_key {
            let existing = sqlx::query_as::<_, Reservation>(
                "SELECT * FROM reservations WHERE idempotency_key = $1",
            )
            .bind(key)
            .fetch_optional(&mut *tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to check idempotency key", e)
            })?;
            if let Some(existing) = existing {
                return Ok(existing);
            }
        }

        sqlx::query("SELECT pg_advisory_xact_lock(hashtext($1::text))")
            .bind(data.room_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to lock room", e)
            })?;

        let conflicts = sqlx::query_as::<_, Reservation>(
            "SELECT * FROM reservations WHERE room_id = $1 AND status <> 'cancelled' \
             AND start_time <= $2 AND end_time >= $3",
        )
        .bind(data.room_id)
        .bind(data.end_time)
        .bind(data.start_time)
        .fetch_all(&mut *tx)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to re-check conflicts", e)
        })?;

        if !conflicts.is_empty() {
            return Err(conflict_error(&conflicts));
        }

        let reservation = sqlx::query_as::<_, Reservation>(
            "INSERT INTO reservations (room_id, customer_name, customer_email, customer_phone, \
             event_object, start_time, end_time, start_hour, end_hour, total_price, \
             room_price_original, room_price_applied, is_half_day, lunch_selected, \
             breakfast_option, coffee_break_selected, number_of_guests, notes, idempotency_key) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17, $18, $19) \
             RETURNING *",
        )
        .bind(data.room_id)
        .bind(&data.customer_name)
        .bind(&data.customer_email)
        .bind(&data.customer_phone)
        .bind(&data.event_object)
        .bind(data.start_time)
        .bind(data.end_time)
        .bind(data.start_hour)
        .bind(data.end_hour)
        .bind(data.total_price)
        .bind(data.room_price_original)
        .bind(data.room_price_applied)
        .bind(data.is_half_day)
        .bind(data.lunch_selected)
        .bind(data.breakfast_option)
        .bind(data.coffee_break_selected)
        .bind(data.number_of_guests)
        .bind(&data.notes)
        .bind(&data.idempotency_key)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_insert_error)?;

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit reservation", e)
        })?;

        Ok(reservation)
    }

    /// Update a reservation's status. Returns `None` when it does not exist.
    pub async fn update_status(
        &self,
        id: Uuid,
        status: ReservationStatus,
    ) -> AppResult<Option<Reservation>> {
        sqlx::query_as::<_, Reservation>(
            "UPDATE reservations SET status = $2, updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(status)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to update reservation status", e)
        })
    }

    /// Store the admin price override pair. `total_price` is untouched so
    /// the invoice retains the computed baseline.
    pub async fn set_admin_price(
        &self,
        id: Uuid,
        price: i64,
        note: Option<&str>,
    ) -> AppResult<Option<Reservation>> {
        sqlx::query_as::<_, Reservation>(
            "UPDATE reservations SET admin_adjusted_price = $2, admin_price_note = $3, \
             updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(price)
        .bind(note)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to set admin price", e))
    }

    /// Clear the admin price override pair, reverting the effective price
    /// to the computed total.
    pub async fn reset_admin_price(&self, id: Uuid) -> AppResult<Option<Reservation>> {
        sqlx::query_as::<_, Reservation>(
            "UPDATE reservations SET admin_adjusted_price = NULL, admin_price_note = NULL, \
             updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to reset admin price", e))
    }
}

/// Build the structured conflict error carrying the conflicting periods,
/// so a client can re-render its blocked dates.
pub fn conflict_error(conflicts: &[Reservation]) -> AppError {
    let periods: Vec<serde_json::Value> = conflicts
        .iter()
        .map(|r| {
            serde_json::json!({
                "start_time": r.start_time,
                "end_time": r.end_time,
            })
        })
        .collect();

    AppError::conflict("Room already booked for this period")
        .with_details(serde_json::json!({ "conflicts": periods }))
}

fn map_insert_error(err: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(db_err) = &err {
        if let Some(pg_err) = db_err.try_downcast_ref::<PgDatabaseError>() {
            if pg_err.code() == EXCLUSION_VIOLATION {
                return AppError::conflict("Room already booked for this period");
            }
        }
    }
    AppError::with_source(ErrorKind::Database, "Failed to create reservation", err)
}
