//! Room repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use roomhub_core::error::{AppError, ErrorKind};
use roomhub_core::result::AppResult;
use roomhub_entity::room::{CreateRoom, Room, UpdateRoom};

/// Repository for room CRUD operations.
#[derive(Debug, Clone)]
pub struct RoomRepository {
    pool: PgPool,
}

impl RoomRepository {
    /// Create a new room repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a room by ID.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Room>> {
        sqlx::query_as::<_, Room>("SELECT * FROM rooms WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find room", e))
    }

    /// List every room, newest first (admin listing).
    pub async fn find_all(&self) -> AppResult<Vec<Room>> {
        sqlx::query_as::<_, Room>("SELECT * FROM rooms ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list rooms", e))
    }

    /// List rooms published on the public listing.
    pub async fn find_available(&self) -> AppResult<Vec<Room>> {
        sqlx::query_as::<_, Room>(
            "SELECT * FROM rooms WHERE available = TRUE ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list available rooms", e)
        })
    }

    /// Create a room.
    pub async fn create(&self, data: &CreateRoom) -> AppResult<Room> {
        sqlx::query_as::<_, Room>(
            "INSERT INTO rooms (name, description, capacity, price_per_day, image_url, amenities, available, reserved) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) RETURNING *",
        )
        .bind(&data.name)
        .bind(&data.description)
        .bind(data.capacity)
        .bind(data.price_per_day)
        .bind(&data.image_url)
        .bind(&data.amenities)
        .bind(data.available)
        .bind(data.reserved)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create room", e))
    }

    /// Update a room. Returns `None` when the room does not exist.
    pub async fn update(&self, id: Uuid, data: &UpdateRoom) -> AppResult<Option<Room>> {
        sqlx::query_as::<_, Room>(
            "UPDATE rooms SET name = $2, description = $3, capacity = $4, price_per_day = $5, \
             image_url = $6, amenities = $7, available = $8, reserved = $9, updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&data.name)
        .bind(&data.description)
        .bind(data.capacity)
        .bind(data.price_per_day)
        .bind(&data.image_url)
        .bind(&data.amenities)
        .bind(data.available)
        .bind(data.reserved)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update room", e))
    }

    /// Delete a room. The reservations foreign key cascades, so every
    /// reservation of the room is destroyed with it.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM rooms WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete room", e))?;
        Ok(result.rows_affected() > 0)
    }
}
