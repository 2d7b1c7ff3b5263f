//! Room CRUD and the public listing.

use std::sync::Arc;

use tracing::{info, warn};
use uuid::Uuid;

use roomhub_core::error::AppError;
use roomhub_core::result::AppResult;
use roomhub_database::repositories::room::RoomRepository;
use roomhub_entity::room::{CreateRoom, MAX_PRICE_PER_DAY, Room, UpdateRoom};

/// Manages rooms: public reads plus the admin CRUD surface.
#[derive(Debug, Clone)]
pub struct RoomService {
    room_repo: Arc<RoomRepository>,
}

impl RoomService {
    /// Creates a new room service.
    pub fn new(room_repo: Arc<RoomRepository>) -> Self {
        Self { room_repo }
    }

    /// Rooms published on the public listing.
    pub async fn list_public(&self) -> AppResult<Vec<Room>> {
        self.room_repo.find_available().await
    }

    /// Every room, for the admin console.
    pub async fn list_all(&self) -> AppResult<Vec<Room>> {
        self.room_repo.find_all().await
    }

    /// Fetch one room.
    pub async fn get(&self, id: Uuid) -> AppResult<Room> {
        self.room_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Room not found"))
    }

    /// Create a room.
    pub async fn create(&self, data: CreateRoom) -> AppResult<Room> {
        validate_room_fields(&data.name, data.capacity, data.price_per_day)?;
        let room = self.room_repo.create(&data).await?;
        info!(room_id = %room.id, name = %room.name, "Room created");
        Ok(room)
    }

    /// Update a room.
    pub async fn update(&self, id: Uuid, data: UpdateRoom) -> AppResult<Room> {
        validate_room_fields(&data.name, data.capacity, data.price_per_day)?;
        self.room_repo
            .update(id, &data)
            .await?
            .ok_or_else(|| AppError::not_found("Room not found"))
    }

    /// Delete a room. Destructive and irreversible: every reservation of
    /// the room is cascaded away with it.
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        if !self.room_repo.delete(id).await? {
            return Err(AppError::not_found("Room not found"));
        }
        warn!(room_id = %id, "Room deleted along with all its reservations");
        Ok(())
    }
}

fn validate_room_fields(name: &str, capacity: i32, price_per_day: i64) -> AppResult<()> {
    if name.trim().is_empty() {
        return Err(AppError::validation("Room name is required"));
    }
    if capacity <= 0 {
        return Err(AppError::validation("Capacity must be positive"));
    }
    if !(0..=MAX_PRICE_PER_DAY).contains(&price_per_day) {
        return Err(AppError::validation(format!(
            "Day rate must be between 0 and {MAX_PRICE_PER_DAY}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_field_validation() {
        assert!(validate_room_fields("Salle Okoumé", 50, 100_000).is_ok());
        assert!(validate_room_fields("", 50, 100_000).is_err());
        assert!(validate_room_fields("Salle", 0, 100_000).is_err());
        assert!(validate_room_fields("Salle", 50, -1).is_err());
        assert!(validate_room_fields("Salle", 50, MAX_PRICE_PER_DAY + 1).is_err());
    }
}
