//! Room entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Highest day rate accepted for a room, in integer currency units (FCFA).
pub const MAX_PRICE_PER_DAY: i64 = 99_999_999;

/// A bookable meeting room.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Room {
    /// Unique room identifier.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Free-text description.
    pub description: Option<String>,
    /// Maximum number of guests.
    pub capacity: i32,
    /// Day rate in integer currency units (FCFA).
    pub price_per_day: i64,
    /// Durable URL of the room photo.
    pub image_url: Option<String>,
    /// Amenity labels (projector, whiteboard, ...).
    pub amenities: Vec<String>,
    /// Whether the room is published on the public listing.
    pub available: bool,
    /// Administrative hold: blocks new reservations regardless of the
    /// calendar, without unpublishing the room.
    pub reserved: bool,
    /// When the room was created.
    pub created_at: DateTime<Utc>,
    /// When the room was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Room {
    /// Whether the room may receive new reservations at all.
    ///
    /// Date availability is checked separately; this covers the publication
    /// flag and the administrative hold.
    pub fn accepts_bookings(&self) -> bool {
        self.available && !self.reserved
    }
}

/// Data required to create a new room.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRoom {
    /// Display name.
    pub name: String,
    /// Free-text description.
    pub description: Option<String>,
    /// Maximum number of guests.
    pub capacity: i32,
    /// Day rate in integer currency units.
    pub price_per_day: i64,
    /// Durable URL of the room photo.
    pub image_url: Option<String>,
    /// Amenity labels.
    pub amenities: Vec<String>,
    /// Published on the public listing.
    pub available: bool,
    /// Administrative hold.
    pub reserved: bool,
}

/// Data for updating an existing room.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateRoom {
    /// New display name.
    pub name: String,
    /// New description.
    pub description: Option<String>,
    /// New capacity.
    pub capacity: i32,
    /// New day rate.
    pub price_per_day: i64,
    /// New photo URL.
    pub image_url: Option<String>,
    /// New amenity labels.
    pub amenities: Vec<String>,
    /// Published on the public listing.
    pub available: bool,
    /// Administrative hold.
    pub reserved: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room(available: bool, reserved: bool) -> Room {
        Room {
            id: Uuid::new_v4(),
            name: "Salle Okoumé".to_string(),
            description: None,
            capacity: 50,
            price_per_day: 100_000,
            image_url: None,
            amenities: vec![],
            available,
            reserved,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_reserved_hold_blocks_bookings() {
        assert!(room(true, false).accepts_bookings());
        assert!(!room(true, true).accepts_bookings());
        assert!(!room(false, false).accepts_bookings());
    }
}
