//! Request DTOs with validation.
//!
//! Every operation has its own schema-validated request type; unknown or
//! malformed bodies are rejected before any business logic runs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use roomhub_core::error::AppError;
use roomhub_core::result::AppResult;
use roomhub_entity::advertisement::{CreateAdvertisement, UpdateAdvertisement};
use roomhub_entity::room::{CreateRoom, UpdateRoom};
use roomhub_service::booking::service::BookingRequest;

/// Run `validator` rules, mapping failures to a field-detailed
/// `VALIDATION_ERROR` body.
pub fn validate_dto<T: Validate>(dto: &T) -> AppResult<()> {
    dto.validate().map_err(|errors| {
        AppError::validation("Request validation failed")
            .with_details(serde_json::to_value(&errors).unwrap_or_default())
    })
}

/// Booking submission body (public form and admin manual entry).
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateReservationRequest {
    /// Room to book.
    pub room_id: Uuid,
    /// Customer full name.
    #[validate(length(min = 1, max = 255, message = "Customer name is required"))]
    pub customer_name: String,
    /// Customer email.
    #[validate(email(message = "A valid email address is required"))]
    pub customer_email: String,
    /// Customer phone.
    #[validate(length(min = 1, max = 64, message = "A phone number is required"))]
    pub customer_phone: String,
    /// Purpose of the event.
    #[validate(length(min = 1, max = 255, message = "The event object is required"))]
    pub event_object: String,
    /// First requested instant (ISO datetime).
    pub start_time: DateTime<Utc>,
    /// Last requested instant (ISO datetime).
    pub end_time: DateTime<Utc>,
    /// First hour of use.
    #[validate(range(max = 23))]
    pub start_hour: u8,
    /// Last hour of use.
    #[validate(range(max = 23))]
    pub end_hour: u8,
    /// Number of attendees.
    #[validate(range(min = 1))]
    pub number_of_guests: i32,
    /// Full lunch selected.
    #[serde(default)]
    pub lunch_selected: bool,
    /// Breakfast tier (1–3).
    #[validate(range(min = 1, max = 3))]
    pub breakfast_option: Option<i16>,
    /// Coffee break selected.
    #[serde(default)]
    pub coffee_break_selected: bool,
    /// Free-form notes.
    pub notes: Option<String>,
    /// Deduplication key for safe retries after transient failures.
    #[validate(length(min = 1, max = 255))]
    pub idempotency_key: Option<String>,
}

impl From<CreateReservationRequest> for BookingRequest {
    fn from(req: CreateReservationRequest) -> Self {
        BookingRequest {
            room_id: req.room_id,
            customer_name: req.customer_name,
            customer_email: req.customer_email,
            customer_phone: req.customer_phone,
            event_object: req.event_object,
            start_time: req.start_time,
            end_time: req.end_time,
            start_hour: req.start_hour,
            end_hour: req.end_hour,
            number_of_guests: req.number_of_guests,
            lunch_selected: req.lunch_selected,
            breakfast_option: req.breakfast_option,
            coffee_break_selected: req.coffee_break_selected,
            notes: req.notes,
            idempotency_key: req.idempotency_key,
        }
    }
}

/// Status transition body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateStatusRequest {
    /// Target status: `pending`, `confirmed`, or `cancelled`.
    #[validate(length(min = 1))]
    pub status: String,
}

/// Admin price override body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AdjustPriceRequest {
    /// The adjusted price (≥ 0).
    #[validate(range(min = 0))]
    pub admin_adjusted_price: i64,
    /// Note explaining the adjustment.
    #[validate(length(max = 1000))]
    pub admin_price_note: Option<String>,
}

/// Room create/update body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RoomRequest {
    /// Display name.
    #[validate(length(min = 1, max = 255, message = "Room name is required"))]
    pub name: String,
    /// Description.
    pub description: Option<String>,
    /// Capacity (> 0).
    #[validate(range(min = 1))]
    pub capacity: i32,
    /// Day rate in integer currency units.
    #[validate(range(min = 0, max = 99_999_999))]
    pub price_per_day: i64,
    /// Photo URL.
    pub image_url: Option<String>,
    /// Amenity labels.
    #[serde(default)]
    pub amenities: Vec<String>,
    /// Published on the public listing.
    #[serde(default = "default_true")]
    pub available: bool,
    /// Administrative hold.
    #[serde(default)]
    pub reserved: bool,
}

impl From<RoomRequest> for CreateRoom {
    fn from(req: RoomRequest) -> Self {
        CreateRoom {
            name: req.name,
            description: req.description,
            capacity: req.capacity,
            price_per_day: req.price_per_day,
            image_url: req.image_url,
            amenities: req.amenities,
            available: req.available,
            reserved: req.reserved,
        }
    }
}

impl From<RoomRequest> for UpdateRoom {
    fn from(req: RoomRequest) -> Self {
        UpdateRoom {
            name: req.name,
            description: req.description,
            capacity: req.capacity,
            price_per_day: req.price_per_day,
            image_url: req.image_url,
            amenities: req.amenities,
            available: req.available,
            reserved: req.reserved,
        }
    }
}

/// Advertisement create/update body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AdvertisementRequest {
    /// Headline.
    #[validate(length(min = 1, max = 255, message = "Title is required"))]
    pub title: String,
    /// Body text.
    pub description: Option<String>,
    /// Banner image URL.
    pub image_url: Option<String>,
    /// Click-through target.
    pub link_url: Option<String>,
    /// Call-to-action label.
    #[serde(default = "default_link_text")]
    pub link_text: String,
    /// Placement slot name.
    #[validate(length(min = 1))]
    pub position: String,
    /// Switched on.
    #[serde(default = "default_true")]
    pub is_active: bool,
    /// Start of the active window.
    pub start_date: Option<DateTime<Utc>>,
    /// End of the active window.
    pub end_date: Option<DateTime<Utc>>,
}

impl AdvertisementRequest {
    /// Parse into the create companion, resolving the placement slot.
    pub fn into_create(self) -> AppResult<CreateAdvertisement> {
        Ok(CreateAdvertisement {
            position: self.position.parse()?,
            title: self.title,
            description: self.description,
            image_url: self.image_url,
            link_url: self.link_url,
            link_text: self.link_text,
            is_active: self.is_active,
            start_date: self.start_date,
            end_date: self.end_date,
        })
    }

    /// Parse into the update companion, resolving the placement slot.
    pub fn into_update(self) -> AppResult<UpdateAdvertisement> {
        Ok(UpdateAdvertisement {
            position: self.position.parse()?,
            title: self.title,
            description: self.description,
            image_url: self.image_url,
            link_url: self.link_url,
            link_text: self.link_text,
            is_active: self.is_active,
            start_date: self.start_date,
            end_date: self.end_date,
        })
    }
}

/// Ad tracking body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackAdRequest {
    /// `"view"` or `"click"`.
    #[serde(rename = "type")]
    pub tracking_type: String,
}

/// Query parameters for the public reservation listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationListQuery {
    /// Room whose calendar is being rendered.
    pub room_id: Uuid,
}

/// Query parameters for the public ad listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdListQuery {
    /// Restrict to one placement slot.
    pub position: Option<String>,
}

/// Query parameters for the admin reservation listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminReservationQuery {
    /// Filter by status.
    pub status: Option<String>,
}

fn default_true() -> bool {
    true
}

fn default_link_text() -> String {
    "En savoir plus".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reservation_body() -> serde_json::Value {
        serde_json::json!({
            "room_id": Uuid::new_v4(),
            "customer_name": "Jean Dupont",
            "customer_email": "jean.dupont@example.com",
            "customer_phone": "+241 01 02 03 04",
            "event_object": "Formation",
            "start_time": "2024-03-10T08:00:00Z",
            "end_time": "2024-03-12T18:59:59Z",
            "start_hour": 8,
            "end_hour": 18,
            "number_of_guests": 4
        })
    }

    #[test]
    fn test_reservation_request_accepts_minimal_body() {
        let req: CreateReservationRequest =
            serde_json::from_value(reservation_body()).expect("deserialize");
        assert!(validate_dto(&req).is_ok());
        assert!(!req.lunch_selected);
        assert!(req.breakfast_option.is_none());
    }

    #[test]
    fn test_reservation_request_rejects_bad_email() {
        let mut body = reservation_body();
        body["customer_email"] = serde_json::json!("not-an-email");
        let req: CreateReservationRequest = serde_json::from_value(body).expect("deserialize");
        assert!(validate_dto(&req).is_err());
    }

    #[test]
    fn test_reservation_request_rejects_breakfast_tier_out_of_range() {
        let mut body = reservation_body();
        body["breakfast_option"] = serde_json::json!(4);
        let req: CreateReservationRequest = serde_json::from_value(body).expect("deserialize");
        assert!(validate_dto(&req).is_err());
    }

    #[test]
    fn test_room_request_rejects_price_over_cap() {
        let req = RoomRequest {
            name: "Salle".to_string(),
            description: None,
            capacity: 10,
            price_per_day: 100_000_000,
            image_url: None,
            amenities: vec![],
            available: true,
            reserved: false,
        };
        assert!(validate_dto(&req).is_err());
    }
}
