//! Message types exchanged with the mail relay and the reservation
//! snapshot carried by notification jobs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A rendered e-mail ready for the relay.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailMessage {
    /// Recipient address.
    pub to: String,
    /// Subject line.
    pub subject: String,
    /// HTML body.
    pub html: String,
}

/// Snapshot of a reservation at notification time.
///
/// Carried in the job payload so that rendering never re-reads the
/// database — the notice describes the reservation as it was when the
/// event happened, even if an admin edits it afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationEmail {
    /// Reservation identifier, quoted as the booking reference.
    pub reservation_id: Uuid,
    /// Customer full name.
    pub customer_name: String,
    /// Customer email address.
    pub customer_email: String,
    /// Customer phone number.
    pub customer_phone: String,
    /// Room display name.
    pub room_name: String,
    /// Purpose of the event.
    pub event_object: String,
    /// First reserved day.
    pub start_time: DateTime<Utc>,
    /// Last reserved day.
    pub end_time: DateTime<Utc>,
    /// First hour of use (0–23).
    pub start_hour: i16,
    /// Last hour of use (0–23).
    pub end_hour: i16,
    /// Price to quote (the effective price at snapshot time).
    pub total_price: i64,
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
}
