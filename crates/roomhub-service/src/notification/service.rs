//! Reservation notification enqueueing.
//!
//! Notices are not sent inline: each one becomes an `email_dispatch` job on
//! the persistent queue, where the worker picks it up, renders it, and
//! talks to the mail relay with bounded retries. The reservation operations
//! only ever *enqueue*, and even that is fire-and-forget — a full queue or
//! broken store is logged and swallowed, never surfaced to the booker and
//! never a reason to roll back a committed reservation.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::warn;

use roomhub_database::repositories::job::JobRepository;
use roomhub_entity::job::{CreateJob, JobPriority};
use roomhub_entity::reservation::Reservation;
use roomhub_entity::room::Room;
use roomhub_mailer::message::ReservationEmail;

/// Job type executed by the worker's email handler.
pub const EMAIL_JOB_TYPE: &str = "email_dispatch";
/// Queue the email handler polls.
pub const MAIL_QUEUE: &str = "mail";

/// Which notice an `email_dispatch` job carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmailKind {
    /// Booking received, sent to the customer.
    CustomerConfirmation,
    /// New booking alert, fanned out to every admin address.
    AdminAlert,
    /// Cancellation notice, sent to the customer.
    Cancellation,
}

/// Payload of an `email_dispatch` job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailJobPayload {
    /// Which notice to render.
    pub kind: EmailKind,
    /// Reservation snapshot at event time.
    pub reservation: ReservationEmail,
}

/// Enqueues reservation notices onto the job queue.
#[derive(Debug, Clone)]
pub struct NotificationService {
    job_repo: Arc<JobRepository>,
}

impl NotificationService {
    /// Creates a new notification service.
    pub fn new(job_repo: Arc<JobRepository>) -> Self {
        Self { job_repo }
    }

    /// Enqueues the customer confirmation and the admin alert for a fresh
    /// reservation.
    pub async fn reservation_created(&self, room: &Room, reservation: &Reservation) {
        let snapshot = snapshot(room, reservation);
        self.enqueue(EmailKind::CustomerConfirmation, JobPriority::High, &snapshot)
            .await;
        self.enqueue(EmailKind::AdminAlert, JobPriority::Normal, &snapshot)
            .await;
    }

    /// Enqueues the cancellation notice. The snapshot quotes the historical
    /// effective price; nothing is recomputed on cancellation.
    pub async fn reservation_cancelled(&self, room: &Room, reservation: &Reservation) {
        let snapshot = snapshot(room, reservation);
        self.enqueue(EmailKind::Cancellation, JobPriority::High, &snapshot)
            .await;
    }

    async fn enqueue(&self, kind: EmailKind, priority: JobPriority, snapshot: &ReservationEmail) {
        let payload = EmailJobPayload {
            kind,
            reservation: snapshot.clone(),
        };

        let payload = match serde_json::to_value(&payload) {
            Ok(value) => value,
            Err(e) => {
                warn!(?kind, error = %e, "Failed to serialize notification payload");
                return;
            }
        };

        let job = CreateJob {
            job_type: EMAIL_JOB_TYPE.to_string(),
            queue: MAIL_QUEUE.to_string(),
            priority,
            payload,
            max_attempts: 3,
        };

        if let Err(e) = self.job_repo.create(&job).await {
            warn!(
                ?kind,
                reservation_id = %snapshot.reservation_id,
                error = %e,
                "Failed to enqueue notification; reservation is unaffected"
            );
        }
    }
}

/// Freeze the fields the templates need, so rendering never re-reads the
/// database.
fn snapshot(room: &Room, reservation: &Reservation) -> ReservationEmail {
    ReservationEmail {
        reservation_id: reservation.id,
        customer_name: reservation.customer_name.clone(),
        customer_email: reservation.customer_email.clone(),
        customer_phone: reservation.customer_phone.clone(),
        room_name: room.name.clone(),
        event_object: reservation.event_object.clone(),
        start_time: reservation.start_time,
        end_time: reservation.end_time,
        start_hour: reservation.start_hour,
        end_hour: reservation.end_hour,
        total_price: reservation.effective_price(),
        number_of_guests: reservation.number_of_guests,
        lunch_selected: reservation.lunch_selected,
        breakfast_option: reservation.breakfast_option,
        coffee_break_selected: reservation.coffee_break_selected,
        notes: reservation.notes.clone(),
    }
}
