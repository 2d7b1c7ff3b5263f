//! E-mail dispatch job handler.
//!
//! Renders the reservation snapshot from the job payload and delivers it
//! through the mail relay. Relay failures are transient (the runner retries
//! up to the job's `max_attempts`); a payload that does not parse is
//! permanent, since retrying it can never succeed.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use roomhub_entity::job::Job;
use roomhub_mailer::client::MailerClient;
use roomhub_mailer::message::EmailMessage;
use roomhub_mailer::templates;
use roomhub_service::notification::{EMAIL_JOB_TYPE, EmailJobPayload, EmailKind};

use crate::executor::{JobExecutionError, JobHandler};

/// Handles `email_dispatch` jobs.
#[derive(Debug)]
pub struct EmailJobHandler {
    /// Mail relay client.
    mailer: Arc<MailerClient>,
}

impl EmailJobHandler {
    /// Create a new e-mail job handler.
    pub fn new(mailer: Arc<MailerClient>) -> Self {
        Self { mailer }
    }

    /// Render the messages for a payload. The admin alert fans out to every
    /// configured admin address; the other kinds go to the customer.
    fn render(&self, payload: &EmailJobPayload) -> Vec<EmailMessage> {
        match payload.kind {
            EmailKind::CustomerConfirmation => {
                vec![templates::customer_confirmation(&payload.reservation)]
            }
            EmailKind::AdminAlert => self
                .mailer
                .admin_recipients()
                .iter()
                .map(|recipient| templates::admin_alert(&payload.reservation, recipient))
                .collect(),
            EmailKind::Cancellation => vec![templates::cancellation(&payload.reservation)],
        }
    }
}

#[async_trait]
impl JobHandler for EmailJobHandler {
    fn job_type(&self) -> &str {
        EMAIL_JOB_TYPE
    }

    async fn execute(&self, job: &Job) -> Result<(), JobExecutionError> {
        let payload = parse_payload(&job.payload)?;

        let messages = self.render(&payload);
        if messages.is_empty() {
            info!(
                job_id = %job.id,
                kind = ?payload.kind,
                "No recipients configured, nothing to send"
            );
            return Ok(());
        }

        for message in &messages {
            self.mailer
                .send(message)
                .await
                .map_err(|e| JobExecutionError::Transient(e.to_string()))?;
        }

        info!(
            job_id = %job.id,
            kind = ?payload.kind,
            sent = messages.len(),
            "Notification dispatched"
        );
        Ok(())
    }
}

fn parse_payload(payload: &serde_json::Value) -> Result<EmailJobPayload, JobExecutionError> {
    serde_json::from_value(payload.clone())
        .map_err(|e| JobExecutionError::Permanent(format!("Malformed email payload: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use roomhub_mailer::message::ReservationEmail;
    use uuid::Uuid;

    #[test]
    fn test_payload_round_trip() {
        let payload = EmailJobPayload {
            kind: EmailKind::Cancellation,
            reservation: ReservationEmail {
                reservation_id: Uuid::new_v4(),
                customer_name: "Jean Dupont".to_string(),
                customer_email: "jean@example.com".to_string(),
                customer_phone: "+241 01 02 03 04".to_string(),
                room_name: "Salle Okoumé".to_string(),
                event_object: "Réunion".to_string(),
                start_time: Utc::now(),
                end_time: Utc::now() + chrono::Duration::days(1),
                start_hour: 8,
                end_hour: 18,
                total_price: 200_000,
                number_of_guests: 8,
                lunch_selected: false,
                breakfast_option: None,
                coffee_break_selected: true,
                notes: None,
            },
        };

        let value = serde_json::to_value(&payload).unwrap();
        let parsed = parse_payload(&value).unwrap();
        assert_eq!(parsed.kind, EmailKind::Cancellation);
        assert_eq!(parsed.reservation.total_price, 200_000);
    }

    #[test]
    fn test_malformed_payload_is_permanent() {
        let err = parse_payload(&serde_json::json!({"kind": "unknown"})).unwrap_err();
        assert!(matches!(err, JobExecutionError::Permanent(_)));
    }
}
