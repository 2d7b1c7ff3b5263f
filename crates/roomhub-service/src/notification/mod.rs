//! Notification enqueueing.

pub mod service;

pub use service::{EMAIL_JOB_TYPE, EmailJobPayload, EmailKind, MAIL_QUEUE, NotificationService};
