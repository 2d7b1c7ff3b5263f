//! # roomhub-mailer
//!
//! Outbound e-mail for Roomhub: a thin client for an HTTP JSON mail relay
//! and the French HTML templates for the three reservation notices
//! (customer confirmation, admin alert, cancellation).
//!
//! Mail is always dispatched from the background worker; nothing in the
//! request path waits on the relay.

pub mod client;
pub mod message;
pub mod templates;

pub use client::MailerClient;
pub use message::{EmailMessage, ReservationEmail};
