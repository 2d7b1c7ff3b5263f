//! Outbound mail relay configuration.

use serde::{Deserialize, Serialize};

/// HTTP mail relay settings.
///
/// Messages are delivered through a JSON mail API (`POST {api_url}` with a
/// bearer key). When `enabled` is false the mailer logs and drops messages,
/// which keeps notification side effects harmless in development.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MailerConfig {
    /// Whether outbound mail is enabled.
    #[serde(default)]
    pub enabled: bool,
    /// Mail relay endpoint URL.
    #[serde(default)]
    pub api_url: String,
    /// Bearer key for the relay.
    #[serde(default)]
    pub api_key: String,
    /// Sender address, e.g. `"Roomhub <reservations@example.com>"`.
    #[serde(default = "default_sender")]
    pub sender: String,
    /// Admin addresses receiving new-booking alerts.
    #[serde(default)]
    pub admin_recipients: Vec<String>,
    /// Per-request timeout in seconds.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_seconds: u64,
}

fn default_sender() -> String {
    "Roomhub <no-reply@localhost>".to_string()
}

fn default_request_timeout() -> u64 {
    10
}
