//! HTTP mail relay client.

use std::time::Duration;

use tracing::{info, warn};

use roomhub_core::config::mailer::MailerConfig;
use roomhub_core::error::AppError;
use roomhub_core::result::AppResult;

use crate::message::EmailMessage;

/// Client for a JSON mail relay (`POST {api_url}` with a bearer key).
///
/// When the mailer is disabled in configuration, `send` logs the message
/// and reports success, so notification jobs behave identically in
/// environments without a relay.
#[derive(Debug, Clone)]
pub struct MailerClient {
    http: reqwest::Client,
    config: MailerConfig,
}

impl MailerClient {
    /// Create a new mailer client from configuration.
    pub fn new(config: MailerConfig) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .build()
            .map_err(|e| AppError::mailer(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self { http, config })
    }

    /// Admin addresses that receive new-booking alerts.
    pub fn admin_recipients(&self) -> &[String] {
        &self.config.admin_recipients
    }

    /// Deliver one message through the relay.
    pub async fn send(&self, message: &EmailMessage) -> AppResult<()> {
        if !self.config.enabled {
            info!(to = %message.to, subject = %message.subject, "Mailer disabled, dropping message");
            return Ok(());
        }

        let body = serde_json::json!({
            "from": self.config.sender,
            "to": message.to,
            "subject": message.subject,
            "html": message.html,
        });

        let response = self
            .http
            .post(&self.config.api_url)
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::mailer(format!("Mail relay request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let detail = response.text().await.unwrap_or_default();
            warn!(%status, %detail, to = %message.to, "Mail relay rejected message");
            return Err(AppError::mailer(format!(
                "Mail relay returned {status}: {detail}"
            )));
        }

        info!(to = %message.to, subject = %message.subject, "Message delivered");
        Ok(())
    }
}
