//! Mailer implementations: HTTP relay and a logging fallback.

use std::time::Duration;

use async_trait::async_trait;
use tracing::{info, warn};

use bahari_core::config::EmailConfig;
use bahari_core::error::AppError;
use bahari_core::result::AppResult;
use bahari_core::traits::{Mailer, OutboundEmail};

/// Mailer that posts messages to an HTTP email relay service.
#[derive(Debug, Clone)]
pub struct HttpRelayMailer {
    client: reqwest::Client,
    relay_url: String,
    api_key: String,
    from_address: String,
}

impl HttpRelayMailer {
    /// Create a new relay mailer from email configuration.
    pub fn new(config: &EmailConfig) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| {
                AppError::external_service(format!("Failed to build email relay client: {e}"))
            })?;

        Ok(Self {
            client,
            relay_url: config.relay_url.clone(),
            api_key: config.api_key.clone(),
            from_address: config.from_address.clone(),
        })
    }
}

#[async_trait]
impl Mailer for HttpRelayMailer {
    async fn send(&self, email: OutboundEmail) -> AppResult<()> {
        let payload = serde_json::json!({
            "from": self.from_address,
            "to": email.to,
            "subject": email.subject,
            "html": email.html_body,
        });

        let response = self
            .client
            .post(&self.relay_url)
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| AppError::external_service(format!("Email relay request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!(%status, to = %email.to, "Email relay rejected message");
            return Err(AppError::external_service(format!(
                "Email relay returned {status}: {body}"
            )));
        }

        info!(to = %email.to, subject = %email.subject, "Email accepted by relay");
        Ok(())
    }
}

/// Mailer that logs messages instead of sending them.
///
/// Used when email is disabled in configuration and in tests.
#[derive(Debug, Clone, Default)]
pub struct LogMailer;

impl LogMailer {
    /// Create a new logging mailer.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Mailer for LogMailer {
    async fn send(&self, email: OutboundEmail) -> AppResult<()> {
        info!(
            to = %email.to,
            subject = %email.subject,
            body_bytes = email.html_body.len(),
            "Email delivery disabled; message logged"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_log_mailer_accepts_everything() {
        let mailer = LogMailer::new();
        let result = mailer
            .send(OutboundEmail {
                to: "guest@example.com".to_string(),
                subject: "Test".to_string(),
                html_body: "<p>hello</p>".to_string(),
            })
            .await;
        assert!(result.is_ok());
    }
}
