//! Email sink trait for the confirmation and contact flows.

use async_trait::async_trait;

use crate::result::AppResult;

/// An outbound email message.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct OutboundEmail {
    /// Recipient address.
    pub to: String,
    /// Subject line.
    pub subject: String,
    /// HTML body.
    pub html_body: String,
}

/// Trait for outbound email delivery.
///
/// The relay is a simple `send(to, subject, html)` sink; delivery failures
/// are reported but callers decide whether they are fatal (booking and
/// payment flows treat them as non-fatal).
#[async_trait]
pub trait Mailer: Send + Sync + std::fmt::Debug + 'static {
    /// Send a single message. Returns once the relay has accepted it.
    async fn send(&self, email: OutboundEmail) -> AppResult<()>;
}
