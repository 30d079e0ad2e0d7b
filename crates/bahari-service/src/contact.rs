//! Contact form handling.

use std::sync::Arc;

use tracing::info;

use bahari_core::config::EmailConfig;
use bahari_core::error::AppError;
use bahari_core::result::AppResult;
use bahari_core::traits::Mailer;
use bahari_mailer::templates::contact_email;

/// Forwards contact form submissions to the front desk mailbox.
#[derive(Debug, Clone)]
pub struct ContactService {
    mailer: Arc<dyn Mailer>,
    contact_address: String,
}

impl ContactService {
    /// Creates a new contact service.
    pub fn new(mailer: Arc<dyn Mailer>, config: &EmailConfig) -> Self {
        Self {
            mailer,
            contact_address: config.contact_address.clone(),
        }
    }

    /// Validate and forward a submission. Unlike booking mail, delivery
    /// failure here is reported to the caller.
    pub async fn submit(
        &self,
        name: &str,
        email: &str,
        subject: &str,
        message: &str,
    ) -> AppResult<()> {
        if name.trim().is_empty() {
            return Err(AppError::validation("Name is required"));
        }
        if !email.contains('@') {
            return Err(AppError::validation("Invalid email address"));
        }
        if message.trim().is_empty() {
            return Err(AppError::validation("Message is required"));
        }

        let subject = if subject.trim().is_empty() {
            "General enquiry"
        } else {
            subject.trim()
        };

        self.mailer
            .send(contact_email(
                &self.contact_address,
                name.trim(),
                email.trim(),
                subject,
                message.trim(),
            ))
            .await?;

        info!(from = email, "Contact form forwarded");
        Ok(())
    }
}
