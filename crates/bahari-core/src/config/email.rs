//! Email relay configuration.

use serde::{Deserialize, Serialize};

/// Outbound email configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailConfig {
    /// Whether outbound email is enabled. When disabled, messages are
    /// logged instead of sent.
    #[serde(default)]
    pub enabled: bool,
    /// HTTP endpoint of the email relay service.
    #[serde(default = "default_relay_url")]
    pub relay_url: String,
    /// API key for the relay service.
    #[serde(default)]
    pub api_key: String,
    /// From address used for reservation mail.
    #[serde(default = "default_from")]
    pub from_address: String,
    /// Mailbox receiving contact form submissions.
    #[serde(default = "default_contact")]
    pub contact_address: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

fn default_relay_url() -> String {
    "https://api.mailrelay.example/v1/send".to_string()
}

fn default_from() -> String {
    "Bahari Hotel <reservations@baharihotel.com>".to_string()
}

fn default_contact() -> String {
    "frontdesk@baharihotel.com".to_string()
}

fn default_timeout() -> u64 {
    10
}
