//! # bahari-mailer
//!
//! Outbound email for the reservation flow. Delivery goes through an HTTP
//! relay service; when email is disabled in configuration, messages are
//! logged instead of sent so the booking flow behaves identically in
//! development.

pub mod relay;
pub mod templates;

pub use relay::{HttpRelayMailer, LogMailer};
pub use templates::BookingSummary;
