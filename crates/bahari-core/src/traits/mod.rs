//! Collaborator traits.
//!
//! The email relay and the image blob store are external collaborators.
//! Their traits are defined here in `bahari-core` and implemented in the
//! `bahari-mailer` and `bahari-storage` crates.

pub mod image_store;
pub mod mailer;

pub use image_store::ImageStore;
pub use mailer::{Mailer, OutboundEmail};
