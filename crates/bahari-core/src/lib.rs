//! # bahari-core
//!
//! Core crate for the Bahari hotel booking backend. Contains configuration
//! schemas, collaborator traits, shared types, and the unified error system.
//!
//! This crate has **no** internal dependencies on other Bahari crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
