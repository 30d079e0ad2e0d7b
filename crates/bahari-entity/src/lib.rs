//! # bahari-entity
//!
//! Domain entity models for the Bahari hotel booking backend. Every struct
//! in this crate represents a database table row or a domain value object.
//! All entities derive `Debug`, `Clone`, `Serialize`, `Deserialize`, and
//! database entities additionally derive `sqlx::FromRow`.
//!
//! The booking module also hosts the availability calendar and the price
//! calculator — the pure logic that the reservation and payment flows are
//! built on.

pub mod booking;
pub mod package;
pub mod room;
pub mod user;
