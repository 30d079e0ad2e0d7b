//! Repository implementations, one per aggregate.

pub mod booking;
pub mod package;
pub mod room;
pub mod user;
