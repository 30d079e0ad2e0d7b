//! Admin-only handlers.

pub mod bookings;
pub mod dashboard;
pub mod packages;
pub mod rooms;
pub mod users;
