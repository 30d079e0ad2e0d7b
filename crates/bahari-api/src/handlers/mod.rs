//! HTTP request handlers, organized by domain.

pub mod admin;
pub mod auth;
pub mod bookings;
pub mod contact;
pub mod health;
pub mod packages;
pub mod rooms;
