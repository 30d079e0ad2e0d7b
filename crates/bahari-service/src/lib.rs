//! # bahari-service
//!
//! Business logic service layer for Bahari. Each service orchestrates
//! repositories, the mailer, and authentication to implement
//! application-level use cases.
//!
//! Services follow constructor injection — all dependencies are provided
//! at construction time via `Arc` references.

pub mod auth;
pub mod booking;
pub mod contact;
pub mod context;
pub mod dashboard;
pub mod package;
pub mod room;
pub mod user;

pub use auth::AuthService;
pub use booking::{BookingService, ReservationRequest, RoomAvailability, StayQuote};
pub use contact::ContactService;
pub use context::RequestContext;
pub use dashboard::{DashboardService, DashboardStats};
pub use package::PackageService;
pub use room::RoomService;
pub use user::{AdminUserService, NewUser};
