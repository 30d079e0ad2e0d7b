//! Booking domain: entity model, lifecycle statuses, the availability
//! calendar, and the price calculator.

pub mod availability;
pub mod model;
pub mod pricing;
pub mod status;

pub use availability::{AvailabilityError, DateSpan, RoomCalendar};
pub use model::{Booking, BookingDetail, CreateBooking};
pub use pricing::PricingError;
pub use status::{BookingStatus, PaymentStatus, ReservationStage};
