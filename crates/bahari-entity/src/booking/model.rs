//! Booking entity model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::availability::DateSpan;
use super::status::{BookingStatus, PaymentStatus, ReservationStage};

/// A room reservation.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Booking {
    /// Unique booking identifier.
    pub id: Uuid,
    /// The reserved room.
    pub room_id: Uuid,
    /// Optional add-on package.
    pub package_id: Option<Uuid>,
    /// Guest full name.
    pub guest_name: String,
    /// Guest email address.
    pub guest_email: String,
    /// Guest phone number (optional).
    pub guest_phone: Option<String>,
    /// First occupied night.
    pub check_in_date: NaiveDate,
    /// Checkout day; invariant: strictly after `check_in_date`.
    pub check_out_date: NaiveDate,
    /// Number of adults (positive).
    pub adults: i32,
    /// Number of children (non-negative).
    pub children: i32,
    /// Free-text requests from the guest.
    pub special_requests: Option<String>,
    /// Total price in whole currency units; always equals
    /// `room.price * nights + package.price_addon * nights`.
    pub total_price: i64,
    /// Lifecycle status.
    pub status: BookingStatus,
    /// Payment status.
    pub payment_status: PaymentStatus,
    /// Opaque payment reference set when payment succeeds.
    pub payment_id: Option<String>,
    /// When the row was created.
    pub created_at: DateTime<Utc>,
    /// When the row was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Booking {
    /// The occupied half-open date interval.
    pub fn span(&self) -> DateSpan {
        DateSpan::new(self.check_in_date, self.check_out_date)
    }

    /// Number of nights of the stay.
    pub fn nights(&self) -> i64 {
        (self.check_out_date - self.check_in_date).num_days()
    }

    /// Current wizard stage, derived from persisted state.
    pub fn stage(&self) -> ReservationStage {
        ReservationStage::from_status(self.status, self.payment_status)
    }

    /// Whether the stay is entirely in the past as of `today`.
    pub fn is_past(&self, today: NaiveDate) -> bool {
        self.check_out_date <= today
    }
}

/// Data required to create a new booking.
///
/// The row is inserted in `pending`/`unpaid` state; `total_price` is
/// computed by the service from the room and package rates, never taken
/// from the client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBooking {
    /// The room to reserve.
    pub room_id: Uuid,
    /// Optional add-on package.
    pub package_id: Option<Uuid>,
    /// Guest full name.
    pub guest_name: String,
    /// Guest email address.
    pub guest_email: String,
    /// Guest phone (optional).
    pub guest_phone: Option<String>,
    /// First occupied night.
    pub check_in_date: NaiveDate,
    /// Checkout day.
    pub check_out_date: NaiveDate,
    /// Number of adults.
    pub adults: i32,
    /// Number of children.
    pub children: i32,
    /// Free-text requests.
    pub special_requests: Option<String>,
    /// Server-computed total price.
    pub total_price: i64,
}

/// A booking joined with the display fields of its room and package,
/// as listed on the admin surface and in confirmation mail.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct BookingDetail {
    /// The booking row.
    #[sqlx(flatten)]
    pub booking: Booking,
    /// Room display name.
    pub room_name: String,
    /// Nightly room rate at lookup time.
    pub room_price: i64,
    /// Room image URL, if any.
    pub room_image_url: Option<String>,
    /// Package display name, if a package was selected.
    pub package_name: Option<String>,
    /// Package nightly surcharge, if a package was selected.
    pub package_price_addon: Option<i64>,
}
