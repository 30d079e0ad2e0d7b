//! Response DTOs.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use bahari_entity::booking::availability::DateSpan;
use bahari_entity::booking::model::BookingDetail;
use bahari_entity::booking::status::{BookingStatus, PaymentStatus, ReservationStage};
use bahari_entity::room::Room;
use bahari_entity::user::User;
use bahari_service::booking::RoomAvailability;

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message.
    pub message: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status.
    pub status: String,
    /// Version.
    pub version: String,
}

/// Detailed health response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailedHealthResponse {
    /// Overall status.
    pub status: String,
    /// Database status.
    pub database: String,
    /// Version.
    pub version: String,
}

/// Login response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Access token.
    pub access_token: String,
    /// Refresh token.
    pub refresh_token: String,
    /// Access token expiration.
    pub access_expires_at: DateTime<Utc>,
    /// Refresh token expiration.
    pub refresh_expires_at: DateTime<Utc>,
    /// User info.
    pub user: UserResponse,
}

/// User summary for responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    /// User ID.
    pub id: Uuid,
    /// Username.
    pub username: String,
    /// Email.
    pub email: String,
    /// Display name.
    pub display_name: Option<String>,
    /// Role.
    pub role: String,
    /// Status.
    pub status: String,
    /// Created at.
    pub created_at: DateTime<Utc>,
    /// Last login.
    pub last_login_at: Option<DateTime<Utc>>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            display_name: user.display_name,
            role: user.role.to_string(),
            status: user.status.to_string(),
            created_at: user.created_at,
            last_login_at: user.last_login_at,
        }
    }
}

/// Room summary for responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomResponse {
    /// Room ID.
    pub id: Uuid,
    /// Room name.
    pub name: String,
    /// Description.
    pub description: String,
    /// Nightly rate in whole KES.
    pub price: i64,
    /// Maximum guests.
    pub capacity: i32,
    /// Amenity names.
    pub amenities: Vec<String>,
    /// Image URL; the placeholder when no image was uploaded.
    pub image_url: String,
    /// Created at.
    pub created_at: DateTime<Utc>,
    /// Updated at.
    pub updated_at: DateTime<Utc>,
}

impl RoomResponse {
    /// Build from a room, substituting the placeholder for a missing image.
    pub fn from_room(room: Room, placeholder: &str) -> Self {
        Self {
            id: room.id,
            name: room.name,
            description: room.description,
            price: room.price,
            capacity: room.capacity,
            amenities: room.amenities,
            image_url: room.image_url.unwrap_or_else(|| placeholder.to_string()),
            created_at: room.created_at,
            updated_at: room.updated_at,
        }
    }
}

/// Booking with display fields for guests and the admin panel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingResponse {
    /// Booking ID.
    pub id: Uuid,
    /// Reserved room.
    pub room_id: Uuid,
    /// Room display name.
    pub room_name: String,
    /// Selected package, if any.
    pub package_id: Option<Uuid>,
    /// Package display name, if any.
    pub package_name: Option<String>,
    /// Guest full name.
    pub guest_name: String,
    /// Guest email.
    pub guest_email: String,
    /// Guest phone.
    pub guest_phone: Option<String>,
    /// First occupied night.
    pub check_in_date: NaiveDate,
    /// Checkout day.
    pub check_out_date: NaiveDate,
    /// Number of nights.
    pub nights: i64,
    /// Number of adults.
    pub adults: i32,
    /// Number of children.
    pub children: i32,
    /// Free-text requests.
    pub special_requests: Option<String>,
    /// Total price in whole KES.
    pub total_price: i64,
    /// Lifecycle status.
    pub status: BookingStatus,
    /// Payment status.
    pub payment_status: PaymentStatus,
    /// Payment reference, once paid.
    pub payment_id: Option<String>,
    /// Reservation wizard stage, derived from the status pair.
    pub stage: ReservationStage,
    /// Created at.
    pub created_at: DateTime<Utc>,
}

impl From<BookingDetail> for BookingResponse {
    fn from(detail: BookingDetail) -> Self {
        let nights = detail.booking.nights();
        let stage = detail.booking.stage();
        let b = detail.booking;
        Self {
            id: b.id,
            room_id: b.room_id,
            room_name: detail.room_name,
            package_id: b.package_id,
            package_name: detail.package_name,
            guest_name: b.guest_name,
            guest_email: b.guest_email,
            guest_phone: b.guest_phone,
            check_in_date: b.check_in_date,
            check_out_date: b.check_out_date,
            nights,
            adults: b.adults,
            children: b.children,
            special_requests: b.special_requests,
            total_price: b.total_price,
            status: b.status,
            payment_status: b.payment_status,
            payment_id: b.payment_id,
            stage,
            created_at: b.created_at,
        }
    }
}

/// Availability of a room over a date window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilityResponse {
    /// The room queried.
    pub room_id: Uuid,
    /// Window start (inclusive).
    pub from: NaiveDate,
    /// Window end (exclusive).
    pub to: NaiveDate,
    /// Active booked spans.
    pub booked_spans: Vec<DateSpan>,
    /// Every occupied date within the window.
    pub unavailable_dates: Vec<NaiveDate>,
}

impl AvailabilityResponse {
    /// Build from the service view of a room's availability.
    pub fn from_availability(
        room_id: Uuid,
        from: NaiveDate,
        to: NaiveDate,
        availability: RoomAvailability,
    ) -> Self {
        Self {
            room_id,
            from,
            to,
            booked_spans: availability.booked_spans,
            unavailable_dates: availability.unavailable_dates,
        }
    }
}
