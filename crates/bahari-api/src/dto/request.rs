//! Request DTOs with validation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use bahari_core::error::AppError;
use bahari_entity::booking::status::BookingStatus;
use bahari_entity::user::{UserRole, UserStatus};

/// Run validator checks, folding all violations into one message.
pub fn check<T: Validate>(req: &T) -> Result<(), AppError> {
    req.validate().map_err(|e| {
        let mut messages: Vec<String> = e
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |err| {
                    err.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("{field} is invalid"))
                })
            })
            .collect();
        messages.sort();
        AppError::validation(messages.join("; "))
    })
}

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Username or email.
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Token refresh request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshRequest {
    /// Refresh token.
    pub refresh_token: String,
}

/// Price quote request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteRequest {
    /// Room to price.
    pub room_id: Uuid,
    /// Optional add-on package.
    pub package_id: Option<Uuid>,
    /// First occupied night.
    pub check_in_date: NaiveDate,
    /// Checkout day.
    pub check_out_date: NaiveDate,
}

/// Reservation creation request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateBookingRequest {
    /// Room to reserve.
    pub room_id: Uuid,
    /// Optional add-on package.
    pub package_id: Option<Uuid>,
    /// Guest full name.
    #[validate(length(min = 1, max = 128, message = "Guest name is required"))]
    pub guest_name: String,
    /// Guest email.
    #[validate(email(message = "A valid email address is required"))]
    pub guest_email: String,
    /// Guest phone (optional).
    pub guest_phone: Option<String>,
    /// First occupied night.
    pub check_in_date: NaiveDate,
    /// Checkout day.
    pub check_out_date: NaiveDate,
    /// Number of adults.
    #[validate(range(min = 1, message = "At least one adult is required"))]
    pub adults: i32,
    /// Number of children.
    #[serde(default)]
    #[validate(range(min = 0, message = "Child count cannot be negative"))]
    pub children: i32,
    /// Free-text requests.
    pub special_requests: Option<String>,
}

/// Availability window query parameters.
#[derive(Debug, Clone, Deserialize)]
pub struct AvailabilityQuery {
    /// Window start (inclusive). Defaults to today.
    pub from: Option<NaiveDate>,
    /// Window end (exclusive). Defaults to 180 days after the start.
    pub to: Option<NaiveDate>,
}

/// Booking list filter query parameters.
#[derive(Debug, Clone, Deserialize)]
pub struct BookingListQuery {
    /// Optional status filter.
    pub status: Option<BookingStatus>,
}

/// Contact form submission.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ContactRequest {
    /// Sender name.
    #[validate(length(min = 1, max = 128, message = "Name is required"))]
    pub name: String,
    /// Sender email.
    #[validate(email(message = "A valid email address is required"))]
    pub email: String,
    /// Subject line.
    #[serde(default)]
    pub subject: String,
    /// Message body.
    #[validate(length(min = 1, max = 5000, message = "Message is required"))]
    pub message: String,
}

/// Room creation request (admin).
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateRoomRequest {
    /// Room name.
    #[validate(length(min = 1, max = 128, message = "Room name is required"))]
    pub name: String,
    /// Description.
    #[serde(default)]
    pub description: String,
    /// Nightly rate in whole KES.
    #[validate(range(min = 0, message = "Price cannot be negative"))]
    pub price: i64,
    /// Maximum guests.
    #[validate(range(min = 1, message = "Capacity must be positive"))]
    pub capacity: i32,
    /// Amenity names.
    #[serde(default)]
    pub amenities: Vec<String>,
    /// Image URL (optional; usually set via the upload endpoint).
    pub image_url: Option<String>,
}

/// Room update request (admin). Unset fields keep their value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateRoomRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<i64>,
    pub capacity: Option<i32>,
    pub amenities: Option<Vec<String>>,
    pub image_url: Option<String>,
}

/// Package creation request (admin).
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreatePackageRequest {
    /// Package name.
    #[validate(length(min = 1, max = 128, message = "Package name is required"))]
    pub name: String,
    /// Description.
    #[serde(default)]
    pub description: String,
    /// Per-night add-on in whole KES.
    #[validate(range(min = 0, message = "Add-on price cannot be negative"))]
    pub price_addon: i64,
}

/// Package update request (admin).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePackageRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price_addon: Option<i64>,
}

/// Create user request (admin).
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateUserRequest {
    /// Username.
    #[validate(length(min = 3, max = 64, message = "Username must be 3-64 characters"))]
    pub username: String,
    /// Email.
    #[validate(email(message = "A valid email address is required"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
    /// Display name.
    pub display_name: Option<String>,
    /// Role.
    pub role: UserRole,
}

/// Role change request (admin).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateUserRoleRequest {
    /// New role.
    pub role: UserRole,
}

/// Status change request (admin).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateUserStatusRequest {
    /// New status.
    pub status: UserStatus,
}
