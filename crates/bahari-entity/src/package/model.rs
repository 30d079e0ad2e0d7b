//! Add-on package entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// An optional add-on package bundled with a booking.
///
/// The surcharge is per night; it contributes `price_addon * nights` to the
/// booking total.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Package {
    /// Unique package identifier.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Marketing description.
    pub description: String,
    /// Nightly surcharge in whole currency units (non-negative).
    pub price_addon: i64,
    /// When the package was created.
    pub created_at: DateTime<Utc>,
    /// When the package was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a package.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePackage {
    /// Display name.
    pub name: String,
    /// Marketing description.
    pub description: String,
    /// Nightly surcharge.
    pub price_addon: i64,
}

/// Partial update for a package; `None` fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePackage {
    /// New display name.
    pub name: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New nightly surcharge.
    pub price_addon: Option<i64>,
}
