//! Room entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::amenities::parse_amenities;

/// A bookable room in the catalog.
///
/// `amenities` is normalized; the raw column shape never leaves the
/// repository layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    /// Unique room identifier.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Marketing description.
    pub description: String,
    /// Nightly rate in whole currency units.
    pub price: i64,
    /// Maximum number of guests.
    pub capacity: i32,
    /// Normalized amenities list.
    pub amenities: Vec<String>,
    /// Public image URL; the API substitutes a placeholder when absent.
    pub image_url: Option<String>,
    /// When the room was created.
    pub created_at: DateTime<Utc>,
    /// When the room was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Raw database row for a room; amenities still in column form.
#[derive(Debug, Clone, FromRow)]
pub struct RoomRow {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub price: i64,
    pub capacity: i32,
    pub amenities: String,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<RoomRow> for Room {
    fn from(row: RoomRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            description: row.description,
            price: row.price,
            capacity: row.capacity,
            amenities: parse_amenities(&row.amenities),
            image_url: row.image_url,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Data required to create a room.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRoom {
    /// Display name.
    pub name: String,
    /// Marketing description.
    pub description: String,
    /// Nightly rate.
    pub price: i64,
    /// Maximum guests.
    pub capacity: i32,
    /// Amenities list (already normalized by the caller).
    pub amenities: Vec<String>,
    /// Image URL (optional).
    pub image_url: Option<String>,
}

/// Partial update for a room; `None` fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateRoom {
    /// New display name.
    pub name: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New nightly rate.
    pub price: Option<i64>,
    /// New capacity.
    pub capacity: Option<i32>,
    /// Replacement amenities list.
    pub amenities: Option<Vec<String>>,
    /// New image URL.
    pub image_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_conversion_normalizes_amenities() {
        let row = RoomRow {
            id: Uuid::new_v4(),
            name: "Ocean Suite".to_string(),
            description: "Top-floor suite".to_string(),
            price: 18000,
            capacity: 3,
            amenities: "Wi-Fi, Balcony".to_string(),
            image_url: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let room: Room = row.into();
        assert_eq!(room.amenities, vec!["Wi-Fi", "Balcony"]);
    }
}
