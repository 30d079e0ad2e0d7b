//! Room repository implementation.
//!
//! Amenities are stored as a single text column (JSON array or legacy
//! comma-separated); rows come back as `RoomRow` and are normalized into
//! `Room` at the repository boundary.

use sqlx::PgPool;
use uuid::Uuid;

use bahari_core::error::{AppError, ErrorKind};
use bahari_core::result::AppResult;
use bahari_entity::room::amenities::amenities_to_column;
use bahari_entity::room::model::{CreateRoom, Room, RoomRow, UpdateRoom};

/// Repository for room CRUD operations.
#[derive(Debug, Clone)]
pub struct RoomRepository {
    pool: PgPool,
}

impl RoomRepository {
    /// Create a new room repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a room by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Room>> {
        let row = sqlx::query_as::<_, RoomRow>("SELECT * FROM rooms WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find room by id", e)
            })?;

        Ok(row.map(Room::from))
    }

    /// List all rooms, cheapest first.
    pub async fn find_all(&self) -> AppResult<Vec<Room>> {
        let rows = sqlx::query_as::<_, RoomRow>("SELECT * FROM rooms ORDER BY price ASC, name ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list rooms", e))?;

        Ok(rows.into_iter().map(Room::from).collect())
    }

    /// Insert a new room.
    pub async fn create(&self, data: &CreateRoom) -> AppResult<Room> {
        let row = sqlx::query_as::<_, RoomRow>(
            "INSERT INTO rooms (name, description, price, capacity, amenities, image_url) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING *",
        )
        .bind(&data.name)
        .bind(&data.description)
        .bind(data.price)
        .bind(data.capacity)
        .bind(amenities_to_column(&data.amenities))
        .bind(&data.image_url)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| Self::map_constraint_error(e, "Failed to create room"))?;

        Ok(Room::from(row))
    }

    /// Apply a partial update to a room. Unset fields keep their value.
    pub async fn update(&self, id: Uuid, data: &UpdateRoom) -> AppResult<Room> {
        let amenities_column = data.amenities.as_deref().map(amenities_to_column);

        let row = sqlx::query_as::<_, RoomRow>(
            "UPDATE rooms SET \
                name = COALESCE($2, name), \
                description = COALESCE($3, description), \
                price = COALESCE($4, price), \
                capacity = COALESCE($5, capacity), \
                amenities = COALESCE($6, amenities), \
                image_url = COALESCE($7, image_url), \
                updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&data.name)
        .bind(&data.description)
        .bind(data.price)
        .bind(data.capacity)
        .bind(amenities_column)
        .bind(&data.image_url)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| Self::map_constraint_error(e, "Failed to update room"))?
        .ok_or_else(|| AppError::not_found(format!("Room {id} not found")))?;

        Ok(Room::from(row))
    }

    /// Replace a room's image URL.
    pub async fn set_image_url(&self, id: Uuid, image_url: &str) -> AppResult<Room> {
        let row = sqlx::query_as::<_, RoomRow>(
            "UPDATE rooms SET image_url = $2, updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(image_url)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to set room image", e))?
        .ok_or_else(|| AppError::not_found(format!("Room {id} not found")))?;

        Ok(Room::from(row))
    }

    /// Delete a room. Fails with Conflict while bookings still reference it.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM rooms WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| match &e {
                sqlx::Error::Database(db_err)
                    if db_err.constraint() == Some("bookings_room_id_fkey") =>
                {
                    AppError::conflict("Room has existing bookings and cannot be deleted")
                }
                _ => AppError::with_source(ErrorKind::Database, "Failed to delete room", e),
            })?;

        Ok(result.rows_affected() > 0)
    }

    /// Total number of rooms.
    pub async fn count(&self) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM rooms")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count rooms", e))
    }

    fn map_constraint_error(e: sqlx::Error, context: &str) -> AppError {
        match &e {
            sqlx::Error::Database(db_err) if db_err.constraint() == Some("rooms_name_key") => {
                AppError::conflict("A room with this name already exists")
            }
            _ => AppError::with_source(ErrorKind::Database, context, e),
        }
    }
}
