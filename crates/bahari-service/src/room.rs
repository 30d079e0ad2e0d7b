//! Room catalog management.

use std::sync::Arc;

use bytes::Bytes;
use tracing::{info, warn};
use uuid::Uuid;

use bahari_core::error::AppError;
use bahari_core::result::AppResult;
use bahari_core::traits::ImageStore;
use bahari_database::repositories::room::RoomRepository;
use bahari_entity::room::{CreateRoom, Room, UpdateRoom};

/// Handles room CRUD and image management.
#[derive(Debug, Clone)]
pub struct RoomService {
    room_repo: Arc<RoomRepository>,
    image_store: Arc<dyn ImageStore>,
}

impl RoomService {
    /// Creates a new room service.
    pub fn new(room_repo: Arc<RoomRepository>, image_store: Arc<dyn ImageStore>) -> Self {
        Self {
            room_repo,
            image_store,
        }
    }

    /// All rooms in the catalog.
    pub async fn list(&self) -> AppResult<Vec<Room>> {
        self.room_repo.find_all().await
    }

    /// A single room.
    pub async fn get(&self, id: Uuid) -> AppResult<Room> {
        self.room_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Room {id} not found")))
    }

    /// Create a room.
    pub async fn create(&self, data: CreateRoom) -> AppResult<Room> {
        if data.price < 0 {
            return Err(AppError::validation("Room price cannot be negative"));
        }
        if data.capacity <= 0 {
            return Err(AppError::validation("Room capacity must be positive"));
        }

        let room = self.room_repo.create(&data).await?;
        info!(room_id = %room.id, name = %room.name, "Room created");
        Ok(room)
    }

    /// Apply a partial update to a room.
    pub async fn update(&self, id: Uuid, data: UpdateRoom) -> AppResult<Room> {
        if matches!(data.price, Some(p) if p < 0) {
            return Err(AppError::validation("Room price cannot be negative"));
        }
        if matches!(data.capacity, Some(c) if c <= 0) {
            return Err(AppError::validation("Room capacity must be positive"));
        }

        let room = self.room_repo.update(id, &data).await?;
        info!(room_id = %id, "Room updated");
        Ok(room)
    }

    /// Store an uploaded image and attach it to the room.
    ///
    /// The previous image, if any, is deleted on a best-effort basis.
    pub async fn attach_image(&self, id: Uuid, filename: &str, data: Bytes) -> AppResult<Room> {
        let existing = self.get(id).await?;

        let url = self.image_store.store(filename, data).await?;
        let room = self.room_repo.set_image_url(id, &url).await?;

        if let Some(old_url) = existing.image_url {
            if old_url != url {
                if let Err(e) = self.image_store.delete(&old_url).await {
                    warn!(room_id = %id, error = %e, "Failed to delete replaced room image");
                }
            }
        }

        info!(room_id = %id, url = %url, "Room image updated");
        Ok(room)
    }

    /// Delete a room and, best-effort, its stored image.
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let room = self.get(id).await?;

        if !self.room_repo.delete(id).await? {
            return Err(AppError::not_found(format!("Room {id} not found")));
        }

        if let Some(url) = room.image_url {
            if let Err(e) = self.image_store.delete(&url).await {
                warn!(room_id = %id, error = %e, "Failed to delete image of removed room");
            }
        }

        info!(room_id = %id, "Room deleted");
        Ok(())
    }
}
