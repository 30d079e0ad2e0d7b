//! Admin room management handlers.

use axum::Json;
use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use uuid::Uuid;

use bahari_core::error::AppError;
use bahari_entity::room::{CreateRoom, UpdateRoom};

use crate::dto::request::{CreateRoomRequest, UpdateRoomRequest, check};
use crate::dto::response::{ApiResponse, MessageResponse, RoomResponse};
use crate::error::ApiError;
use crate::extractors::AdminUser;
use crate::state::AppState;

/// POST /api/admin/rooms
pub async fn create_room(
    State(state): State<AppState>,
    _admin: AdminUser,
    Json(req): Json<CreateRoomRequest>,
) -> Result<(StatusCode, Json<ApiResponse<RoomResponse>>), ApiError> {
    check(&req)?;

    let room = state
        .room_service
        .create(CreateRoom {
            name: req.name,
            description: req.description,
            price: req.price,
            capacity: req.capacity,
            amenities: req.amenities,
            image_url: req.image_url,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(RoomResponse::from_room(
            room,
            &state.config.storage.placeholder_image_url,
        ))),
    ))
}

/// PUT /api/admin/rooms/{id}
pub async fn update_room(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateRoomRequest>,
) -> Result<Json<ApiResponse<RoomResponse>>, ApiError> {
    let room = state
        .room_service
        .update(
            id,
            UpdateRoom {
                name: req.name,
                description: req.description,
                price: req.price,
                capacity: req.capacity,
                amenities: req.amenities,
                image_url: req.image_url,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(RoomResponse::from_room(
        room,
        &state.config.storage.placeholder_image_url,
    ))))
}

/// POST /api/admin/rooms/{id}/image
pub async fn upload_image(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<Uuid>,
    mut multipart: Multipart,
) -> Result<Json<ApiResponse<RoomResponse>>, ApiError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::validation(format!("Invalid multipart body: {e}")))?
    {
        if field.name() != Some("image") {
            continue;
        }

        let filename = field.file_name().unwrap_or("upload").to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::validation(format!("Failed to read upload: {e}")))?;

        let room = state.room_service.attach_image(id, &filename, data).await?;
        return Ok(Json(ApiResponse::ok(RoomResponse::from_room(
            room,
            &state.config.storage.placeholder_image_url,
        ))));
    }

    Err(ApiError(AppError::validation(
        "Multipart field 'image' is required",
    )))
}

/// DELETE /api/admin/rooms/{id}
pub async fn delete_room(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.room_service.delete(id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Room deleted".to_string(),
    })))
}
