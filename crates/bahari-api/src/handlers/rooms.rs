//! Public room catalog and availability handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use chrono::{Days, Utc};
use uuid::Uuid;

use bahari_core::error::AppError;

use crate::dto::request::AvailabilityQuery;
use crate::dto::response::{ApiResponse, AvailabilityResponse, RoomResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// Default availability window length in days.
const DEFAULT_WINDOW_DAYS: u64 = 180;

/// GET /api/rooms
pub async fn list_rooms(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<RoomResponse>>>, ApiError> {
    let placeholder = &state.config.storage.placeholder_image_url;
    let rooms = state
        .room_service
        .list()
        .await?
        .into_iter()
        .map(|room| RoomResponse::from_room(room, placeholder))
        .collect();
    Ok(Json(ApiResponse::ok(rooms)))
}

/// GET /api/rooms/{id}
pub async fn get_room(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<RoomResponse>>, ApiError> {
    let room = state.room_service.get(id).await?;
    Ok(Json(ApiResponse::ok(RoomResponse::from_room(
        room,
        &state.config.storage.placeholder_image_url,
    ))))
}

/// GET /api/rooms/{id}/availability
pub async fn room_availability(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<AvailabilityQuery>,
) -> Result<Json<ApiResponse<AvailabilityResponse>>, ApiError> {
    let from = query.from.unwrap_or_else(|| Utc::now().date_naive());
    let to = match query.to {
        Some(to) => to,
        None => from
            .checked_add_days(Days::new(DEFAULT_WINDOW_DAYS))
            .ok_or_else(|| AppError::validation("Availability window is out of range"))?,
    };

    let availability = state.booking_service.room_availability(id, from, to).await?;

    Ok(Json(ApiResponse::ok(
        AvailabilityResponse::from_availability(id, from, to, availability),
    )))
}
