//! Admin booking management handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use uuid::Uuid;

use bahari_core::types::pagination::PageResponse;

use crate::dto::request::BookingListQuery;
use crate::dto::response::{ApiResponse, BookingResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::{AdminUser, PaginationParams};
use crate::state::AppState;

/// GET /api/admin/bookings
pub async fn list_bookings(
    State(state): State<AppState>,
    _admin: AdminUser,
    Query(filter): Query<BookingListQuery>,
    PaginationParams(page): PaginationParams,
) -> Result<Json<ApiResponse<PageResponse<BookingResponse>>>, ApiError> {
    let result = state.booking_service.list(filter.status, &page).await?;

    let items: Vec<BookingResponse> = result.items.into_iter().map(Into::into).collect();
    let page = PageResponse::new(items, result.page, result.page_size, result.total_items);

    Ok(Json(ApiResponse::ok(page)))
}

/// POST /api/admin/bookings/{id}/cancel
pub async fn cancel_booking(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<BookingResponse>>, ApiError> {
    state.booking_service.cancel(id).await?;
    let detail = state.booking_service.get_detail(id).await?;
    Ok(Json(ApiResponse::ok(detail.into())))
}

/// POST /api/admin/bookings/{id}/refund
pub async fn refund_booking(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<BookingResponse>>, ApiError> {
    state.booking_service.refund(id).await?;
    let detail = state.booking_service.get_detail(id).await?;
    Ok(Json(ApiResponse::ok(detail.into())))
}

/// DELETE /api/admin/bookings/{id}
pub async fn delete_booking(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.booking_service.delete(id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Booking deleted".to_string(),
    })))
}
