//! Public reservation handlers — quote, create, lookup, payment.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use uuid::Uuid;

use bahari_service::booking::{ReservationRequest, StayQuote};

use crate::dto::request::{CreateBookingRequest, QuoteRequest, check};
use crate::dto::response::{ApiResponse, BookingResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/bookings/quote
pub async fn quote(
    State(state): State<AppState>,
    Json(req): Json<QuoteRequest>,
) -> Result<Json<ApiResponse<StayQuote>>, ApiError> {
    let quote = state
        .booking_service
        .quote(req.room_id, req.package_id, req.check_in_date, req.check_out_date)
        .await?;
    Ok(Json(ApiResponse::ok(quote)))
}

/// POST /api/bookings
pub async fn create_booking(
    State(state): State<AppState>,
    Json(req): Json<CreateBookingRequest>,
) -> Result<(StatusCode, Json<ApiResponse<BookingResponse>>), ApiError> {
    check(&req)?;

    let detail = state
        .booking_service
        .create_reservation(ReservationRequest {
            room_id: req.room_id,
            package_id: req.package_id,
            guest_name: req.guest_name,
            guest_email: req.guest_email,
            guest_phone: req.guest_phone,
            check_in_date: req.check_in_date,
            check_out_date: req.check_out_date,
            adults: req.adults,
            children: req.children,
            special_requests: req.special_requests,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(detail.into())),
    ))
}

/// GET /api/bookings/{id}
pub async fn get_booking(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<BookingResponse>>, ApiError> {
    let detail = state.booking_service.get_detail(id).await?;
    Ok(Json(ApiResponse::ok(detail.into())))
}

/// POST /api/bookings/{id}/payment
pub async fn confirm_payment(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<BookingResponse>>, ApiError> {
    let detail = state.booking_service.confirm_payment(id).await?;
    Ok(Json(ApiResponse::ok(detail.into())))
}
