//! Contact form handler.

use axum::Json;
use axum::extract::State;

use crate::dto::request::{ContactRequest, check};
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/contact
pub async fn submit(
    State(state): State<AppState>,
    Json(req): Json<ContactRequest>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    check(&req)?;

    state
        .contact_service
        .submit(&req.name, &req.email, &req.subject, &req.message)
        .await?;

    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Thank you for your message. We will get back to you shortly.".to_string(),
    })))
}
