//! Admin dashboard handler.

use axum::Json;
use axum::extract::State;

use bahari_service::dashboard::DashboardStats;

use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::AdminUser;
use crate::state::AppState;

/// GET /api/admin/dashboard
pub async fn stats(
    State(state): State<AppState>,
    _admin: AdminUser,
) -> Result<Json<ApiResponse<DashboardStats>>, ApiError> {
    let stats = state.dashboard_service.stats().await?;
    Ok(Json(ApiResponse::ok(stats)))
}
