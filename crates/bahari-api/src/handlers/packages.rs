//! Public package catalog handlers.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use bahari_entity::package::model::Package;

use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/packages
pub async fn list_packages(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Package>>>, ApiError> {
    let packages = state.package_service.list().await?;
    Ok(Json(ApiResponse::ok(packages)))
}

/// GET /api/packages/{id}
pub async fn get_package(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Package>>, ApiError> {
    let package = state.package_service.get(id).await?;
    Ok(Json(ApiResponse::ok(package)))
}
