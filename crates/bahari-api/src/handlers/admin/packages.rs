//! Admin package management handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use uuid::Uuid;

use bahari_entity::package::model::{CreatePackage, Package, UpdatePackage};

use crate::dto::request::{CreatePackageRequest, UpdatePackageRequest, check};
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::AdminUser;
use crate::state::AppState;

/// POST /api/admin/packages
pub async fn create_package(
    State(state): State<AppState>,
    _admin: AdminUser,
    Json(req): Json<CreatePackageRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Package>>), ApiError> {
    check(&req)?;

    let package = state
        .package_service
        .create(CreatePackage {
            name: req.name,
            description: req.description,
            price_addon: req.price_addon,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(package))))
}

/// PUT /api/admin/packages/{id}
pub async fn update_package(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdatePackageRequest>,
) -> Result<Json<ApiResponse<Package>>, ApiError> {
    let package = state
        .package_service
        .update(
            id,
            UpdatePackage {
                name: req.name,
                description: req.description,
                price_addon: req.price_addon,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(package)))
}

/// DELETE /api/admin/packages/{id}
pub async fn delete_package(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.package_service.delete(id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Package deleted".to_string(),
    })))
}
