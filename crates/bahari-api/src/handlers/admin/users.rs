//! Admin user management handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use uuid::Uuid;

use bahari_core::types::pagination::PageResponse;
use bahari_service::user::NewUser;

use crate::dto::request::{
    CreateUserRequest, UpdateUserRoleRequest, UpdateUserStatusRequest, check,
};
use crate::dto::response::{ApiResponse, MessageResponse, UserResponse};
use crate::error::ApiError;
use crate::extractors::{AdminUser, PaginationParams};
use crate::state::AppState;

/// GET /api/admin/users
pub async fn list_users(
    State(state): State<AppState>,
    _admin: AdminUser,
    PaginationParams(page): PaginationParams,
) -> Result<Json<ApiResponse<PageResponse<UserResponse>>>, ApiError> {
    let result = state.admin_user_service.list(&page).await?;

    let items: Vec<UserResponse> = result.items.into_iter().map(Into::into).collect();
    let page = PageResponse::new(items, result.page, result.page_size, result.total_items);

    Ok(Json(ApiResponse::ok(page)))
}

/// GET /api/admin/users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    let user = state.admin_user_service.get(id).await?;
    Ok(Json(ApiResponse::ok(user.into())))
}

/// POST /api/admin/users
pub async fn create_user(
    State(state): State<AppState>,
    _admin: AdminUser,
    Json(req): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<ApiResponse<UserResponse>>), ApiError> {
    check(&req)?;

    let user = state
        .admin_user_service
        .create(NewUser {
            username: req.username,
            email: req.email,
            password: req.password,
            display_name: req.display_name,
            role: req.role,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(user.into()))))
}

/// PUT /api/admin/users/{id}/role
pub async fn change_role(
    State(state): State<AppState>,
    admin: AdminUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateUserRoleRequest>,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    let user = state
        .admin_user_service
        .update_role(&admin, id, req.role)
        .await?;
    Ok(Json(ApiResponse::ok(user.into())))
}

/// PUT /api/admin/users/{id}/status
pub async fn change_status(
    State(state): State<AppState>,
    admin: AdminUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateUserStatusRequest>,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    let user = state
        .admin_user_service
        .update_status(&admin, id, req.status)
        .await?;
    Ok(Json(ApiResponse::ok(user.into())))
}

/// DELETE /api/admin/users/{id}
pub async fn delete_user(
    State(state): State<AppState>,
    admin: AdminUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.admin_user_service.delete(&admin, id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "User deleted".to_string(),
    })))
}
