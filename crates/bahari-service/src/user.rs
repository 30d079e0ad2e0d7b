//! Administrative user management.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use bahari_auth::password::{PasswordHasher, PasswordValidator};
use bahari_core::error::AppError;
use bahari_core::result::AppResult;
use bahari_core::types::pagination::{PageRequest, PageResponse};
use bahari_database::repositories::user::UserRepository;
use bahari_entity::user::{CreateUser, User, UserRole, UserStatus};

use crate::context::RequestContext;

/// Data for creating a panel user.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password: String,
    pub display_name: Option<String>,
    pub role: UserRole,
}

/// Handles admin-only user management.
#[derive(Debug, Clone)]
pub struct AdminUserService {
    user_repo: Arc<UserRepository>,
    hasher: Arc<PasswordHasher>,
    validator: Arc<PasswordValidator>,
}

impl AdminUserService {
    /// Creates a new admin user service.
    pub fn new(
        user_repo: Arc<UserRepository>,
        hasher: Arc<PasswordHasher>,
        validator: Arc<PasswordValidator>,
    ) -> Self {
        Self {
            user_repo,
            hasher,
            validator,
        }
    }

    /// List users.
    pub async fn list(&self, page: &PageRequest) -> AppResult<PageResponse<User>> {
        self.user_repo.find_all(page).await
    }

    /// A single user.
    pub async fn get(&self, id: Uuid) -> AppResult<User> {
        self.user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("User {id} not found")))
    }

    /// Create a panel user with a validated, hashed password.
    pub async fn create(&self, data: NewUser) -> AppResult<User> {
        if !data.email.contains('@') {
            return Err(AppError::validation("Invalid email address"));
        }
        self.validator.validate(&data.password)?;
        let password_hash = self.hasher.hash_password(&data.password)?;

        let user = self
            .user_repo
            .create(&CreateUser {
                username: data.username,
                email: data.email,
                password_hash,
                display_name: data.display_name,
                role: data.role,
            })
            .await?;

        info!(user_id = %user.id, username = %user.username, role = %user.role, "User created");
        Ok(user)
    }

    /// Change a user's role. Admins cannot demote themselves.
    pub async fn update_role(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        role: UserRole,
    ) -> AppResult<User> {
        if ctx.user_id == id && role != UserRole::Admin {
            return Err(AppError::conflict("You cannot remove your own admin role"));
        }
        let user = self.user_repo.update_role(id, role).await?;
        info!(user_id = %id, role = %role, "User role changed");
        Ok(user)
    }

    /// Enable or disable a user. Admins cannot disable themselves.
    pub async fn update_status(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        status: UserStatus,
    ) -> AppResult<User> {
        if ctx.user_id == id && status == UserStatus::Disabled {
            return Err(AppError::conflict("You cannot disable your own account"));
        }
        let user = self.user_repo.update_status(id, status).await?;
        info!(user_id = %id, status = ?status, "User status changed");
        Ok(user)
    }

    /// Delete a user. Admins cannot delete themselves.
    pub async fn delete(&self, ctx: &RequestContext, id: Uuid) -> AppResult<()> {
        if ctx.user_id == id {
            return Err(AppError::conflict("You cannot delete your own account"));
        }
        if !self.user_repo.delete(id).await? {
            return Err(AppError::not_found(format!("User {id} not found")));
        }
        info!(user_id = %id, "User deleted");
        Ok(())
    }
}
