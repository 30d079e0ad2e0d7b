//! Admin panel authentication: login, token refresh, and profile lookup.

use std::sync::Arc;

use tracing::{info, warn};

use bahari_auth::jwt::{JwtDecoder, JwtEncoder, TokenPair};
use bahari_auth::password::PasswordHasher;
use bahari_core::error::AppError;
use bahari_core::result::AppResult;
use bahari_database::repositories::user::UserRepository;
use bahari_entity::user::User;

use crate::context::RequestContext;

/// Handles login and token lifecycle for panel users.
#[derive(Debug, Clone)]
pub struct AuthService {
    user_repo: Arc<UserRepository>,
    hasher: Arc<PasswordHasher>,
    encoder: Arc<JwtEncoder>,
    decoder: Arc<JwtDecoder>,
}

impl AuthService {
    /// Creates a new auth service.
    pub fn new(
        user_repo: Arc<UserRepository>,
        hasher: Arc<PasswordHasher>,
        encoder: Arc<JwtEncoder>,
        decoder: Arc<JwtDecoder>,
    ) -> Self {
        Self {
            user_repo,
            hasher,
            encoder,
            decoder,
        }
    }

    /// Authenticate by username or email and issue a token pair.
    ///
    /// Returns the same Unauthorized error for unknown accounts and wrong
    /// passwords.
    pub async fn login(&self, identifier: &str, password: &str) -> AppResult<(User, TokenPair)> {
        let user = match self.find_account(identifier).await? {
            Some(user) => user,
            None => {
                warn!(identifier, "Login attempt for unknown account");
                return Err(AppError::unauthorized("Invalid username or password"));
            }
        };

        if !user.can_login() {
            warn!(user_id = %user.id, "Login attempt for disabled account");
            return Err(AppError::forbidden("Account is disabled"));
        }

        let valid = self.hasher.verify_password(password, &user.password_hash)?;
        if !valid {
            warn!(user_id = %user.id, "Login attempt with wrong password");
            return Err(AppError::unauthorized("Invalid username or password"));
        }

        let tokens = self
            .encoder
            .generate_token_pair(user.id, user.role, &user.username)?;

        self.user_repo.update_last_login(user.id).await?;
        info!(user_id = %user.id, username = %user.username, "User logged in");

        Ok((user, tokens))
    }

    /// Exchange a valid refresh token for a fresh token pair.
    ///
    /// Re-reads the account so that a role change or a disable takes effect
    /// at the next refresh.
    pub async fn refresh(&self, refresh_token: &str) -> AppResult<(User, TokenPair)> {
        let claims = self.decoder.decode_refresh_token(refresh_token)?;

        let user = self
            .user_repo
            .find_by_id(claims.sub)
            .await?
            .ok_or_else(|| AppError::unauthorized("Account no longer exists"))?;

        if !user.can_login() {
            return Err(AppError::forbidden("Account is disabled"));
        }

        let tokens = self
            .encoder
            .generate_token_pair(user.id, user.role, &user.username)?;

        Ok((user, tokens))
    }

    /// The current user's profile.
    pub async fn me(&self, ctx: &RequestContext) -> AppResult<User> {
        self.user_repo
            .find_by_id(ctx.user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }

    async fn find_account(&self, identifier: &str) -> AppResult<Option<User>> {
        if let Some(user) = self.user_repo.find_by_username(identifier).await? {
            return Ok(Some(user));
        }
        if identifier.contains('@') {
            return self.user_repo.find_by_email(identifier).await;
        }
        Ok(None)
    }
}
