//! Authentication service
//!
//! Handles signup, login, token refresh, logout and password changes. Every
//! issued token pair belongs to a server-side session so that refresh
//! tokens can be rotated and revoked.

use qna_common::auth::{hash_password, validate_password_length, verify_password};
use qna_common::{AppError, JwtService};
use qna_core::entities::User;
use qna_core::DomainError;
use tracing::{info, instrument, warn};

use crate::dto::{
    AuthResponse, ChangePasswordRequest, ExistsResponse, LoginRequest, LogoutRequest,
    MessageResponse, RefreshTokenRequest, SignupRequest, UserResponse,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new account and open its first session
    #[instrument(skip(self, request), fields(user_id = %request.user_id))]
    pub async fn signup(&self, request: SignupRequest) -> ServiceResult<AuthResponse> {
        let user = User::new(request.user_id, request.username, request.country);
        user.validate()?;
        validate_password_length(&request.password)?;

        if self.ctx.user_repo().exists(&user.id).await? {
            return Err(DomainError::UserIdTaken.into());
        }

        let password_hash = hash_password(&request.password)?;

        // A concurrent signup with the same id surfaces as UserIdTaken here
        self.ctx.user_repo().create(&user, &password_hash).await?;

        info!(user_id = %user.id, "User registered successfully");

        self.issue("Signup Successful", &user).await
    }

    /// Login with user id and password
    #[instrument(skip(self, request), fields(user_id = %request.user_id))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<AuthResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_id(&request.user_id)
            .await?
            .ok_or_else(|| {
                warn!(user_id = %request.user_id, "Login failed: user not found");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        let password_hash = self
            .ctx
            .user_repo()
            .get_password_hash(&user.id)
            .await?
            .ok_or_else(|| {
                warn!(user_id = %user.id, "Login failed: no password hash");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        if !verify_password(&request.password, &password_hash)? {
            warn!(user_id = %user.id, "Login failed: invalid password");
            return Err(AppError::InvalidCredentials.into());
        }

        info!(user_id = %user.id, "User logged in successfully");

        self.issue("Login Successful", &user).await
    }

    /// Exchange a refresh token for a new token pair
    ///
    /// The presented session is revoked and a fresh one opened, so each
    /// refresh token works once.
    #[instrument(skip(self, request))]
    pub async fn refresh(&self, request: RefreshTokenRequest) -> ServiceResult<AuthResponse> {
        let claims = self
            .ctx
            .jwt_service()
            .validate_refresh_token(&request.refresh_token)?;
        let session_id = claims.session()?;

        let session = self
            .ctx
            .session_repo()
            .find(session_id)
            .await?
            .filter(|s| s.user_id == claims.user_id() && s.is_active_at(chrono::Utc::now()))
            .ok_or_else(|| {
                warn!(user_id = %claims.user_id(), "Refresh rejected: session inactive");
                ServiceError::App(AppError::InvalidToken)
            })?;

        // Losing the race against a concurrent refresh of the same token
        if !self.ctx.session_repo().revoke(&session.id).await? {
            return Err(AppError::InvalidToken.into());
        }

        let user = self
            .ctx
            .user_repo()
            .find_by_id(&session.user_id)
            .await?
            .ok_or(ServiceError::App(AppError::InvalidToken))?;

        info!(user_id = %user.id, "Session rotated");

        self.issue("Token refreshed", &user).await
    }

    /// Revoke the caller's current session, or the one named by the refresh token
    #[instrument(skip(self, request))]
    pub async fn logout(
        &self,
        user_id: &str,
        session_id: Option<&str>,
        request: LogoutRequest,
    ) -> ServiceResult<MessageResponse> {
        let target = match request.refresh_token.as_deref() {
            Some(token) => {
                let claims = self.ctx.jwt_service().validate_refresh_token(token)?;
                if claims.user_id() != user_id {
                    return Err(ServiceError::permission_denied(
                        "revoke another user's session",
                    ));
                }
                Some(claims.session()?.to_string())
            }
            None => session_id.map(ToString::to_string),
        };

        if let Some(session_id) = target {
            let revoked = self.ctx.session_repo().revoke(&session_id).await?;
            info!(user_id = %user_id, revoked, "User logged out");
        }

        Ok(MessageResponse::new("Logout Successful"))
    }

    /// Change the caller's password after checking the current one
    ///
    /// All sessions of the account are revoked afterwards.
    #[instrument(skip(self, request))]
    pub async fn change_password(
        &self,
        user_id: &str,
        request: ChangePasswordRequest,
    ) -> ServiceResult<MessageResponse> {
        validate_password_length(&request.new_password)?;

        let current_hash = self
            .ctx
            .user_repo()
            .get_password_hash(user_id)
            .await?
            .ok_or_else(|| DomainError::UserNotFound(user_id.to_string()))?;

        if !verify_password(&request.current_password, &current_hash)? {
            warn!(user_id = %user_id, "Password change rejected: wrong current password");
            return Err(AppError::InvalidCredentials.into());
        }

        let new_hash = hash_password(&request.new_password)?;
        self.ctx.user_repo().update_password(user_id, &new_hash).await?;
        let revoked = self.ctx.session_repo().revoke_all_for_user(user_id).await?;

        info!(user_id = %user_id, revoked, "Password changed");

        Ok(MessageResponse::new("Password changed"))
    }

    /// Whether a user id is already registered
    #[instrument(skip(self))]
    pub async fn user_exists(&self, user_id: &str) -> ServiceResult<ExistsResponse> {
        let exists = self.ctx.user_repo().exists(user_id).await?;
        Ok(ExistsResponse { exists })
    }

    /// Open a session for `user` and sign its token pair
    async fn issue(&self, message: &str, user: &User) -> ServiceResult<AuthResponse> {
        let jwt = self.ctx.jwt_service();
        let session_id = JwtService::new_session_id();

        self.ctx
            .session_repo()
            .create(&session_id, &user.id, jwt.refresh_expires_at())
            .await?;

        let pair = jwt.generate_token_pair(&user.id, &session_id)?;

        Ok(AuthResponse::new(
            message,
            pair.access_token,
            pair.refresh_token,
            pair.expires_in,
            UserResponse::from(user),
        ))
    }
}
