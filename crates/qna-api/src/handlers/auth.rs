//! Authentication handlers
//!
//! Endpoints for signup, login, logout, token refresh and password changes.

use axum::{extract::State, Json};
use qna_service::dto::{
    AuthResponse, ChangePasswordRequest, ExistsResponse, LoginRequest, LogoutRequest,
    MessageResponse, RefreshTokenRequest, SignupRequest,
};
use qna_service::AuthService;

use crate::extractors::{ApiPath, AuthUser, OptionalJson, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

/// Create an account
///
/// POST /auth/signup
pub async fn signup(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<SignupRequest>,
) -> ApiResult<Json<AuthResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.signup(request).await?;
    Ok(Json(response))
}

/// Login with user id and password
///
/// POST /auth/login
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> ApiResult<Json<AuthResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.login(request).await?;
    Ok(Json(response))
}

/// Refresh access token
///
/// POST /auth/refresh
pub async fn refresh_token(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<RefreshTokenRequest>,
) -> ApiResult<Json<AuthResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.refresh(request).await?;
    Ok(Json(response))
}

/// Logout the current session
///
/// POST /auth/logout
pub async fn logout(
    State(state): State<AppState>,
    auth: AuthUser,
    OptionalJson(request): OptionalJson<LogoutRequest>,
) -> ApiResult<Json<MessageResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service
        .logout(&auth.user_id, auth.session_id.as_deref(), request)
        .await?;
    Ok(Json(response))
}

/// Check whether a user id is taken
///
/// GET /auth/exists/{user_id}
pub async fn user_exists(
    State(state): State<AppState>,
    ApiPath(user_id): ApiPath<String>,
) -> ApiResult<Json<ExistsResponse>> {
    let service = AuthService::new(state.service_context());
    Ok(Json(service.user_exists(&user_id).await?))
}

/// Change the caller's password
///
/// PUT /auth/password
pub async fn change_password(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<ChangePasswordRequest>,
) -> ApiResult<Json<MessageResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.change_password(&auth.user_id, request).await?;
    Ok(Json(response))
}
