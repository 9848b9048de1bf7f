//! Profile handlers

use axum::{extract::State, Json};
use qna_service::dto::{ProfileResponse, UpdateProfileRequest, UserResponse};
use qna_service::UserService;

use crate::extractors::{ApiPath, AuthUser, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

/// Get a user's profile
///
/// GET /profile/{user_id}
pub async fn get_profile(
    State(state): State<AppState>,
    ApiPath(user_id): ApiPath<String>,
) -> ApiResult<Json<ProfileResponse>> {
    let service = UserService::new(state.service_context());
    Ok(Json(service.profile(&user_id).await?))
}

/// Update the caller's name and country
///
/// PUT /profile
pub async fn update_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<UpdateProfileRequest>,
) -> ApiResult<Json<UserResponse>> {
    let service = UserService::new(state.service_context());
    Ok(Json(service.update_profile(&auth.user_id, request).await?))
}
