//! Follow handlers

use axum::{extract::State, Json};
use qna_service::dto::{FollowListResponse, FollowToggleResponse};
use qna_service::FollowService;

use crate::extractors::{ApiPath, AuthUser};
use crate::response::ApiResult;
use crate::state::AppState;

/// Follow or unfollow a user
///
/// POST /follow/{target_user}
pub async fn toggle_follow(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(target): ApiPath<String>,
) -> ApiResult<Json<FollowToggleResponse>> {
    let service = FollowService::new(state.service_context());
    Ok(Json(service.toggle(&auth.user_id, &target).await?))
}

/// Accounts a user follows
///
/// GET /follow/following/{user_id}
pub async fn get_following(
    State(state): State<AppState>,
    ApiPath(user_id): ApiPath<String>,
) -> ApiResult<Json<FollowListResponse>> {
    let service = FollowService::new(state.service_context());
    Ok(Json(service.following(&user_id).await?))
}

/// Accounts following a user
///
/// GET /follow/follower/{user_id}
pub async fn get_followers(
    State(state): State<AppState>,
    ApiPath(user_id): ApiPath<String>,
) -> ApiResult<Json<FollowListResponse>> {
    let service = FollowService::new(state.service_context());
    Ok(Json(service.followers(&user_id).await?))
}
