//! Like and bookmark handlers

use axum::{extract::State, Json};
use qna_service::dto::{
    BookmarkToggleResponse, FeedEntryResponse, LikeToggleResponse, MarkRequest,
    SplitPostsResponse,
};
use qna_service::{EngagementService, FeedService};

use crate::extractors::{ApiPath, AuthUser, OptionalAuthUser, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

/// POST /like
pub async fn toggle_like(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<MarkRequest>,
) -> ApiResult<Json<LikeToggleResponse>> {
    let service = EngagementService::new(state.service_context());
    Ok(Json(service.toggle_like(&auth.user_id, request).await?))
}

/// POST /bookmark
pub async fn toggle_bookmark(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<MarkRequest>,
) -> ApiResult<Json<BookmarkToggleResponse>> {
    let service = EngagementService::new(state.service_context());
    Ok(Json(service.toggle_bookmark(&auth.user_id, request).await?))
}

/// Posts a user has bookmarked
///
/// GET /bookmark/{user_id}
pub async fn list_bookmarks(
    State(state): State<AppState>,
    viewer: OptionalAuthUser,
    ApiPath(user_id): ApiPath<String>,
) -> ApiResult<Json<SplitPostsResponse<FeedEntryResponse>>> {
    let service = FeedService::new(state.service_context());
    Ok(Json(service.bookmarks_of(&user_id, viewer.user_id()).await?))
}
