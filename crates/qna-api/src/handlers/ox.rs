//! O/X poll handlers

use axum::{extract::State, Json};
use qna_core::{PostKind, PostRef};
use qna_service::dto::{
    AuthorQuery, FeedEntryResponse, MessageResponse, PostContentRequest, PostResponse,
    VoteRequest, VoteResponse,
};
use qna_service::{EngagementService, FeedService, PostService};

use crate::extractors::{ApiPath, ApiQuery, AuthUser, OptionalAuthUser, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

/// Publish a poll
///
/// POST /ox
pub async fn create_poll(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<PostContentRequest>,
) -> ApiResult<Json<PostResponse>> {
    let service = PostService::new(state.service_context());
    let post = service
        .create(PostKind::Ox, &auth.user_id, request.content)
        .await?;
    Ok(Json(post))
}

/// GET /ox?author=
pub async fn list_polls(
    State(state): State<AppState>,
    viewer: OptionalAuthUser,
    ApiQuery(query): ApiQuery<AuthorQuery>,
) -> ApiResult<Json<Vec<FeedEntryResponse>>> {
    let service = FeedService::new(state.service_context());
    let entries = service
        .list(PostKind::Ox, viewer.user_id(), query.author.as_deref())
        .await?;
    Ok(Json(entries))
}

/// GET /ox/following
pub async fn following_feed(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<FeedEntryResponse>>> {
    let service = FeedService::new(state.service_context());
    Ok(Json(service.following(PostKind::Ox, &auth.user_id).await?))
}

/// GET /ox/{id}
pub async fn get_poll(
    State(state): State<AppState>,
    viewer: OptionalAuthUser,
    ApiPath(post_id): ApiPath<i64>,
) -> ApiResult<Json<FeedEntryResponse>> {
    let service = FeedService::new(state.service_context());
    Ok(Json(service.ox_detail(post_id, viewer.user_id()).await?))
}

/// PUT /ox/{id}
pub async fn update_poll(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(post_id): ApiPath<i64>,
    ValidatedJson(request): ValidatedJson<PostContentRequest>,
) -> ApiResult<Json<PostResponse>> {
    let service = PostService::new(state.service_context());
    let post = service
        .update(PostRef::ox(post_id), &auth.user_id, request.content)
        .await?;
    Ok(Json(post))
}

/// DELETE /ox/{id}
pub async fn delete_poll(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(post_id): ApiPath<i64>,
) -> ApiResult<Json<MessageResponse>> {
    let service = PostService::new(state.service_context());
    Ok(Json(service.delete(PostRef::ox(post_id), &auth.user_id).await?))
}

/// Cast or retract the caller's vote
///
/// POST /ox/vote/{id}
pub async fn vote(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(post_id): ApiPath<i64>,
    ValidatedJson(request): ValidatedJson<VoteRequest>,
) -> ApiResult<Json<VoteResponse>> {
    let service = EngagementService::new(state.service_context());
    let tally = service.vote(&auth.user_id, post_id, request.vote).await?;
    Ok(Json(tally))
}
