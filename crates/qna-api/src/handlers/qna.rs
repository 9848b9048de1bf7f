//! Q&A post handlers
//!
//! Writes require a bearer token; reads accept an optional one so the
//! feed can report the viewer's likes.

use axum::{extract::State, Json};
use qna_core::{PostKind, PostRef};
use qna_service::dto::{
    AuthorQuery, CommentResponse, CreateCommentRequest, FeedEntryResponse, MessageResponse,
    PostContentRequest, PostResponse, QnaDetailResponse,
};
use qna_service::{EngagementService, FeedService, PostService};

use crate::extractors::{ApiPath, ApiQuery, AuthUser, OptionalAuthUser, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

/// Publish a Q&A post
///
/// POST /qna
pub async fn create_post(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<PostContentRequest>,
) -> ApiResult<Json<PostResponse>> {
    let service = PostService::new(state.service_context());
    let post = service
        .create(PostKind::Qna, &auth.user_id, request.content)
        .await?;
    Ok(Json(post))
}

/// Q&A feed, newest first
///
/// GET /qna?author=
pub async fn list_posts(
    State(state): State<AppState>,
    viewer: OptionalAuthUser,
    ApiQuery(query): ApiQuery<AuthorQuery>,
) -> ApiResult<Json<Vec<FeedEntryResponse>>> {
    let service = FeedService::new(state.service_context());
    let entries = service
        .list(PostKind::Qna, viewer.user_id(), query.author.as_deref())
        .await?;
    Ok(Json(entries))
}

/// Q&A posts from accounts the caller follows
///
/// GET /qna/following
pub async fn following_feed(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<FeedEntryResponse>>> {
    let service = FeedService::new(state.service_context());
    Ok(Json(service.following(PostKind::Qna, &auth.user_id).await?))
}

/// One Q&A post with its comments
///
/// GET /qna/{id}
pub async fn get_post(
    State(state): State<AppState>,
    viewer: OptionalAuthUser,
    ApiPath(post_id): ApiPath<i64>,
) -> ApiResult<Json<QnaDetailResponse>> {
    let service = FeedService::new(state.service_context());
    Ok(Json(service.qna_detail(post_id, viewer.user_id()).await?))
}

/// Edit a Q&A post the caller wrote
///
/// PUT /qna/{id}
pub async fn update_post(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(post_id): ApiPath<i64>,
    ValidatedJson(request): ValidatedJson<PostContentRequest>,
) -> ApiResult<Json<PostResponse>> {
    let service = PostService::new(state.service_context());
    let post = service
        .update(PostRef::qna(post_id), &auth.user_id, request.content)
        .await?;
    Ok(Json(post))
}

/// Delete a Q&A post the caller wrote
///
/// DELETE /qna/{id}
pub async fn delete_post(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(post_id): ApiPath<i64>,
) -> ApiResult<Json<MessageResponse>> {
    let service = PostService::new(state.service_context());
    Ok(Json(service.delete(PostRef::qna(post_id), &auth.user_id).await?))
}

/// Comment thread, oldest first
///
/// GET /qna/{id}/comments
pub async fn list_comments(
    State(state): State<AppState>,
    ApiPath(post_id): ApiPath<i64>,
) -> ApiResult<Json<Vec<CommentResponse>>> {
    let service = EngagementService::new(state.service_context());
    Ok(Json(service.list_comments(post_id).await?))
}

/// Reply to a Q&A post
///
/// POST /qna/{id}/comments
pub async fn add_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(post_id): ApiPath<i64>,
    ValidatedJson(request): ValidatedJson<CreateCommentRequest>,
) -> ApiResult<Json<CommentResponse>> {
    let service = EngagementService::new(state.service_context());
    let comment = service
        .add_comment(post_id, &auth.user_id, &request.content)
        .await?;
    Ok(Json(comment))
}
