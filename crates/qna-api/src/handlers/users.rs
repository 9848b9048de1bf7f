//! Per-user listings

use axum::{extract::State, Json};
use qna_service::dto::{PostResponse, SplitPostsResponse};
use qna_service::UserService;

use crate::extractors::ApiPath;
use crate::response::ApiResult;
use crate::state::AppState;

/// Everything a user has posted
///
/// GET /users/{user_id}/posts
pub async fn get_user_posts(
    State(state): State<AppState>,
    ApiPath(user_id): ApiPath<String>,
) -> ApiResult<Json<SplitPostsResponse<PostResponse>>> {
    let service = UserService::new(state.service_context());
    Ok(Json(service.posts_by_author(&user_id).await?))
}
