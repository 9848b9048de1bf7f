//! User search handler

use axum::{extract::State, Json};
use qna_service::dto::{SearchQuery, SearchResponse};
use qna_service::UserService;

use crate::extractors::{ApiQuery, AuthUser};
use crate::response::ApiResult;
use crate::state::AppState;

/// List users with the caller's follow state
///
/// GET /searching?q=
pub async fn search_users(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiQuery(query): ApiQuery<SearchQuery>,
) -> ApiResult<Json<SearchResponse>> {
    let service = UserService::new(state.service_context());
    Ok(Json(service.search(&auth.user_id, query.q.as_deref()).await?))
}
