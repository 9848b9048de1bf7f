//! File upload handler

use axum::{body::Bytes, extract::State, Json};
use qna_service::dto::UploadResponse;
use qna_service::UploadService;

use crate::extractors::{ApiPath, AuthUser};
use crate::response::ApiResult;
use crate::state::AppState;

/// Store the raw request body under a generated name
///
/// POST /uploads/{file_name}
pub async fn upload_file(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(file_name): ApiPath<String>,
    body: Bytes,
) -> ApiResult<Json<UploadResponse>> {
    let service = UploadService::new(state.service_context());
    let response = service.upload(&auth.user_id, &file_name, &body).await?;
    Ok(Json(response))
}
