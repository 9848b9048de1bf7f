//! Upload service
//!
//! Stores raw file bodies in the configured object store.

use qna_common::AppError;
use tracing::{info, instrument};

use crate::dto::UploadResponse;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Upload service
pub struct UploadService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UploadService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Store `bytes` and return the public URL
    #[instrument(skip(self, bytes), fields(size = bytes.len()))]
    pub async fn upload(
        &self,
        user_id: &str,
        file_name: &str,
        bytes: &[u8],
    ) -> ServiceResult<UploadResponse> {
        if bytes.is_empty() {
            return Err(AppError::validation("file body is empty").into());
        }

        let url = self.ctx.object_store().upload(bytes, file_name).await?;
        info!(user_id = %user_id, url = %url, "File uploaded");

        Ok(UploadResponse {
            message: "Successfully Uploaded".to_string(),
            url,
        })
    }
}
