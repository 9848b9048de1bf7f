//! User service
//!
//! Profiles, profile edits, user search and per-author post listings.

use qna_core::entities::{Profile, User};
use qna_core::value_objects::PostKind;
use qna_core::DomainError;
use tracing::{info, instrument};

use crate::dto::{
    PostResponse, ProfileResponse, SearchResponse, SplitPostsResponse, UpdateProfileRequest,
    UserResponse,
};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    async fn require_user(&self, user_id: &str) -> ServiceResult<User> {
        Ok(self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| DomainError::UserNotFound(user_id.to_string()))?)
    }

    /// Public profile of `user_id` with follow counts
    #[instrument(skip(self))]
    pub async fn profile(&self, user_id: &str) -> ServiceResult<ProfileResponse> {
        let user = self.require_user(user_id).await?;
        let (follower_count, following_count) = self.ctx.follow_repo().counts(user_id).await?;

        Ok(Profile {
            user,
            follower_count,
            following_count,
        }
        .into())
    }

    /// Overwrite the caller's display name and country
    #[instrument(skip(self, request))]
    pub async fn update_profile(
        &self,
        user_id: &str,
        request: UpdateProfileRequest,
    ) -> ServiceResult<UserResponse> {
        let mut user = self.require_user(user_id).await?;
        user.set_profile(request.username, request.country);
        user.validate()?;

        self.ctx
            .user_repo()
            .update_profile(&user.id, &user.name, &user.country)
            .await?;

        info!(user_id = %user_id, "Profile updated");

        Ok(UserResponse::from(&user))
    }

    /// Every user (optionally filtered by `query`) with the viewer's follow state
    #[instrument(skip(self))]
    pub async fn search(&self, viewer: &str, query: Option<&str>) -> ServiceResult<SearchResponse> {
        let query = query.map(str::trim).filter(|q| !q.is_empty());
        let hits = self
            .ctx
            .user_repo()
            .search_with_follow_state(viewer, query)
            .await?;

        Ok(SearchResponse {
            user_list: hits.into_iter().map(Into::into).collect(),
        })
    }

    /// Plain listing of everything `author` has posted, split by kind
    #[instrument(skip(self))]
    pub async fn posts_by_author(
        &self,
        author: &str,
    ) -> ServiceResult<SplitPostsResponse<PostResponse>> {
        self.require_user(author).await?;

        let repo = self.ctx.post_repo();
        let qna = repo.list(PostKind::Qna, Some(author)).await?;
        let ox = repo.list(PostKind::Ox, Some(author)).await?;

        Ok(SplitPostsResponse {
            qna: qna.into_iter().map(Into::into).collect(),
            ox: ox.into_iter().map(Into::into).collect(),
        })
    }
}
