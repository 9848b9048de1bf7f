//! Follow service
//!
//! Toggles follow edges and lists both directions of the graph.

use qna_core::value_objects::Toggled;
use qna_core::DomainError;
use tracing::{info, instrument};

use crate::dto::{FollowListResponse, FollowToggleResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Follow service
pub struct FollowService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> FollowService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Follow `target` if the caller does not yet, unfollow otherwise
    #[instrument(skip(self))]
    pub async fn toggle(&self, follower: &str, target: &str) -> ServiceResult<FollowToggleResponse> {
        if follower == target {
            return Err(DomainError::SelfFollow.into());
        }
        if !self.ctx.user_repo().exists(target).await? {
            return Err(DomainError::UserNotFound(target.to_string()).into());
        }

        let outcome = self.ctx.follow_repo().toggle(follower, target).await?;
        info!(follower = %follower, following = %target, ?outcome, "Follow toggled");

        let message = match outcome {
            Toggled::On => "Successfully Followed",
            Toggled::Off => "Successfully Unfollowed",
        };

        Ok(FollowToggleResponse {
            message: message.to_string(),
            following: outcome.is_on(),
        })
    }

    /// Accounts `user_id` follows
    #[instrument(skip(self))]
    pub async fn following(&self, user_id: &str) -> ServiceResult<FollowListResponse> {
        let users = self.ctx.follow_repo().list_following(user_id).await?;
        Ok(FollowListResponse {
            result: users.into_iter().map(Into::into).collect(),
        })
    }

    /// Accounts following `user_id`
    #[instrument(skip(self))]
    pub async fn followers(&self, user_id: &str) -> ServiceResult<FollowListResponse> {
        let users = self.ctx.follow_repo().list_followers(user_id).await?;
        Ok(FollowListResponse {
            result: users.into_iter().map(Into::into).collect(),
        })
    }
}
