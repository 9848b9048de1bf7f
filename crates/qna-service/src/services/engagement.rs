//! Engagement service
//!
//! Likes, bookmarks, O/X votes and Q&A comments.

use qna_core::entities::validate_content;
use qna_core::value_objects::{Mark, PostKind, PostRef, Toggled};
use qna_core::DomainError;
use tracing::{info, instrument};

use crate::dto::{
    BookmarkToggleResponse, CommentResponse, LikeToggleResponse, MarkRequest, VoteResponse,
};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Engagement service
pub struct EngagementService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> EngagementService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    async fn require_post(&self, post: PostRef) -> ServiceResult<()> {
        if self.ctx.post_repo().exists(post).await? {
            Ok(())
        } else {
            Err(DomainError::PostNotFound(post).into())
        }
    }

    async fn toggle_mark(&self, mark: Mark, user_id: &str, post: PostRef) -> ServiceResult<Toggled> {
        self.require_post(post).await?;
        let outcome = self.ctx.mark_repo().toggle(mark, user_id, post).await?;
        info!(%mark, %post, user_id = %user_id, ?outcome, "Mark toggled");
        Ok(outcome)
    }

    /// Like the post, or remove an existing like
    #[instrument(skip(self, request), fields(post_id = request.post_id, post_type = %request.post_type))]
    pub async fn toggle_like(
        &self,
        user_id: &str,
        request: MarkRequest,
    ) -> ServiceResult<LikeToggleResponse> {
        let post = PostRef::new(request.post_type, request.post_id);
        let outcome = self.toggle_mark(Mark::Like, user_id, post).await?;

        let message = match outcome {
            Toggled::On => "Liked successfully",
            Toggled::Off => "Like removed successfully",
        };
        Ok(LikeToggleResponse {
            message: message.to_string(),
            liked: outcome.is_on(),
        })
    }

    /// Bookmark the post, or remove an existing bookmark
    #[instrument(skip(self, request), fields(post_id = request.post_id, post_type = %request.post_type))]
    pub async fn toggle_bookmark(
        &self,
        user_id: &str,
        request: MarkRequest,
    ) -> ServiceResult<BookmarkToggleResponse> {
        let post = PostRef::new(request.post_type, request.post_id);
        let outcome = self.toggle_mark(Mark::Bookmark, user_id, post).await?;

        let message = match outcome {
            Toggled::On => "Bookmarked successfully",
            Toggled::Off => "Bookmarked contents removed successfully",
        };
        Ok(BookmarkToggleResponse {
            message: message.to_string(),
            bookmarked: outcome.is_on(),
        })
    }

    /// Cast a vote on an O/X poll, or retract the caller's existing vote
    ///
    /// A second call always retracts, whatever `vote` says.
    #[instrument(skip(self))]
    pub async fn vote(&self, user_id: &str, post_id: i64, vote: bool) -> ServiceResult<VoteResponse> {
        let tally = self.ctx.vote_repo().cast_or_retract(user_id, post_id, vote).await?;
        info!(
            post_id,
            user_id = %user_id,
            voted = tally.voted,
            o_count = tally.o_count,
            x_count = tally.x_count,
            "Vote recorded"
        );
        Ok(tally.into())
    }

    /// Reply to a Q&A post
    ///
    /// Comments share the Q&A content bound.
    #[instrument(skip(self, content))]
    pub async fn add_comment(
        &self,
        post_id: i64,
        author: &str,
        content: &str,
    ) -> ServiceResult<CommentResponse> {
        validate_content(PostKind::Qna, content)?;
        self.require_post(PostRef::qna(post_id)).await?;
        let comment = self.ctx.comment_repo().create(post_id, author, content).await?;
        info!(post_id, comment_id = comment.id, author = %author, "Comment added");
        Ok(comment.into())
    }

    /// Comment thread of a Q&A post, oldest first
    #[instrument(skip(self))]
    pub async fn list_comments(&self, post_id: i64) -> ServiceResult<Vec<CommentResponse>> {
        self.require_post(PostRef::qna(post_id)).await?;
        let comments = self.ctx.comment_repo().list_by_post(post_id).await?;
        Ok(comments.into_iter().map(Into::into).collect())
    }
}
