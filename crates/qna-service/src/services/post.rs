//! Post service
//!
//! Create, read, edit and delete Q&A posts and O/X polls. Edits and deletes
//! are limited to the post's author.

use qna_core::entities::{validate_content, NewPost, Post};
use qna_core::value_objects::{PostKind, PostRef};
use qna_core::DomainError;
use tracing::{info, instrument};

use crate::dto::{MessageResponse, PostResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Post service
pub struct PostService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PostService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    async fn require_post(&self, post: PostRef) -> ServiceResult<Post> {
        Ok(self
            .ctx
            .post_repo()
            .find_by_id(post)
            .await?
            .ok_or(DomainError::PostNotFound(post))?)
    }

    /// Publish a post written by `author`
    #[instrument(skip(self, content))]
    pub async fn create(
        &self,
        kind: PostKind,
        author: &str,
        content: String,
    ) -> ServiceResult<PostResponse> {
        let new_post = NewPost::new(kind, author, content);
        new_post.validate()?;

        let post = self.ctx.post_repo().create(&new_post).await?;
        info!(post = %post.post_ref(), author = %author, "Post created");

        Ok(post.into())
    }

    /// Load a single post
    #[instrument(skip(self, post), fields(post = %post))]
    pub async fn get(&self, post: PostRef) -> ServiceResult<PostResponse> {
        Ok(self.require_post(post).await?.into())
    }

    /// Replace the content of a post the caller wrote
    #[instrument(skip(self, post, content), fields(post = %post))]
    pub async fn update(
        &self,
        post: PostRef,
        acting_user: &str,
        content: String,
    ) -> ServiceResult<PostResponse> {
        validate_content(post.kind, &content)?;

        let stored = self.require_post(post).await?;
        stored.ensure_author(acting_user)?;

        self.ctx.post_repo().update_content(post, &content).await?;
        info!(post = %post, "Post updated");

        Ok(self.require_post(post).await?.into())
    }

    /// Delete a post the caller wrote, along with its marks and replies
    #[instrument(skip(self, post), fields(post = %post))]
    pub async fn delete(&self, post: PostRef, acting_user: &str) -> ServiceResult<MessageResponse> {
        let stored = self.require_post(post).await?;
        stored.ensure_author(acting_user)?;

        self.ctx.post_repo().delete(post).await?;
        info!(post = %post, "Post deleted");

        Ok(MessageResponse::new("Data deleted successfully"))
    }

    /// All posts of `kind`, optionally limited to one author
    #[instrument(skip(self))]
    pub async fn list(&self, kind: PostKind, author: Option<&str>) -> ServiceResult<Vec<PostResponse>> {
        let posts = self.ctx.post_repo().list(kind, author).await?;
        Ok(posts.into_iter().map(Into::into).collect())
    }

    /// Posts of `kind` written by accounts `user_id` follows
    #[instrument(skip(self))]
    pub async fn list_by_followees(
        &self,
        kind: PostKind,
        user_id: &str,
    ) -> ServiceResult<Vec<PostResponse>> {
        let posts = self.ctx.post_repo().list_by_followees(kind, user_id).await?;
        Ok(posts.into_iter().map(Into::into).collect())
    }
}
