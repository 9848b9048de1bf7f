//! Feed service
//!
//! Composes posts with the viewer's like/vote marks and everyone's like
//! counts. Every read goes through one feed query per post kind; only the
//! scope changes.

use qna_core::traits::FeedScope;
use qna_core::value_objects::{PostKind, PostRef};
use qna_core::DomainError;
use tracing::instrument;

use crate::dto::{FeedEntryResponse, QnaDetailResponse, SplitPostsResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Feed service
pub struct FeedService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> FeedService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    async fn entries(
        &self,
        kind: PostKind,
        viewer: Option<&str>,
        scope: &FeedScope,
    ) -> ServiceResult<Vec<FeedEntryResponse>> {
        let entries = self.ctx.feed_repo().entries(kind, viewer, scope).await?;
        Ok(entries.into_iter().map(Into::into).collect())
    }

    async fn single(
        &self,
        post: PostRef,
        viewer: Option<&str>,
    ) -> ServiceResult<FeedEntryResponse> {
        self.entries(post.kind, viewer, &FeedScope::Single(post.id))
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| DomainError::PostNotFound(post).into())
    }

    /// All posts of `kind`, newest first, optionally from one author
    #[instrument(skip(self))]
    pub async fn list(
        &self,
        kind: PostKind,
        viewer: Option<&str>,
        author: Option<&str>,
    ) -> ServiceResult<Vec<FeedEntryResponse>> {
        let scope = FeedScope::All {
            author: author.map(ToString::to_string),
        };
        self.entries(kind, viewer, &scope).await
    }

    /// Posts of `kind` by accounts the viewer follows
    #[instrument(skip(self))]
    pub async fn following(
        &self,
        kind: PostKind,
        viewer: &str,
    ) -> ServiceResult<Vec<FeedEntryResponse>> {
        self.entries(kind, Some(viewer), &FeedScope::Following).await
    }

    /// One Q&A post with its comment thread
    #[instrument(skip(self))]
    pub async fn qna_detail(
        &self,
        post_id: i64,
        viewer: Option<&str>,
    ) -> ServiceResult<QnaDetailResponse> {
        let post = self.single(PostRef::qna(post_id), viewer).await?;
        let comments = self.ctx.comment_repo().list_by_post(post_id).await?;

        Ok(QnaDetailResponse {
            post,
            comments: comments.into_iter().map(Into::into).collect(),
        })
    }

    /// One O/X poll
    #[instrument(skip(self))]
    pub async fn ox_detail(
        &self,
        post_id: i64,
        viewer: Option<&str>,
    ) -> ServiceResult<FeedEntryResponse> {
        self.single(PostRef::ox(post_id), viewer).await
    }

    /// Posts bookmarked by `target`, split by kind
    #[instrument(skip(self))]
    pub async fn bookmarks_of(
        &self,
        target: &str,
        viewer: Option<&str>,
    ) -> ServiceResult<SplitPostsResponse<FeedEntryResponse>> {
        if !self.ctx.user_repo().exists(target).await? {
            return Err(DomainError::UserNotFound(target.to_string()).into());
        }

        let scope = FeedScope::BookmarkedBy(target.to_string());
        Ok(SplitPostsResponse {
            qna: self.entries(PostKind::Qna, viewer, &scope).await?,
            ox: self.entries(PostKind::Ox, viewer, &scope).await?,
        })
    }
}
