//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::entities::{
    Comment, FeedEntry, NewPost, Post, Session, User, UserSearchHit, UserSummary,
};
use crate::error::DomainError;
use crate::value_objects::{Mark, PostKind, PostRef, Toggled, VoteTally};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: &str) -> RepoResult<Option<User>>;

    /// Check if a user id is registered
    async fn exists(&self, id: &str) -> RepoResult<bool>;

    /// Create a new user, failing with `UserIdTaken` on a duplicate id
    async fn create(&self, user: &User, password_hash: &str) -> RepoResult<()>;

    /// Overwrite name and country
    async fn update_profile(&self, id: &str, name: &str, country: &str) -> RepoResult<()>;

    /// Get password hash for authentication
    async fn get_password_hash(&self, id: &str) -> RepoResult<Option<String>>;

    /// Update password hash
    async fn update_password(&self, id: &str, password_hash: &str) -> RepoResult<()>;

    /// All users (optionally filtered by id/name substring) with the viewer's follow state
    async fn search_with_follow_state(
        &self,
        viewer: &str,
        query: Option<&str>,
    ) -> RepoResult<Vec<UserSearchHit>>;
}

// ============================================================================
// Follow Repository
// ============================================================================

#[async_trait]
pub trait FollowRepository: Send + Sync {
    /// Check whether `follower` follows `following`
    async fn is_following(&self, follower: &str, following: &str) -> RepoResult<bool>;

    /// Flip the edge `follower -> following`
    async fn toggle(&self, follower: &str, following: &str) -> RepoResult<Toggled>;

    /// Users that `user_id` follows
    async fn list_following(&self, user_id: &str) -> RepoResult<Vec<UserSummary>>;

    /// Users following `user_id`
    async fn list_followers(&self, user_id: &str) -> RepoResult<Vec<UserSummary>>;

    /// `(follower_count, following_count)` for a user
    async fn counts(&self, user_id: &str) -> RepoResult<(i64, i64)>;
}

// ============================================================================
// Post Repository
// ============================================================================

#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Insert a post and return it with its assigned id
    async fn create(&self, post: &NewPost) -> RepoResult<Post>;

    /// Find post by kind and ID
    async fn find_by_id(&self, post: PostRef) -> RepoResult<Option<Post>>;

    /// Check if a post exists
    async fn exists(&self, post: PostRef) -> RepoResult<bool>;

    /// All posts of a kind, newest first, optionally restricted to one author
    async fn list(&self, kind: PostKind, author: Option<&str>) -> RepoResult<Vec<Post>>;

    /// Posts of a kind written by anyone `user_id` follows
    async fn list_by_followees(&self, kind: PostKind, user_id: &str) -> RepoResult<Vec<Post>>;

    /// Replace the content of a post
    async fn update_content(&self, post: PostRef, content: &str) -> RepoResult<()>;

    /// Delete a post together with its like and bookmark marks
    async fn delete(&self, post: PostRef) -> RepoResult<()>;
}

// ============================================================================
// Mark Repository (likes, bookmarks)
// ============================================================================

#[async_trait]
pub trait MarkRepository: Send + Sync {
    /// Flip a mark for `(user, post)`
    async fn toggle(&self, mark: Mark, user_id: &str, post: PostRef) -> RepoResult<Toggled>;

    /// Check whether the mark is present
    async fn is_marked(&self, mark: Mark, user_id: &str, post: PostRef) -> RepoResult<bool>;

    /// Number of marks of all users on a post
    async fn count(&self, mark: Mark, post: PostRef) -> RepoResult<i64>;
}

// ============================================================================
// Vote Repository
// ============================================================================

#[async_trait]
pub trait VoteRepository: Send + Sync {
    /// Cast a vote when none is recorded, otherwise retract the stored one.
    ///
    /// Fails with `PostNotFound` when the poll does not exist.
    async fn cast_or_retract(&self, user_id: &str, post_id: i64, vote: bool)
        -> RepoResult<VoteTally>;
}

// ============================================================================
// Comment Repository
// ============================================================================

#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Insert a comment on a Q&A post
    async fn create(&self, post_id: i64, author: &str, content: &str) -> RepoResult<Comment>;

    /// Comments of a post, oldest first
    async fn list_by_post(&self, post_id: i64) -> RepoResult<Vec<Comment>>;
}

// ============================================================================
// Feed Repository
// ============================================================================

/// Which posts a feed query covers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedScope {
    /// Every post, optionally restricted to one author
    All { author: Option<String> },
    /// Posts by accounts the viewer follows
    Following,
    /// Posts bookmarked by the given user
    BookmarkedBy(String),
    /// A single post
    Single(i64),
}

#[async_trait]
pub trait FeedRepository: Send + Sync {
    /// Posts of `kind` in `scope`, enriched with `viewer`'s marks, newest first
    async fn entries(
        &self,
        kind: PostKind,
        viewer: Option<&str>,
        scope: &FeedScope,
    ) -> RepoResult<Vec<FeedEntry>>;
}

// ============================================================================
// Session Repository
// ============================================================================

#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Open a session
    async fn create(
        &self,
        session_id: &str,
        user_id: &str,
        expires_at: DateTime<Utc>,
    ) -> RepoResult<()>;

    /// Find a session by id
    async fn find(&self, session_id: &str) -> RepoResult<Option<Session>>;

    /// Revoke one session; returns false when it was unknown or already revoked
    async fn revoke(&self, session_id: &str) -> RepoResult<bool>;

    /// Revoke every open session of a user
    async fn revoke_all_for_user(&self, user_id: &str) -> RepoResult<u64>;
}
