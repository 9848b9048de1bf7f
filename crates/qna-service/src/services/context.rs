//! Service context - dependency container for services
//!
//! Holds all repositories, the JWT service and the object store needed by services.

use std::sync::Arc;

use qna_common::auth::JwtService;
use qna_common::ObjectStore;
use qna_core::traits::{
    CommentRepository, FeedRepository, FollowRepository, MarkRepository, PostRepository,
    SessionRepository, UserRepository, VoteRepository,
};
use qna_db::PgPool;

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
/// It provides access to:
/// - Database repositories
/// - JWT service for authentication
/// - Object store for uploads
#[derive(Clone)]
pub struct ServiceContext {
    // Database pool
    pool: PgPool,

    // Repositories
    user_repo: Arc<dyn UserRepository>,
    follow_repo: Arc<dyn FollowRepository>,
    post_repo: Arc<dyn PostRepository>,
    mark_repo: Arc<dyn MarkRepository>,
    vote_repo: Arc<dyn VoteRepository>,
    comment_repo: Arc<dyn CommentRepository>,
    feed_repo: Arc<dyn FeedRepository>,
    session_repo: Arc<dyn SessionRepository>,

    // Services
    jwt_service: Arc<JwtService>,
    object_store: Arc<dyn ObjectStore>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        pool: PgPool,
        user_repo: Arc<dyn UserRepository>,
        follow_repo: Arc<dyn FollowRepository>,
        post_repo: Arc<dyn PostRepository>,
        mark_repo: Arc<dyn MarkRepository>,
        vote_repo: Arc<dyn VoteRepository>,
        comment_repo: Arc<dyn CommentRepository>,
        feed_repo: Arc<dyn FeedRepository>,
        session_repo: Arc<dyn SessionRepository>,
        jwt_service: Arc<JwtService>,
        object_store: Arc<dyn ObjectStore>,
    ) -> Self {
        Self {
            pool,
            user_repo,
            follow_repo,
            post_repo,
            mark_repo,
            vote_repo,
            comment_repo,
            feed_repo,
            session_repo,
            jwt_service,
            object_store,
        }
    }

    // === Database Pool ===

    /// Get the PostgreSQL connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    // === Repositories ===

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the follow repository
    pub fn follow_repo(&self) -> &dyn FollowRepository {
        self.follow_repo.as_ref()
    }

    /// Get the post repository
    pub fn post_repo(&self) -> &dyn PostRepository {
        self.post_repo.as_ref()
    }

    /// Get the like/bookmark repository
    pub fn mark_repo(&self) -> &dyn MarkRepository {
        self.mark_repo.as_ref()
    }

    /// Get the vote repository
    pub fn vote_repo(&self) -> &dyn VoteRepository {
        self.vote_repo.as_ref()
    }

    /// Get the comment repository
    pub fn comment_repo(&self) -> &dyn CommentRepository {
        self.comment_repo.as_ref()
    }

    /// Get the feed repository
    pub fn feed_repo(&self) -> &dyn FeedRepository {
        self.feed_repo.as_ref()
    }

    /// Get the session repository
    pub fn session_repo(&self) -> &dyn SessionRepository {
        self.session_repo.as_ref()
    }

    // === Services ===

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }

    /// Get the object store used for uploads
    pub fn object_store(&self) -> &dyn ObjectStore {
        self.object_store.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &"PgPool")
            .field("repositories", &"...")
            .field("jwt_service", &self.jwt_service)
            .finish_non_exhaustive()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    user_repo: Option<Arc<dyn UserRepository>>,
    follow_repo: Option<Arc<dyn FollowRepository>>,
    post_repo: Option<Arc<dyn PostRepository>>,
    mark_repo: Option<Arc<dyn MarkRepository>>,
    vote_repo: Option<Arc<dyn VoteRepository>>,
    comment_repo: Option<Arc<dyn CommentRepository>>,
    feed_repo: Option<Arc<dyn FeedRepository>>,
    session_repo: Option<Arc<dyn SessionRepository>>,
    jwt_service: Option<Arc<JwtService>>,
    object_store: Option<Arc<dyn ObjectStore>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn follow_repo(mut self, repo: Arc<dyn FollowRepository>) -> Self {
        self.follow_repo = Some(repo);
        self
    }

    pub fn post_repo(mut self, repo: Arc<dyn PostRepository>) -> Self {
        self.post_repo = Some(repo);
        self
    }

    pub fn mark_repo(mut self, repo: Arc<dyn MarkRepository>) -> Self {
        self.mark_repo = Some(repo);
        self
    }

    pub fn vote_repo(mut self, repo: Arc<dyn VoteRepository>) -> Self {
        self.vote_repo = Some(repo);
        self
    }

    pub fn comment_repo(mut self, repo: Arc<dyn CommentRepository>) -> Self {
        self.comment_repo = Some(repo);
        self
    }

    pub fn feed_repo(mut self, repo: Arc<dyn FeedRepository>) -> Self {
        self.feed_repo = Some(repo);
        self
    }

    pub fn session_repo(mut self, repo: Arc<dyn SessionRepository>) -> Self {
        self.session_repo = Some(repo);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    pub fn object_store(mut self, store: Arc<dyn ObjectStore>) -> Self {
        self.object_store = Some(store);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            required(self.pool, "pool")?,
            required(self.user_repo, "user_repo")?,
            required(self.follow_repo, "follow_repo")?,
            required(self.post_repo, "post_repo")?,
            required(self.mark_repo, "mark_repo")?,
            required(self.vote_repo, "vote_repo")?,
            required(self.comment_repo, "comment_repo")?,
            required(self.feed_repo, "feed_repo")?,
            required(self.session_repo, "session_repo")?,
            required(self.jwt_service, "jwt_service")?,
            required(self.object_store, "object_store")?,
        ))
    }
}

fn required<T>(value: Option<T>, name: &str) -> ServiceResult<T> {
    value.ok_or_else(|| ServiceError::validation(format!("{name} is required")))
}
