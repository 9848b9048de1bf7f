//! PostgreSQL implementation of FollowRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use qna_core::entities::UserSummary;
use qna_core::error::DomainError;
use qna_core::traits::{FollowRepository, RepoResult};
use qna_core::value_objects::Toggled;

use crate::models::UserSummaryModel;

use super::error::{map_db_error, map_foreign_key_violation, user_not_found};

/// PostgreSQL implementation of FollowRepository
///
/// A row `(follower, following)` means `follower` follows `following`.
#[derive(Clone)]
pub struct PgFollowRepository {
    pool: PgPool,
}

impl PgFollowRepository {
    /// Create a new PgFollowRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FollowRepository for PgFollowRepository {
    #[instrument(skip(self))]
    async fn is_following(&self, follower: &str, following: &str) -> RepoResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM follows WHERE follower = $1 AND following = $2)",
        )
        .bind(follower)
        .bind(following)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn toggle(&self, follower: &str, following: &str) -> RepoResult<Toggled> {
        if follower == following {
            return Err(DomainError::SelfFollow);
        }

        let removed = sqlx::query_scalar::<_, String>(
            r"
            DELETE FROM follows
            WHERE follower = $1 AND following = $2
            RETURNING following
            ",
        )
        .bind(follower)
        .bind(following)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        if removed.is_some() {
            return Ok(Toggled::Off);
        }

        // A concurrent toggle may have inserted first; the edge exists either way
        sqlx::query(
            r"
            INSERT INTO follows (follower, following)
            VALUES ($1, $2)
            ON CONFLICT (follower, following) DO NOTHING
            ",
        )
        .bind(follower)
        .bind(following)
        .execute(&self.pool)
        .await
        .map_err(|e| map_foreign_key_violation(e, || user_not_found(following)))?;

        Ok(Toggled::On)
    }

    #[instrument(skip(self))]
    async fn list_following(&self, user_id: &str) -> RepoResult<Vec<UserSummary>> {
        let results = sqlx::query_as::<_, UserSummaryModel>(
            r"
            SELECT u.id, u.name
            FROM follows f
            JOIN users u ON u.id = f.following
            WHERE f.follower = $1
            ORDER BY f.created_at
            ",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(UserSummary::from).collect())
    }

    #[instrument(skip(self))]
    async fn list_followers(&self, user_id: &str) -> RepoResult<Vec<UserSummary>> {
        let results = sqlx::query_as::<_, UserSummaryModel>(
            r"
            SELECT u.id, u.name
            FROM follows f
            JOIN users u ON u.id = f.follower
            WHERE f.following = $1
            ORDER BY f.created_at
            ",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(UserSummary::from).collect())
    }

    #[instrument(skip(self))]
    async fn counts(&self, user_id: &str) -> RepoResult<(i64, i64)> {
        sqlx::query_as::<_, (i64, i64)>(
            r"
            SELECT
                (SELECT COUNT(*) FROM follows WHERE following = $1) AS followers,
                (SELECT COUNT(*) FROM follows WHERE follower = $1) AS following
            ",
        )
        .bind(user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }
}
