//! PostgreSQL implementation of MarkRepository (likes and bookmarks)

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{info, instrument};

use qna_core::traits::{MarkRepository, RepoResult};
use qna_core::value_objects::{Mark, PostRef, Toggled};

use super::error::map_db_error;

/// PostgreSQL implementation of MarkRepository
///
/// Both mark tables share the key `(user_id, post_id, post_type)`.
#[derive(Clone)]
pub struct PgMarkRepository {
    pool: PgPool,
}

impl PgMarkRepository {
    /// Create a new PgMarkRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MarkRepository for PgMarkRepository {
    #[instrument(skip(self, post), fields(post = %post))]
    async fn toggle(&self, mark: Mark, user_id: &str, post: PostRef) -> RepoResult<Toggled> {
        let delete = format!(
            r"
            DELETE FROM {}
            WHERE user_id = $1 AND post_id = $2 AND post_type = $3
            RETURNING post_id
            ",
            mark.table()
        );

        let removed = sqlx::query_scalar::<_, i64>(&delete)
            .bind(user_id)
            .bind(post.id)
            .bind(post.kind.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        let outcome = if removed.is_some() {
            Toggled::Off
        } else {
            // Losing an insert race still leaves the mark present
            let insert = format!(
                r"
                INSERT INTO {} (user_id, post_id, post_type)
                VALUES ($1, $2, $3)
                ON CONFLICT (user_id, post_id, post_type) DO NOTHING
                ",
                mark.table()
            );

            sqlx::query(&insert)
                .bind(user_id)
                .bind(post.id)
                .bind(post.kind.as_str())
                .execute(&self.pool)
                .await
                .map_err(map_db_error)?;

            Toggled::On
        };

        info!(%mark, on = outcome.is_on(), "Mark toggled");
        Ok(outcome)
    }

    #[instrument(skip(self, post), fields(post = %post))]
    async fn is_marked(&self, mark: Mark, user_id: &str, post: PostRef) -> RepoResult<bool> {
        let sql = format!(
            r"
            SELECT EXISTS(
                SELECT 1 FROM {} WHERE user_id = $1 AND post_id = $2 AND post_type = $3
            )
            ",
            mark.table()
        );

        sqlx::query_scalar::<_, bool>(&sql)
            .bind(user_id)
            .bind(post.id)
            .bind(post.kind.as_str())
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }

    #[instrument(skip(self, post), fields(post = %post))]
    async fn count(&self, mark: Mark, post: PostRef) -> RepoResult<i64> {
        let sql = format!(
            "SELECT COUNT(*) FROM {} WHERE post_id = $1 AND post_type = $2",
            mark.table()
        );

        sqlx::query_scalar::<_, i64>(&sql)
            .bind(post.id)
            .bind(post.kind.as_str())
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }
}
