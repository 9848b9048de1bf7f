//! PostgreSQL implementation of CommentRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use qna_core::entities::Comment;
use qna_core::traits::{CommentRepository, RepoResult};
use qna_core::value_objects::PostRef;

use crate::models::CommentModel;

use super::error::{map_db_error, map_foreign_key_violation, post_not_found};

/// PostgreSQL implementation of CommentRepository
#[derive(Clone)]
pub struct PgCommentRepository {
    pool: PgPool,
}

impl PgCommentRepository {
    /// Create a new PgCommentRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentRepository for PgCommentRepository {
    #[instrument(skip(self, content))]
    async fn create(&self, post_id: i64, author: &str, content: &str) -> RepoResult<Comment> {
        let result = sqlx::query_as::<_, CommentModel>(
            r"
            WITH inserted AS (
                INSERT INTO comments (post_id, author, content)
                VALUES ($1, $2, $3)
                RETURNING id, post_id, author, content, created_at
            )
            SELECT i.id, i.post_id, i.author, u.name AS author_name, i.content, i.created_at
            FROM inserted i
            JOIN users u ON u.id = i.author
            ",
        )
        .bind(post_id)
        .bind(author)
        .bind(content)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_foreign_key_violation(e, || post_not_found(PostRef::qna(post_id))))?;

        Ok(Comment::from(result))
    }

    #[instrument(skip(self))]
    async fn list_by_post(&self, post_id: i64) -> RepoResult<Vec<Comment>> {
        let results = sqlx::query_as::<_, CommentModel>(
            r"
            SELECT c.id, c.post_id, c.author, u.name AS author_name, c.content, c.created_at
            FROM comments c
            JOIN users u ON u.id = c.author
            WHERE c.post_id = $1
            ORDER BY c.created_at, c.id
            ",
        )
        .bind(post_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Comment::from).collect())
    }
}
