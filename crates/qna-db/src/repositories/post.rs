//! PostgreSQL implementation of PostRepository
//!
//! Q&A posts and O/X polls live in separate tables; every query is the same
//! shape over `post_table(kind)` with the kind's column list.

use async_trait::async_trait;
use sqlx::{PgPool, Postgres};
use tracing::{info, instrument};

use qna_core::entities::{NewPost, Post};
use qna_core::traits::{PostRepository, RepoResult};
use qna_core::value_objects::{PostKind, PostRef};

use crate::models::{OxPostModel, QnaPostModel};

use super::error::{
    map_db_error, map_foreign_key_violation, post_not_found, post_table, user_not_found,
};

/// Columns of each post table, qualified with the `p` alias
const fn post_columns(kind: PostKind) -> &'static str {
    match kind {
        PostKind::Qna => "p.id, p.author, p.content, p.created_at, p.updated_at",
        PostKind::Ox => {
            "p.id, p.author, p.content, p.o_count, p.x_count, p.created_at, p.updated_at"
        }
    }
}

/// PostgreSQL implementation of PostRepository
#[derive(Clone)]
pub struct PgPostRepository {
    pool: PgPool,
}

impl PgPostRepository {
    /// Create a new PgPostRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Run a post-returning query with one bound argument, decoding rows for `kind`
    async fn fetch_posts<'q, A>(&self, kind: PostKind, sql: &'q str, arg: A) -> RepoResult<Vec<Post>>
    where
        A: 'q + Send + sqlx::Encode<'q, Postgres> + sqlx::Type<Postgres>,
    {
        let posts = match kind {
            PostKind::Qna => sqlx::query_as::<_, QnaPostModel>(sql)
                .bind(arg)
                .fetch_all(&self.pool)
                .await
                .map_err(map_db_error)?
                .into_iter()
                .map(Post::from)
                .collect(),
            PostKind::Ox => sqlx::query_as::<_, OxPostModel>(sql)
                .bind(arg)
                .fetch_all(&self.pool)
                .await
                .map_err(map_db_error)?
                .into_iter()
                .map(Post::from)
                .collect(),
        };
        Ok(posts)
    }
}

#[async_trait]
impl PostRepository for PgPostRepository {
    #[instrument(skip(self, post), fields(kind = %post.kind, author = %post.author))]
    async fn create(&self, post: &NewPost) -> RepoResult<Post> {
        let sql = format!(
            "INSERT INTO {} AS p (author, content) VALUES ($1, $2) RETURNING {}",
            post_table(post.kind),
            post_columns(post.kind)
        );

        let created = match post.kind {
            PostKind::Qna => sqlx::query_as::<_, QnaPostModel>(&sql)
                .bind(&post.author)
                .bind(&post.content)
                .fetch_one(&self.pool)
                .await
                .map(Post::from),
            PostKind::Ox => sqlx::query_as::<_, OxPostModel>(&sql)
                .bind(&post.author)
                .bind(&post.content)
                .fetch_one(&self.pool)
                .await
                .map(Post::from),
        }
        .map_err(|e| map_foreign_key_violation(e, || user_not_found(&post.author)))?;

        info!(post = %created.post_ref(), "Post created");
        Ok(created)
    }

    #[instrument(skip(self, post), fields(post = %post))]
    async fn find_by_id(&self, post: PostRef) -> RepoResult<Option<Post>> {
        let sql = format!(
            "SELECT {} FROM {} p WHERE p.id = $1",
            post_columns(post.kind),
            post_table(post.kind)
        );

        Ok(self.fetch_posts(post.kind, &sql, post.id).await?.into_iter().next())
    }

    #[instrument(skip(self, post), fields(post = %post))]
    async fn exists(&self, post: PostRef) -> RepoResult<bool> {
        let sql = format!(
            "SELECT EXISTS(SELECT 1 FROM {} WHERE id = $1)",
            post_table(post.kind)
        );

        sqlx::query_scalar::<_, bool>(&sql)
            .bind(post.id)
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn list(&self, kind: PostKind, author: Option<&str>) -> RepoResult<Vec<Post>> {
        let sql = format!(
            r"
            SELECT {}
            FROM {} p
            WHERE $1::VARCHAR IS NULL OR p.author = $1
            ORDER BY p.created_at DESC, p.id DESC
            ",
            post_columns(kind),
            post_table(kind)
        );

        self.fetch_posts(kind, &sql, author).await
    }

    #[instrument(skip(self))]
    async fn list_by_followees(&self, kind: PostKind, user_id: &str) -> RepoResult<Vec<Post>> {
        let sql = format!(
            r"
            SELECT {}
            FROM {} p
            JOIN follows f ON f.following = p.author
            WHERE f.follower = $1
            ORDER BY p.created_at DESC, p.id DESC
            ",
            post_columns(kind),
            post_table(kind)
        );

        self.fetch_posts(kind, &sql, user_id).await
    }

    #[instrument(skip(self, post, content), fields(post = %post))]
    async fn update_content(&self, post: PostRef, content: &str) -> RepoResult<()> {
        let sql = format!(
            "UPDATE {} SET content = $2, updated_at = NOW() WHERE id = $1",
            post_table(post.kind)
        );

        let result = sqlx::query(&sql)
            .bind(post.id)
            .bind(content)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(post_not_found(post));
        }

        Ok(())
    }

    #[instrument(skip(self, post), fields(post = %post))]
    async fn delete(&self, post: PostRef) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        // Marks reference posts by (post_id, post_type) without a foreign key
        for table in ["likes", "bookmarks"] {
            let sql = format!("DELETE FROM {table} WHERE post_id = $1 AND post_type = $2");
            sqlx::query(&sql)
                .bind(post.id)
                .bind(post.kind.as_str())
                .execute(&mut *tx)
                .await
                .map_err(map_db_error)?;
        }

        let sql = format!("DELETE FROM {} WHERE id = $1", post_table(post.kind));
        let result = sqlx::query(&sql)
            .bind(post.id)
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(post_not_found(post));
        }

        tx.commit().await.map_err(map_db_error)?;

        info!("Post deleted");
        Ok(())
    }
}
