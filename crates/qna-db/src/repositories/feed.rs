//! PostgreSQL implementation of FeedRepository
//!
//! One canonical query per post kind. Each row left-joins the viewer's own
//! like (and vote, for polls) and a per-post like count over all users; the
//! scope only changes the `WHERE` clause.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use qna_core::entities::FeedEntry;
use qna_core::traits::{FeedRepository, FeedScope, RepoResult};
use qna_core::value_objects::PostKind;

use crate::models::FeedRowModel;

use super::error::{map_db_error, post_table};

/// Filter for a scope. `$1` is always the viewer, `$2` the scope argument.
fn scope_filter(kind: PostKind, scope: &FeedScope) -> String {
    match scope {
        FeedScope::All { .. } => "$2::VARCHAR IS NULL OR p.author = $2".to_string(),
        FeedScope::Following => {
            "EXISTS (SELECT 1 FROM follows f WHERE f.follower = $1 AND f.following = p.author)"
                .to_string()
        }
        FeedScope::BookmarkedBy(_) => format!(
            "EXISTS (SELECT 1 FROM bookmarks b \
             WHERE b.user_id = $2 AND b.post_id = p.id AND b.post_type = '{}')",
            kind.as_str()
        ),
        FeedScope::Single(_) => "p.id = $2".to_string(),
    }
}

/// Build the feed query for `kind` and `scope`
fn feed_sql(kind: PostKind, scope: &FeedScope) -> String {
    let tag = kind.as_str();
    let (poll_columns, poll_join) = match kind {
        PostKind::Qna => (
            "NULL::INT4 AS o_count, NULL::INT4 AS x_count, NULL::BOOLEAN AS voted",
            "",
        ),
        PostKind::Ox => (
            "p.o_count, p.x_count, (mv.user_id IS NOT NULL) AS voted",
            "LEFT JOIN ox_votes mv ON mv.post_id = p.id AND mv.user_id = $1",
        ),
    };

    format!(
        r"
        SELECT p.id, p.author, u.name AS author_name, p.content, p.created_at,
               (ml.user_id IS NOT NULL) AS liked,
               COALESCE(lc.like_count, 0) AS like_count,
               {poll_columns}
        FROM {table} p
        JOIN users u ON u.id = p.author
        LEFT JOIN likes ml
               ON ml.post_id = p.id AND ml.post_type = '{tag}' AND ml.user_id = $1
        LEFT JOIN (
            SELECT post_id, COUNT(*) AS like_count
            FROM likes
            WHERE post_type = '{tag}'
            GROUP BY post_id
        ) lc ON lc.post_id = p.id
        {poll_join}
        WHERE {filter}
        ORDER BY p.created_at DESC, p.id DESC
        ",
        table = post_table(kind),
        filter = scope_filter(kind, scope),
    )
}

/// PostgreSQL implementation of FeedRepository
#[derive(Clone)]
pub struct PgFeedRepository {
    pool: PgPool,
}

impl PgFeedRepository {
    /// Create a new PgFeedRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FeedRepository for PgFeedRepository {
    #[instrument(skip(self))]
    async fn entries(
        &self,
        kind: PostKind,
        viewer: Option<&str>,
        scope: &FeedScope,
    ) -> RepoResult<Vec<FeedEntry>> {
        if matches!(scope, FeedScope::Following) && viewer.is_none() {
            return Ok(Vec::new());
        }

        let sql = feed_sql(kind, scope);
        let query = sqlx::query_as::<_, FeedRowModel>(&sql).bind(viewer);
        let query = match scope {
            FeedScope::All { author } => query.bind(author.as_deref()),
            FeedScope::Following => query,
            FeedScope::BookmarkedBy(user) => query.bind(user.as_str()),
            FeedScope::Single(id) => query.bind(*id),
        };

        let rows = query.fetch_all(&self.pool).await.map_err(map_db_error)?;

        Ok(rows.into_iter().map(|row| row.into_entry(kind)).collect())
    }
}
