//! Feed row model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// One row of the feed query. Poll columns are NULL for Q&A posts.
#[derive(Debug, Clone, FromRow)]
pub struct FeedRowModel {
    pub id: i64,
    pub author: String,
    pub author_name: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub liked: bool,
    pub like_count: i64,
    pub o_count: Option<i32>,
    pub x_count: Option<i32>,
    pub voted: Option<bool>,
}
