//! Comment database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Comment row joined with the commenter's display name
#[derive(Debug, Clone, FromRow)]
pub struct CommentModel {
    pub id: i64,
    pub post_id: i64,
    pub author: String,
    pub author_name: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}
