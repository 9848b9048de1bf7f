//! Comment entity - a reply attached to a Q&A post

use chrono::{DateTime, Utc};

/// Comment on a Q&A post, carrying the commenter's display name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: i64,
    pub post_id: i64,
    pub author: String,
    pub author_name: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}
