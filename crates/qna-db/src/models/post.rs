//! Post database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for qna_posts table
#[derive(Debug, Clone, FromRow)]
pub struct QnaPostModel {
    pub id: i64,
    pub author: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Database model for ox_posts table
#[derive(Debug, Clone, FromRow)]
pub struct OxPostModel {
    pub id: i64,
    pub author: String,
    pub content: String,
    pub o_count: i32,
    pub x_count: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Counter columns returned after a vote update
#[derive(Debug, Clone, Copy, FromRow)]
pub struct VoteCountsModel {
    pub o_count: i32,
    pub x_count: i32,
}
