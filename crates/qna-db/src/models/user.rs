//! User database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for users table
#[derive(Debug, Clone, FromRow)]
pub struct UserModel {
    pub id: String,
    pub name: String,
    pub country: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// `{id, name}` projection used by follow lists
#[derive(Debug, Clone, FromRow)]
pub struct UserSummaryModel {
    pub id: String,
    pub name: String,
}

/// Search row with the viewer's follow state
#[derive(Debug, Clone, FromRow)]
pub struct UserSearchModel {
    pub id: String,
    pub name: String,
    pub followed: bool,
}
