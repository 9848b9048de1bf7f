//! User entity - an account that can post, follow and react

use chrono::{DateTime, Utc};

use crate::error::DomainError;

/// User account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Login id chosen at signup, also the public handle
    pub id: String,
    /// Display name
    pub name: String,
    pub country: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub const MAX_ID_LEN: usize = 30;
    pub const MAX_NAME_LEN: usize = 50;
    pub const MAX_COUNTRY_LEN: usize = 20;
    pub const MAX_PASSWORD_LEN: usize = 25;

    /// Create a new User with required fields
    pub fn new(id: String, name: String, country: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            name,
            country,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check every field against its length bound
    pub fn validate(&self) -> Result<(), DomainError> {
        check_len("userId", &self.id, Self::MAX_ID_LEN)?;
        check_len("username", &self.name, Self::MAX_NAME_LEN)?;
        check_len("country", &self.country, Self::MAX_COUNTRY_LEN)
    }

    /// Overwrite the mutable profile fields
    pub fn set_profile(&mut self, name: String, country: String) {
        self.name = name;
        self.country = country;
        self.updated_at = Utc::now();
    }
}

/// Validate that `value` holds between 1 and `max` characters
pub(crate) fn check_len(field: &str, value: &str, max: usize) -> Result<(), DomainError> {
    let len = value.chars().count();
    if len == 0 || len > max {
        return Err(DomainError::ValidationError(format!(
            "{field} must be between 1 and {max} characters"
        )));
    }
    Ok(())
}

/// Minimal `{id, name}` projection used by follow lists
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserSummary {
    pub id: String,
    pub name: String,
}

/// Search result row: a user plus whether the viewer follows them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserSearchHit {
    pub id: String,
    pub name: String,
    pub followed: bool,
}

/// Public profile with follow-graph counts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub user: User,
    pub follower_count: i64,
    pub following_count: i64,
}
