//! Error handling utilities for repositories

use qna_core::error::DomainError;
use qna_core::value_objects::{PostKind, PostRef};
use sqlx::Error as SqlxError;
use tracing::error;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    error!(error = %e, "Database operation failed");
    DomainError::DatabaseError(e.to_string())
}

/// Check for unique violation and return appropriate error or fallback
pub fn map_unique_violation<F>(e: SqlxError, on_unique: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return on_unique();
        }
    }
    map_db_error(e)
}

/// Check for a foreign key violation (missing referenced row)
pub fn map_foreign_key_violation<F>(e: SqlxError, on_missing: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_foreign_key_violation() {
            return on_missing();
        }
    }
    map_db_error(e)
}

/// Create a "user not found" error
pub fn user_not_found(id: &str) -> DomainError {
    DomainError::UserNotFound(id.to_string())
}

/// Create a "post not found" error
pub fn post_not_found(post: PostRef) -> DomainError {
    DomainError::PostNotFound(post)
}

/// Table holding posts of `kind`
pub const fn post_table(kind: PostKind) -> &'static str {
    match kind {
        PostKind::Qna => "qna_posts",
        PostKind::Ox => "ox_posts",
    }
}

/// Escape `%`, `_` and `\` so user input matches literally inside ILIKE
pub fn escape_like(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(c, '%' | '_' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}
