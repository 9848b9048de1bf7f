//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and, where they carry user
//! input, `Validate`. Field names are camelCase on the wire.

use qna_core::value_objects::PostKind;
use serde::Deserialize;
use validator::Validate;

// ============================================================================
// Auth Requests
// ============================================================================

/// Account creation request
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    #[validate(length(min = 1, max = 30, message = "userId must be 1-30 characters"))]
    pub user_id: String,

    #[validate(length(min = 1, max = 25, message = "password must be 1-25 characters"))]
    pub password: String,

    #[validate(length(min = 1, max = 50, message = "username must be 1-50 characters"))]
    pub username: String,

    #[validate(length(min = 1, max = 20, message = "country must be 1-20 characters"))]
    pub country: String,
}

/// Login request
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[validate(length(min = 1, max = 30, message = "userId must be 1-30 characters"))]
    pub user_id: String,

    #[validate(length(min = 1, max = 25, message = "password must be 1-25 characters"))]
    pub password: String,
}

/// Token refresh request
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RefreshTokenRequest {
    #[validate(length(min = 1, message = "refreshToken is required"))]
    pub refresh_token: String,
}

/// Logout request (optional refresh token to revoke)
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct LogoutRequest {
    pub refresh_token: Option<String>,
}

/// Password change request
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    #[validate(length(min = 1, max = 25, message = "currentPassword must be 1-25 characters"))]
    pub current_password: String,

    #[validate(length(min = 1, max = 25, message = "newPassword must be 1-25 characters"))]
    pub new_password: String,
}

// ============================================================================
// Profile Requests
// ============================================================================

/// Profile update request
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    #[validate(length(min = 1, max = 50, message = "username must be 1-50 characters"))]
    pub username: String,

    #[validate(length(min = 1, max = 20, message = "country must be 1-20 characters"))]
    pub country: String,
}

/// `?q=` filter for user search
#[derive(Debug, Clone, Deserialize, Default)]
pub struct SearchQuery {
    pub q: Option<String>,
}

// ============================================================================
// Post Requests
// ============================================================================

/// Body of post create and update calls
///
/// The upper bound depends on the post kind and is checked by the service.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PostContentRequest {
    #[validate(length(min = 1, message = "content is required"))]
    pub content: String,
}

/// `?author=` filter for post listings
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AuthorQuery {
    pub author: Option<String>,
}

/// Comment creation request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCommentRequest {
    #[validate(length(min = 1, max = 1000, message = "content must be 1-1000 characters"))]
    pub content: String,
}

/// O/X vote: `true` for O, `false` for X
#[derive(Debug, Clone, Copy, Deserialize, Validate)]
pub struct VoteRequest {
    pub vote: bool,
}

// ============================================================================
// Engagement Requests
// ============================================================================

/// Like or bookmark toggle target
#[derive(Debug, Clone, Copy, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MarkRequest {
    #[serde(alias = "postID")]
    #[validate(range(min = 1, message = "postId must be positive"))]
    pub post_id: i64,

    pub post_type: PostKind,
}
