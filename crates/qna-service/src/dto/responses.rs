//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output with camelCase
//! field names.

use chrono::{DateTime, Utc};
use qna_core::value_objects::PostKind;
use serde::Serialize;

// ============================================================================
// Common Response Types
// ============================================================================

/// Plain `{message}` acknowledgement
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Posts of both kinds, side by side
#[derive(Debug, Clone, Serialize)]
pub struct SplitPostsResponse<T> {
    pub qna: Vec<T>,
    pub ox: Vec<T>,
}

// ============================================================================
// Auth Responses
// ============================================================================

/// Authentication response with tokens
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub message: String,
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: UserResponse,
}

impl AuthResponse {
    pub fn new(
        message: impl Into<String>,
        access_token: String,
        refresh_token: String,
        expires_in: i64,
        user: UserResponse,
    ) -> Self {
        Self {
            message: message.into(),
            access_token,
            refresh_token,
            token_type: "Bearer".to_string(),
            expires_in,
            user,
        }
    }
}

/// Id availability check
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ExistsResponse {
    pub exists: bool,
}

// ============================================================================
// User Responses
// ============================================================================

/// Account fields returned after signup and profile edits
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub user_id: String,
    pub username: String,
    pub country: String,
    pub created_at: DateTime<Utc>,
}

/// Public profile with follow counts
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub user_id: String,
    pub username: String,
    pub country: String,
    pub follower_count: i64,
    pub following_count: i64,
}

/// One row of a search result
#[derive(Debug, Clone, Serialize)]
pub struct SearchUserResponse {
    pub id: String,
    pub name: String,
    pub followed: bool,
}

/// Search result list
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub user_list: Vec<SearchUserResponse>,
}

// ============================================================================
// Follow Responses
// ============================================================================

/// Outcome of a follow toggle
#[derive(Debug, Clone, Serialize)]
pub struct FollowToggleResponse {
    pub message: String,
    /// Whether the caller follows the target after the toggle
    pub following: bool,
}

/// Entry of a following/follower list
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FollowUserResponse {
    pub user_id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct FollowListResponse {
    pub result: Vec<FollowUserResponse>,
}

// ============================================================================
// Post Responses
// ============================================================================

/// A stored post without viewer enrichment
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    pub id: i64,
    pub post_type: PostKind,
    pub author: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub o_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_count: Option<i32>,
}

/// A post as composed for a feed
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedEntryResponse {
    pub id: i64,
    pub post_type: PostKind,
    pub author: String,
    pub author_name: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub liked: bool,
    pub like_count: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub o_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voted: Option<bool>,
}

/// Comment with its author's display name
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentResponse {
    pub id: i64,
    pub post_id: i64,
    pub author: String,
    pub author_name: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Q&A post detail with its comment thread
#[derive(Debug, Clone, Serialize)]
pub struct QnaDetailResponse {
    #[serde(flatten)]
    pub post: FeedEntryResponse,
    pub comments: Vec<CommentResponse>,
}

// ============================================================================
// Engagement Responses
// ============================================================================

/// Poll counters after a vote or retraction
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteResponse {
    pub o_count: i32,
    pub x_count: i32,
    pub voted: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct LikeToggleResponse {
    pub message: String,
    pub liked: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct BookmarkToggleResponse {
    pub message: String,
    pub bookmarked: bool,
}

// ============================================================================
// Upload Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct UploadResponse {
    pub message: String,
    pub url: String,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}
