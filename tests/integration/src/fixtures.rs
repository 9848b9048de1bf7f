//! Test fixtures and data generators
//!
//! Request bodies and response shapes used by the integration tests.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A user id unique across test runs, within the 30 character bound
pub fn unique_user_id(prefix: &str) -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    format!("{}{}", prefix, &suffix[..12])
}

/// Signup request
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub user_id: String,
    pub password: String,
    pub username: String,
    pub country: String,
}

impl SignupRequest {
    pub fn unique(prefix: &str) -> Self {
        let user_id = unique_user_id(prefix);
        Self {
            username: format!("{prefix} tester"),
            user_id,
            password: "pw-1234".to_string(),
            country: "KR".to_string(),
        }
    }
}

/// Login request
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub user_id: String,
    pub password: String,
}

impl LoginRequest {
    pub fn from_signup(signup: &SignupRequest) -> Self {
        Self {
            user_id: signup.user_id.clone(),
            password: signup.password.clone(),
        }
    }
}

/// Refresh / logout request
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshRequest {
    pub refresh_token: String,
}

/// Content body for posts and comments
#[derive(Debug, Serialize)]
pub struct ContentRequest {
    pub content: String,
}

impl ContentRequest {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

/// O/X vote body
#[derive(Debug, Serialize)]
pub struct VoteRequest {
    pub vote: bool,
}

/// Like / bookmark body
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkRequest {
    pub post_id: i64,
    pub post_type: String,
}

/// Auth response
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub message: String,
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub user: UserResponse,
}

/// User response
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub user_id: String,
    pub username: String,
    pub country: String,
}

/// Profile response
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub user_id: String,
    pub follower_count: i64,
    pub following_count: i64,
}

/// Plain post response
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    pub id: i64,
    pub post_type: String,
    pub author: String,
    pub content: String,
}

/// Feed entry
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedEntry {
    pub id: i64,
    pub author: String,
    pub content: String,
    pub liked: bool,
    pub like_count: i64,
    pub o_count: Option<i32>,
    pub x_count: Option<i32>,
    pub voted: Option<bool>,
}

/// Q&A detail with comments
#[derive(Debug, Deserialize)]
pub struct QnaDetail {
    #[serde(flatten)]
    pub post: FeedEntry,
    pub comments: Vec<CommentResponse>,
}

/// Comment response
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentResponse {
    pub id: i64,
    pub post_id: i64,
    pub author: String,
    pub content: String,
}

/// O/X vote tally
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteResponse {
    pub o_count: i32,
    pub x_count: i32,
    pub voted: bool,
}

/// Follow toggle
#[derive(Debug, Deserialize)]
pub struct FollowToggleResponse {
    pub message: String,
    pub following: bool,
}

/// Like toggle
#[derive(Debug, Deserialize)]
pub struct LikeToggleResponse {
    pub message: String,
    pub liked: bool,
}

/// Bookmark toggle
#[derive(Debug, Deserialize)]
pub struct BookmarkToggleResponse {
    pub message: String,
    pub bookmarked: bool,
}

/// Posts split by kind
#[derive(Debug, Deserialize)]
pub struct SplitPosts<T> {
    pub qna: Vec<T>,
    pub ox: Vec<T>,
}

/// Upload response
#[derive(Debug, Deserialize)]
pub struct UploadResponse {
    pub message: String,
    pub url: String,
}

/// Error body `{"error": {...}}`
#[derive(Debug, Deserialize)]
pub struct ErrorEnvelope {
    pub error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}
