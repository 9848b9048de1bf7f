//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs (camelCase JSON)
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{
    AuthorQuery, ChangePasswordRequest, CreateCommentRequest, LoginRequest, LogoutRequest,
    MarkRequest, PostContentRequest, RefreshTokenRequest, SearchQuery, SignupRequest,
    UpdateProfileRequest, VoteRequest,
};

pub use responses::{
    AuthResponse, BookmarkToggleResponse, CommentResponse, ExistsResponse, FeedEntryResponse,
    FollowListResponse, FollowToggleResponse, FollowUserResponse, HealthChecks, HealthResponse,
    LikeToggleResponse, MessageResponse, PostResponse, ProfileResponse, QnaDetailResponse,
    ReadinessResponse, SearchResponse, SearchUserResponse, SplitPostsResponse, UploadResponse,
    UserResponse, VoteResponse,
};
