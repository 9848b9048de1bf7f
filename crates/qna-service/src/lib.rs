//! # qna-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

pub use services::{
    AuthService, EngagementService, FeedService, FollowService, HealthService, PostService,
    ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult, UploadService,
    UserService,
};
