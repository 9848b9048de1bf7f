//! Business logic services
//!
//! Each service borrows the shared [`ServiceContext`] for the duration of a
//! request.

pub mod auth;
pub mod context;
pub mod engagement;
pub mod error;
pub mod feed;
pub mod follow;
pub mod health;
pub mod post;
pub mod upload;
pub mod user;

#[cfg(test)]
pub(crate) mod testing;

pub use auth::AuthService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use engagement::EngagementService;
pub use error::{ServiceError, ServiceResult};
pub use feed::FeedService;
pub use follow::FollowService;
pub use health::HealthService;
pub use post::PostService;
pub use upload::UploadService;
pub use user::UserService;
