//! # qna-core
//!
//! Domain layer containing entities, value objects and repository traits for
//! the Q&A / O/X social feed. This crate has zero dependencies on
//! infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    validate_content, Comment, FeedEntry, NewPost, OxPost, PollState, Post, Profile, QnaPost,
    Session, User, UserSearchHit, UserSummary,
};
pub use error::DomainError;
pub use traits::{
    CommentRepository, FeedRepository, FeedScope, FollowRepository, MarkRepository,
    PostRepository, RepoResult, SessionRepository, UserRepository, VoteRepository,
};
pub use value_objects::{Mark, PostKind, PostKindParseError, PostRef, Toggled, VoteTally};
