//! Repository traits (ports)

mod repositories;

pub use repositories::{
    CommentRepository, FeedRepository, FeedScope, FollowRepository, MarkRepository,
    PostRepository, RepoResult, SessionRepository, UserRepository, VoteRepository,
};
