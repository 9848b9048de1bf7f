//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in qna-core.

mod comment;
mod error;
mod feed;
mod follow;
mod mark;
mod post;
mod session;
mod user;
mod vote;

pub use comment::PgCommentRepository;
pub use feed::PgFeedRepository;
pub use follow::PgFollowRepository;
pub use mark::PgMarkRepository;
pub use post::PgPostRepository;
pub use session::PgSessionRepository;
pub use user::PgUserRepository;
pub use vote::PgVoteRepository;
