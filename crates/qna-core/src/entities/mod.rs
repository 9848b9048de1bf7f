//! Domain entities - core business objects

mod comment;
mod feed;
mod post;
mod session;
mod user;

pub use comment::Comment;
pub use feed::{FeedEntry, PollState};
pub use post::{validate_content, NewPost, OxPost, Post, QnaPost};
pub use session::Session;
pub use user::{Profile, User, UserSearchHit, UserSummary};
