//! Database models - SQLx-compatible structs for PostgreSQL rows

mod comment;
mod feed;
mod post;
mod session;
mod user;

pub use comment::CommentModel;
pub use feed::FeedRowModel;
pub use post::{OxPostModel, QnaPostModel, VoteCountsModel};
pub use session::SessionModel;
pub use user::{UserModel, UserSearchModel, UserSummaryModel};
