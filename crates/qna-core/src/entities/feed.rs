//! Feed entries - posts enriched with the viewer's marks and aggregate counts

use chrono::{DateTime, Utc};

use crate::value_objects::PostKind;

/// Poll columns of an O/X feed entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollState {
    pub o_count: i32,
    pub x_count: i32,
    /// Whether the viewer has an active vote on this poll
    pub voted: bool,
}

/// One post as shown in a feed
///
/// `liked` and `poll.voted` describe the viewer's own marks, `like_count`
/// counts the marks of all users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedEntry {
    pub id: i64,
    pub kind: PostKind,
    pub author: String,
    pub author_name: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub liked: bool,
    pub like_count: i64,
    /// Present only for O/X posts
    pub poll: Option<PollState>,
}
