//! Feed row -> entry

use qna_core::entities::{FeedEntry, PollState};
use qna_core::value_objects::PostKind;

use crate::models::FeedRowModel;

impl FeedRowModel {
    /// Convert a row produced by the feed query for `kind`
    pub fn into_entry(self, kind: PostKind) -> FeedEntry {
        let poll = match kind {
            PostKind::Qna => None,
            PostKind::Ox => Some(PollState {
                o_count: self.o_count.unwrap_or_default(),
                x_count: self.x_count.unwrap_or_default(),
                voted: self.voted.unwrap_or_default(),
            }),
        };

        FeedEntry {
            id: self.id,
            kind,
            author: self.author,
            author_name: self.author_name,
            content: self.content,
            created_at: self.created_at,
            liked: self.liked,
            like_count: self.like_count,
            poll,
        }
    }
}
