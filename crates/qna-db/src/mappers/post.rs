//! Post models -> entities

use qna_core::entities::{OxPost, Post, QnaPost};
use qna_core::value_objects::VoteTally;

use crate::models::{OxPostModel, QnaPostModel, VoteCountsModel};

impl From<QnaPostModel> for Post {
    fn from(model: QnaPostModel) -> Self {
        Post::Qna(QnaPost {
            id: model.id,
            author: model.author,
            content: model.content,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}

impl From<OxPostModel> for Post {
    fn from(model: OxPostModel) -> Self {
        Post::Ox(OxPost {
            id: model.id,
            author: model.author,
            content: model.content,
            o_count: model.o_count,
            x_count: model.x_count,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}

impl VoteCountsModel {
    /// Attach the caller's vote state to the counters
    pub fn with_voted(self, voted: bool) -> VoteTally {
        VoteTally::new(self.o_count, self.x_count, voted)
    }
}
