//! Comment model -> entity

use qna_core::entities::Comment;

use crate::models::CommentModel;

impl From<CommentModel> for Comment {
    fn from(model: CommentModel) -> Self {
        Comment {
            id: model.id,
            post_id: model.post_id,
            author: model.author,
            author_name: model.author_name,
            content: model.content,
            created_at: model.created_at,
        }
    }
}
