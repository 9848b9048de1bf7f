//! User models -> entities

use qna_core::entities::{User, UserSearchHit, UserSummary};

use crate::models::{UserModel, UserSearchModel, UserSummaryModel};

impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: model.id,
            name: model.name,
            country: model.country,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<UserSummaryModel> for UserSummary {
    fn from(model: UserSummaryModel) -> Self {
        UserSummary {
            id: model.id,
            name: model.name,
        }
    }
}

impl From<UserSearchModel> for UserSearchHit {
    fn from(model: UserSearchModel) -> Self {
        UserSearchHit {
            id: model.id,
            name: model.name,
            followed: model.followed,
        }
    }
}
