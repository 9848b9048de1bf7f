//! Post entities - Q&A posts and O/X polls

use chrono::{DateTime, Utc};

use crate::entities::user::check_len;
use crate::error::DomainError;
use crate::value_objects::{PostKind, PostRef};

/// Open-ended question post
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QnaPost {
    pub id: i64,
    pub author: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Binary O/X poll with its vote counters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OxPost {
    pub id: i64,
    pub author: String,
    pub content: String,
    pub o_count: i32,
    pub x_count: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A stored post of either kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Post {
    Qna(QnaPost),
    Ox(OxPost),
}

impl Post {
    #[inline]
    pub fn kind(&self) -> PostKind {
        match self {
            Self::Qna(_) => PostKind::Qna,
            Self::Ox(_) => PostKind::Ox,
        }
    }

    #[inline]
    pub fn id(&self) -> i64 {
        match self {
            Self::Qna(p) => p.id,
            Self::Ox(p) => p.id,
        }
    }

    #[inline]
    pub fn author(&self) -> &str {
        match self {
            Self::Qna(p) => &p.author,
            Self::Ox(p) => &p.author,
        }
    }

    #[inline]
    pub fn content(&self) -> &str {
        match self {
            Self::Qna(p) => &p.content,
            Self::Ox(p) => &p.content,
        }
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        match self {
            Self::Qna(p) => p.created_at,
            Self::Ox(p) => p.created_at,
        }
    }

    pub fn post_ref(&self) -> PostRef {
        PostRef::new(self.kind(), self.id())
    }

    /// Check if `user_id` wrote this post
    #[inline]
    pub fn is_authored_by(&self, user_id: &str) -> bool {
        self.author() == user_id
    }

    /// Reject callers that are not the author
    pub fn ensure_author(&self, user_id: &str) -> Result<(), DomainError> {
        if self.is_authored_by(user_id) {
            Ok(())
        } else {
            Err(DomainError::NotPostAuthor)
        }
    }
}

/// Input for creating a post
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub kind: PostKind,
    pub author: String,
    pub content: String,
}

impl NewPost {
    pub fn new(kind: PostKind, author: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            kind,
            author: author.into(),
            content: content.into(),
        }
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        validate_content(self.kind, &self.content)
    }
}

/// Content must be non-empty and within the per-kind limit
pub fn validate_content(kind: PostKind, content: &str) -> Result<(), DomainError> {
    let max = kind.max_content_len();
    if content.chars().count() > max {
        return Err(DomainError::ContentTooLong { max });
    }
    check_len("content", content, max)
}
