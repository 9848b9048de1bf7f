//! Post kind - the two flavours of post the feed carries
//!
//! Q&A posts and O/X polls live in separate tables with independent id
//! sequences, so a post is only identified by the pair `(kind, id)`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of post
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PostKind {
    /// Open-ended question and answer post
    #[serde(rename = "qa", alias = "qna")]
    Qna,
    /// Binary O/X poll
    #[serde(rename = "ox")]
    Ox,
}

impl PostKind {
    /// Both kinds, in display order
    pub const ALL: [PostKind; 2] = [PostKind::Qna, PostKind::Ox];

    /// Wire and storage tag (`"qa"` / `"ox"`)
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Qna => "qa",
            Self::Ox => "ox",
        }
    }

    /// Maximum content length in characters
    #[inline]
    pub const fn max_content_len(self) -> usize {
        match self {
            Self::Qna => 1000,
            Self::Ox => 100,
        }
    }

    /// Human readable resource name used in error messages
    #[inline]
    pub const fn resource_name(self) -> &'static str {
        match self {
            Self::Qna => "Q&A post",
            Self::Ox => "O/X post",
        }
    }
}

impl fmt::Display for PostKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error when parsing a PostKind from string
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid post type: {0} (expected \"qa\" or \"ox\")")]
pub struct PostKindParseError(pub String);

impl std::str::FromStr for PostKind {
    type Err = PostKindParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "qa" | "qna" => Ok(Self::Qna),
            "ox" => Ok(Self::Ox),
            other => Err(PostKindParseError(other.to_string())),
        }
    }
}

/// Reference to a single post: its kind plus its id within that kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PostRef {
    pub kind: PostKind,
    pub id: i64,
}

impl PostRef {
    #[inline]
    pub const fn new(kind: PostKind, id: i64) -> Self {
        Self { kind, id }
    }

    #[inline]
    pub const fn qna(id: i64) -> Self {
        Self::new(PostKind::Qna, id)
    }

    #[inline]
    pub const fn ox(id: i64) -> Self {
        Self::new(PostKind::Ox, id)
    }
}

impl fmt::Display for PostRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind, self.id)
    }
}
