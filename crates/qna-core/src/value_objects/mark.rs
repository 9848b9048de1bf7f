//! Per-user marks on posts and the outcome of toggling them

use std::fmt;

/// A boolean per-(user, post) relationship stored as a presence row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Like,
    Bookmark,
}

impl Mark {
    /// Backing table name
    #[inline]
    pub const fn table(self) -> &'static str {
        match self {
            Self::Like => "likes",
            Self::Bookmark => "bookmarks",
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Like => f.write_str("like"),
            Self::Bookmark => f.write_str("bookmark"),
        }
    }
}

/// Outcome of a toggle operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggled {
    /// The marker row now exists
    On,
    /// The marker row was removed
    Off,
}

impl Toggled {
    #[inline]
    pub const fn is_on(self) -> bool {
        matches!(self, Self::On)
    }

    /// The outcome a second toggle would report
    #[inline]
    pub const fn inverse(self) -> Self {
        match self {
            Self::On => Self::Off,
            Self::Off => Self::On,
        }
    }
}
