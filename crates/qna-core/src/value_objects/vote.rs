//! O/X poll counters

/// Current counters of an O/X poll plus whether the caller's vote is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VoteTally {
    pub o_count: i32,
    pub x_count: i32,
    /// True when the acting user has a vote recorded after the operation
    pub voted: bool,
}

impl VoteTally {
    pub const fn new(o_count: i32, x_count: i32, voted: bool) -> Self {
        Self {
            o_count,
            x_count,
            voted,
        }
    }

    /// Total number of active votes
    #[inline]
    pub const fn total(&self) -> i32 {
        self.o_count + self.x_count
    }
}
