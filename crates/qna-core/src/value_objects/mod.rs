//! Value objects - immutable types that represent domain concepts

mod mark;
mod post_kind;
mod vote;

pub use mark::{Mark, Toggled};
pub use post_kind::{PostKind, PostKindParseError, PostRef};
pub use vote::VoteTally;
