//! Model to entity mappers
//!
//! `From<Model> for Entity` conversions from database rows to domain objects.
//! Feed rows need the post kind, so they convert through
//! [`FeedRowModel::into_entry`](crate::models::FeedRowModel::into_entry).

mod comment;
mod feed;
mod post;
mod session;
mod user;
