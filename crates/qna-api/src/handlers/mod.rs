//! Route handlers
//!
//! All HTTP request handlers organized by domain.

pub mod auth;
pub mod follow;
pub mod health;
pub mod marks;
pub mod ox;
pub mod profile;
pub mod qna;
pub mod search;
pub mod uploads;
pub mod users;
