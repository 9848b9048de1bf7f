//! # qna-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for all repository traits
//! defined in `qna-core`. It handles:
//!
//! - Connection pool management and schema migrations
//! - Database models with SQLx `FromRow` derives
//! - Model → entity mappers
//! - Repository implementations, including the feed query
//!
//! ## Usage
//!
//! ```rust,ignore
//! use qna_db::{create_pool, run_migrations, PgPostRepository, PoolConfig};
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(&PoolConfig::from_env()).await?;
//!     run_migrations(&pool).await?;
//!     let posts = PgPostRepository::new(pool);
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, run_migrations, run_migrations_from, PgPool, PoolConfig};
pub use repositories::{
    PgCommentRepository, PgFeedRepository, PgFollowRepository, PgMarkRepository,
    PgPostRepository, PgSessionRepository, PgUserRepository, PgVoteRepository,
};
