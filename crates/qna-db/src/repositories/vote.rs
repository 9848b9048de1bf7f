//! PostgreSQL implementation of VoteRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{info, instrument};

use qna_core::traits::{RepoResult, VoteRepository};
use qna_core::value_objects::{PostRef, VoteTally};

use crate::models::VoteCountsModel;

use super::error::{map_db_error, post_not_found};

/// Counter update adding or removing one vote on the O (`side_o`) or X side
const fn counter_update(side_o: bool, add: bool) -> &'static str {
    match (side_o, add) {
        (true, true) => {
            "UPDATE ox_posts SET o_count = o_count + 1 WHERE id = $1 RETURNING o_count, x_count"
        }
        (true, false) => {
            "UPDATE ox_posts SET o_count = o_count - 1 WHERE id = $1 RETURNING o_count, x_count"
        }
        (false, true) => {
            "UPDATE ox_posts SET x_count = x_count + 1 WHERE id = $1 RETURNING o_count, x_count"
        }
        (false, false) => {
            "UPDATE ox_posts SET x_count = x_count - 1 WHERE id = $1 RETURNING o_count, x_count"
        }
    }
}

/// PostgreSQL implementation of VoteRepository
#[derive(Clone)]
pub struct PgVoteRepository {
    pool: PgPool,
}

impl PgVoteRepository {
    /// Create a new PgVoteRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VoteRepository for PgVoteRepository {
    #[instrument(skip(self))]
    async fn cast_or_retract(
        &self,
        user_id: &str,
        post_id: i64,
        vote: bool,
    ) -> RepoResult<VoteTally> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        // The row lock serialises votes on one poll so counters track ox_votes
        let locked = sqlx::query_scalar::<_, i64>("SELECT id FROM ox_posts WHERE id = $1 FOR UPDATE")
            .bind(post_id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(map_db_error)?;

        if locked.is_none() {
            return Err(post_not_found(PostRef::ox(post_id)));
        }

        let stored = sqlx::query_scalar::<_, bool>(
            "DELETE FROM ox_votes WHERE user_id = $1 AND post_id = $2 RETURNING vote",
        )
        .bind(user_id)
        .bind(post_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?;

        let (update, voted) = match stored {
            // A second call always retracts the stored vote
            Some(previous) => (counter_update(previous, false), false),
            None => {
                sqlx::query("INSERT INTO ox_votes (user_id, post_id, vote) VALUES ($1, $2, $3)")
                    .bind(user_id)
                    .bind(post_id)
                    .bind(vote)
                    .execute(&mut *tx)
                    .await
                    .map_err(map_db_error)?;
                (counter_update(vote, true), true)
            }
        };

        let counts = sqlx::query_as::<_, VoteCountsModel>(update)
            .bind(post_id)
            .fetch_one(&mut *tx)
            .await
            .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        let tally = counts.with_voted(voted);
        info!(voted, o_count = tally.o_count, x_count = tally.x_count, "Vote toggled");
        Ok(tally)
    }
}
