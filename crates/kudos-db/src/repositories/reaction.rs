//! PostgreSQL implementation of ReactionRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use kudos_core::entities::{Reaction, ReactionKind};
use kudos_core::traits::{ReactionRepository, RepoResult};
use kudos_core::value_objects::Snowflake;

use crate::mappers::ReactionInsert;
use crate::models::{ReactionCountModel, ReactionModel};

use super::error::map_db_error;

/// PostgreSQL implementation of ReactionRepository
#[derive(Clone)]
pub struct PgReactionRepository {
    pool: PgPool,
}

impl PgReactionRepository {
    /// Create a new PgReactionRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReactionRepository for PgReactionRepository {
    #[instrument(skip(self))]
    async fn find(
        &self,
        notification_id: Snowflake,
        user_id: Snowflake,
    ) -> RepoResult<Option<Reaction>> {
        let result = sqlx::query_as::<_, ReactionModel>(
            r#"
            SELECT notification_id, user_id, kind, updated_at
            FROM reactions
            WHERE notification_id = $1 AND user_id = $2
            "#,
        )
        .bind(notification_id.into_inner())
        .bind(user_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Reaction::from))
    }

    #[instrument(skip(self, reaction))]
    async fn upsert(&self, reaction: &Reaction) -> RepoResult<()> {
        let insert = ReactionInsert::new(reaction);

        // The composite key makes "at most one reaction per user per
        // notification" a schema invariant; concurrent writers on the same
        // key resolve last-writer-wins inside this statement
        sqlx::query(
            r#"
            INSERT INTO reactions (notification_id, user_id, kind, updated_at)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (notification_id, user_id)
            DO UPDATE SET kind = EXCLUDED.kind, updated_at = EXCLUDED.updated_at
            "#,
        )
        .bind(insert.notification_id)
        .bind(insert.user_id)
        .bind(insert.kind)
        .bind(reaction.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, notification_id: Snowflake, user_id: Snowflake) -> RepoResult<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM reactions WHERE notification_id = $1 AND user_id = $2
            "#,
        )
        .bind(notification_id.into_inner())
        .bind(user_id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn delete_for_notification(&self, notification_id: Snowflake) -> RepoResult<()> {
        sqlx::query(
            r#"
            DELETE FROM reactions WHERE notification_id = $1
            "#,
        )
        .bind(notification_id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn count_by_kind(
        &self,
        notification_id: Snowflake,
    ) -> RepoResult<Vec<(ReactionKind, i64)>> {
        // Counts are always a tally over current rows; there is no separate
        // counter state that could drift from the reaction set
        let results = sqlx::query_as::<_, ReactionCountModel>(
            r#"
            SELECT kind, COUNT(*) as count
            FROM reactions
            WHERE notification_id = $1
            GROUP BY kind
            "#,
        )
        .bind(notification_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results
            .into_iter()
            .filter_map(|row| match ReactionKind::parse(&row.kind) {
                Some(kind) => Some((kind, row.count)),
                None => {
                    tracing::warn!(kind = %row.kind, "skipping unknown reaction kind in tally");
                    None
                }
            })
            .collect())
    }
}
