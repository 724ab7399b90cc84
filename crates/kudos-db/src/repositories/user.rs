//! PostgreSQL implementation of UserDirectory
//!
//! The users table is owned by the surrounding product; this engine only
//! resolves display names out of it.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use kudos_core::entities::DirectoryUser;
use kudos_core::traits::{RepoResult, UserDirectory};
use kudos_core::value_objects::Snowflake;

use crate::models::UserModel;

use super::error::map_db_error;

/// PostgreSQL implementation of UserDirectory
#[derive(Clone)]
pub struct PgUserDirectory {
    pool: PgPool,
}

impl PgUserDirectory {
    /// Create a new PgUserDirectory
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserDirectory for PgUserDirectory {
    #[instrument(skip(self))]
    async fn resolve(&self, user_id: Snowflake) -> RepoResult<Option<DirectoryUser>> {
        let result = sqlx::query_as::<_, UserModel>(
            r#"
            SELECT id, display_name FROM users WHERE id = $1
            "#,
        )
        .bind(user_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(DirectoryUser::from))
    }

    #[instrument(skip(self, user_ids), fields(requested = user_ids.len()))]
    async fn resolve_many(&self, user_ids: &[Snowflake]) -> RepoResult<Vec<DirectoryUser>> {
        if user_ids.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<i64> = user_ids.iter().map(|id| id.into_inner()).collect();

        // Unknown ids are simply absent from the result; the leaderboard
        // builder drops those entries rather than failing the computation
        let results = sqlx::query_as::<_, UserModel>(
            r#"
            SELECT id, display_name FROM users WHERE id = ANY($1)
            "#,
        )
        .bind(&ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(DirectoryUser::from).collect())
    }
}
