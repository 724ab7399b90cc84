//! PostgreSQL implementation of SubmissionLedger
//!
//! The submissions table is owned by the review workflow; this engine only
//! reads approved rows out of it.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use kudos_core::entities::Submission;
use kudos_core::traits::{RepoResult, SubmissionLedger};

use crate::models::SubmissionModel;

use super::error::map_db_error;

/// PostgreSQL implementation of SubmissionLedger
#[derive(Clone)]
pub struct PgSubmissionLedger {
    pool: PgPool,
}

impl PgSubmissionLedger {
    /// Create a new PgSubmissionLedger
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SubmissionLedger for PgSubmissionLedger {
    #[instrument(skip(self))]
    async fn list_approved(&self) -> RepoResult<Vec<Submission>> {
        let results = sqlx::query_as::<_, SubmissionModel>(
            r#"
            SELECT id, student_id, category, status, points, reviewed_at
            FROM submissions
            WHERE status = 'approved'
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Submission::from).collect())
    }
}
