//! PostgreSQL implementation of AuditSink
//!
//! Append-only: nothing in this engine updates or deletes audit rows.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use kudos_core::entities::AuditEntry;
use kudos_core::traits::{AuditSink, RepoResult};

use crate::mappers::AuditEntryInsert;

use super::error::map_db_error;

/// PostgreSQL implementation of AuditSink
#[derive(Clone)]
pub struct PgAuditSink {
    pool: PgPool,
}

impl PgAuditSink {
    /// Create a new PgAuditSink
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AuditSink for PgAuditSink {
    #[instrument(skip(self, entry), fields(action = entry.action.as_str()))]
    async fn append(&self, entry: &AuditEntry) -> RepoResult<()> {
        let insert = AuditEntryInsert::new(entry);

        sqlx::query(
            r#"
            INSERT INTO audit_entries (id, timestamp, actor_id, action, target_id, target_title, details)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(insert.id)
        .bind(entry.timestamp)
        .bind(insert.actor_id)
        .bind(insert.action)
        .bind(insert.target_id)
        .bind(insert.target_title)
        .bind(&entry.details)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }
}
