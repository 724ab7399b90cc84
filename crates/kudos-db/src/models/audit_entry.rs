//! Audit entry database model

use chrono::{DateTime, Utc};
use serde_json::Value as JsonValue;
use sqlx::FromRow;

/// Database model for the audit_entries table (append-only)
#[derive(Debug, Clone, FromRow)]
pub struct AuditEntryModel {
    pub id: i64,
    pub timestamp: DateTime<Utc>,
    pub actor_id: i64,
    /// Audit action stored as text
    pub action: String,
    pub target_id: Option<i64>,
    pub target_title: Option<String>,
    /// JSON object carrying free-form context
    pub details: Option<JsonValue>,
}
