//! Audit entry entity <-> model mapper

use kudos_core::entities::{AuditAction, AuditEntry};
use kudos_core::value_objects::Snowflake;

use crate::models::AuditEntryModel;

/// Convert AuditEntryModel to AuditEntry entity
impl From<AuditEntryModel> for AuditEntry {
    fn from(model: AuditEntryModel) -> Self {
        AuditEntry {
            id: Snowflake::new(model.id),
            timestamp: model.timestamp,
            actor_id: Snowflake::new(model.actor_id),
            action: AuditAction::parse(&model.action).unwrap_or(AuditAction::Create),
            target_id: model.target_id.map(Snowflake::new),
            target_title: model.target_title,
            details: model.details,
        }
    }
}

/// Convert AuditEntry entity reference to values for database insertion
pub struct AuditEntryInsert<'a> {
    pub id: i64,
    pub actor_id: i64,
    pub action: &'static str,
    pub target_id: Option<i64>,
    pub target_title: Option<&'a str>,
}

impl<'a> AuditEntryInsert<'a> {
    pub fn new(entry: &'a AuditEntry) -> Self {
        Self {
            id: entry.id.into_inner(),
            actor_id: entry.actor_id.into_inner(),
            action: entry.action.as_str(),
            target_id: entry.target_id.map(Snowflake::into_inner),
            target_title: entry.target_title.as_deref(),
        }
    }
}
