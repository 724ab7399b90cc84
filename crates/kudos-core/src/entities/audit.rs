//! Audit entry - append-only record of what happened
//!
//! The audit trail is the system-of-record for actions; entries are never
//! mutated or deleted through normal flow.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::value_objects::Snowflake;

/// Audited action type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuditAction {
    Submit,
    Approve,
    Reject,
    Create,
    Delete,
    Login,
    Broadcast,
}

impl AuditAction {
    /// Stable string tag used in storage
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Submit => "submit",
            Self::Approve => "approve",
            Self::Reject => "reject",
            Self::Create => "create",
            Self::Delete => "delete",
            Self::Login => "login",
            Self::Broadcast => "broadcast",
        }
    }

    /// Parse from the stable string tag
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "submit" => Some(Self::Submit),
            "approve" => Some(Self::Approve),
            "reject" => Some(Self::Reject),
            "create" => Some(Self::Create),
            "delete" => Some(Self::Delete),
            "login" => Some(Self::Login),
            "broadcast" => Some(Self::Broadcast),
            _ => None,
        }
    }
}

/// Append-only audit entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditEntry {
    pub id: Snowflake,
    pub timestamp: DateTime<Utc>,
    pub actor_id: Snowflake,
    pub action: AuditAction,
    pub target_id: Option<Snowflake>,
    pub target_title: Option<String>,
    pub details: Option<JsonValue>,
}

impl AuditEntry {
    /// Create a new entry stamped with the current time
    pub fn new(id: Snowflake, actor_id: Snowflake, action: AuditAction) -> Self {
        Self {
            id,
            timestamp: Utc::now(),
            actor_id,
            action,
            target_id: None,
            target_title: None,
            details: None,
        }
    }

    /// Attach the acted-on record
    pub fn with_target(mut self, target_id: Snowflake, target_title: impl Into<String>) -> Self {
        self.target_id = Some(target_id);
        self.target_title = Some(target_title.into());
        self
    }

    /// Attach free-form details
    pub fn with_details(mut self, details: JsonValue) -> Self {
        self.details = Some(details);
        self
    }
}
