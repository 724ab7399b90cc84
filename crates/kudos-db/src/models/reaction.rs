//! Reaction database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the reactions table
///
/// The primary key is `(notification_id, user_id)` - one row per user per
/// notification.
#[derive(Debug, Clone, FromRow)]
pub struct ReactionModel {
    pub notification_id: i64,
    pub user_id: i64,
    pub kind: String,
    pub updated_at: DateTime<Utc>,
}

/// Aggregated reaction count (from a grouped tally query)
#[derive(Debug, Clone, FromRow)]
pub struct ReactionCountModel {
    pub kind: String,
    pub count: i64,
}
