//! Notification database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the notifications table
#[derive(Debug, Clone, FromRow)]
pub struct NotificationModel {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub message: String,
    /// Notification kind tag stored as text
    pub kind: String,
    pub read: bool,
    pub created_at: DateTime<Utc>,
    pub link: Option<String>,
}
