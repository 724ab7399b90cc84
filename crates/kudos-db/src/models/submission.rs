//! Submission database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the submissions table (read-only to this engine)
#[derive(Debug, Clone, FromRow)]
pub struct SubmissionModel {
    pub id: i64,
    pub student_id: i64,
    pub category: String,
    /// Review status stored as text: pending / approved / rejected
    pub status: String,
    pub points: i64,
    pub reviewed_at: Option<DateTime<Utc>>,
}
