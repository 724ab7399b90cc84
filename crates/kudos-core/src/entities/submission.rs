//! Submission entity - an achievement record owned by the review workflow
//!
//! Submissions are read-only to this engine: points are assigned once at
//! approval time and never adjusted afterwards. Only approved rows feed the
//! points aggregation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::Snowflake;

/// Review status of a submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    Pending,
    Approved,
    Rejected,
}

impl SubmissionStatus {
    /// Stable string tag used in storage and APIs
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }

    /// Parse from the stable string tag
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(Self::Pending),
            "approved" => Some(Self::Approved),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }
}

/// Achievement submission entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub id: Snowflake,
    pub student_id: Snowflake,
    pub category: String,
    pub status: SubmissionStatus,
    /// Awarded points, fixed at approval; zero until then
    pub points: i64,
    pub reviewed_at: Option<DateTime<Utc>>,
}

impl Submission {
    /// Check if this submission counts towards the leaderboard
    #[inline]
    pub fn is_approved(&self) -> bool {
        self.status == SubmissionStatus::Approved
    }
}
