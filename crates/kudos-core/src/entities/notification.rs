//! Notification entity - a per-user feed item with read state
//!
//! Notifications are created by producers (approval workflow, badge triggers,
//! admin broadcasts) and delivered to clients through polling. `created_at`
//! is immutable; `read` only ever transitions false -> true.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::Snowflake;

/// Notification category tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NotificationKind {
    #[default]
    Informational,
    Success,
    Error,
    AchievementAdded,
    SubmissionApproved,
    SubmissionRejected,
    BadgeEarned,
    CertificateIssued,
    Announcement,
    Motivational,
}

impl NotificationKind {
    /// All known kinds, in declaration order
    pub const ALL: [NotificationKind; 10] = [
        Self::Informational,
        Self::Success,
        Self::Error,
        Self::AchievementAdded,
        Self::SubmissionApproved,
        Self::SubmissionRejected,
        Self::BadgeEarned,
        Self::CertificateIssued,
        Self::Announcement,
        Self::Motivational,
    ];

    /// Stable string tag used in storage and APIs
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Informational => "informational",
            Self::Success => "success",
            Self::Error => "error",
            Self::AchievementAdded => "achievement-added",
            Self::SubmissionApproved => "submission-approved",
            Self::SubmissionRejected => "submission-rejected",
            Self::BadgeEarned => "badge-earned",
            Self::CertificateIssued => "certificate-issued",
            Self::Announcement => "announcement",
            Self::Motivational => "motivational",
        }
    }

    /// Parse from the stable string tag
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == s)
    }
}

impl std::fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Notification entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: Snowflake,
    pub user_id: Snowflake,
    pub title: String,
    pub message: String,
    pub kind: NotificationKind,
    pub read: bool,
    pub created_at: DateTime<Utc>,
    pub link: Option<String>,
}

impl Notification {
    /// Create a new unread Notification
    pub fn new(
        id: Snowflake,
        user_id: Snowflake,
        title: String,
        message: String,
        kind: NotificationKind,
        link: Option<String>,
    ) -> Self {
        Self {
            id,
            user_id,
            title,
            message,
            kind,
            read: false,
            created_at: Utc::now(),
            link,
        }
    }

    /// Transition to read; already-read is a no-op
    pub fn mark_read(&mut self) {
        self.read = true;
    }

    /// Check if this notification is still unread
    #[inline]
    pub fn is_unread(&self) -> bool {
        !self.read
    }
}
