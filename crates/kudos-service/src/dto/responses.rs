//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.
//! Snowflake IDs are serialized as strings for JavaScript compatibility.

use chrono::{DateTime, Utc};
use serde::Serialize;

// ============================================================================
// Leaderboard Responses
// ============================================================================

/// One ranked leaderboard row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeaderboardEntryResponse {
    pub rank: u32,
    pub user_id: String,
    pub display_name: String,
    pub total_points: i64,
    pub achievement_count: i64,
}

// ============================================================================
// Notification Responses
// ============================================================================

/// A notification feed item
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotificationResponse {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub message: String,
    pub kind: String,
    pub read: bool,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

/// Unread counter for the badge in the client header
#[derive(Debug, Clone, Serialize)]
pub struct UnreadCountResponse {
    pub unread_count: i64,
}

/// Result of a read-all sweep
#[derive(Debug, Clone, Serialize)]
pub struct MarkAllReadResponse {
    pub marked: u64,
}

// ============================================================================
// Reaction Responses
// ============================================================================

/// Per-kind reaction tally for one notification
#[derive(Debug, Clone, Serialize)]
pub struct ReactionCountsResponse {
    pub like: i64,
    pub love: i64,
    pub celebrate: i64,
    pub inspire: i64,
    pub total: i64,
}

// ============================================================================
// Feed Poll Responses
// ============================================================================

/// One poll cycle's result
///
/// `changed == false` means the store was unreachable this cycle; the client
/// keeps its prior local state and retries on the next interval. Otherwise
/// the payload is authoritative and overwrites any optimistic local state.
#[derive(Debug, Clone, Serialize)]
pub struct FeedPollResponse {
    pub changed: bool,
    /// The single newest item to alert on, if any arrived since the last poll
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alert: Option<NotificationResponse>,
    pub notifications: Vec<NotificationResponse>,
    pub unread_count: i64,
    /// Suggested seconds until the next poll; interval policy lives with the
    /// server config, not the reconciliation protocol
    pub poll_interval_secs: u64,
}

impl FeedPollResponse {
    /// A cycle where the store was unreachable; prior client state stands
    pub fn unchanged() -> Self {
        Self {
            changed: false,
            alert: None,
            notifications: Vec::new(),
            unread_count: 0,
            poll_interval_secs: 0,
        }
    }

    /// Stamp the suggested poll cadence
    pub fn with_interval(mut self, secs: u64) -> Self {
        self.poll_interval_secs = secs;
        self
    }
}

// ============================================================================
// Health Responses
// ============================================================================

/// Liveness probe body
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self { status: "ok" }
    }
}

/// Readiness probe body with dependency health
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub ready: bool,
    pub database: bool,
}

impl ReadinessResponse {
    pub fn ready(database: bool) -> Self {
        Self {
            ready: database,
            database,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unchanged_poll_response() {
        let response = FeedPollResponse::unchanged();
        assert!(!response.changed);
        assert!(response.alert.is_none());
        assert!(response.notifications.is_empty());
    }

    #[test]
    fn test_health_response() {
        let json = serde_json::to_value(HealthResponse::healthy()).unwrap();
        assert_eq!(json["status"], "ok");
    }

    #[test]
    fn test_link_omitted_when_absent() {
        let response = NotificationResponse {
            id: "1".to_string(),
            user_id: "2".to_string(),
            title: "t".to_string(),
            message: "m".to_string(),
            kind: "informational".to_string(),
            read: false,
            created_at: Utc::now(),
            link: None,
        };
        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("link").is_none());
    }
}
