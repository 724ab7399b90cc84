//! Domain entity -> response DTO mappers

use kudos_core::entities::{LeaderboardEntry, Notification, ReactionCounts};

use super::responses::{LeaderboardEntryResponse, NotificationResponse, ReactionCountsResponse};

impl From<&Notification> for NotificationResponse {
    fn from(notification: &Notification) -> Self {
        Self {
            id: notification.id.to_string(),
            user_id: notification.user_id.to_string(),
            title: notification.title.clone(),
            message: notification.message.clone(),
            kind: notification.kind.as_str().to_string(),
            read: notification.read,
            created_at: notification.created_at,
            link: notification.link.clone(),
        }
    }
}

impl From<&LeaderboardEntry> for LeaderboardEntryResponse {
    fn from(entry: &LeaderboardEntry) -> Self {
        Self {
            rank: entry.rank,
            user_id: entry.user_id.to_string(),
            display_name: entry.display_name.clone(),
            total_points: entry.total_points,
            achievement_count: entry.achievement_count,
        }
    }
}

impl From<ReactionCounts> for ReactionCountsResponse {
    fn from(counts: ReactionCounts) -> Self {
        Self {
            like: counts.like,
            love: counts.love,
            celebrate: counts.celebrate,
            inspire: counts.inspire,
            total: counts.total(),
        }
    }
}
