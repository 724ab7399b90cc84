//! Leaderboard entry - a derived ranking row
//!
//! Entries are recomputed from the submission ledger on every query and never
//! persisted; there is no mutable rank state to keep in sync.

use serde::Serialize;

use crate::value_objects::Snowflake;

/// One row of the ranked leaderboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeaderboardEntry {
    /// 1-based position in the sorted sequence; ties are not compressed
    pub rank: u32,
    pub user_id: Snowflake,
    pub display_name: String,
    pub total_points: i64,
    pub achievement_count: i64,
}
