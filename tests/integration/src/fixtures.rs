//! Test fixtures - request/response bodies and database seeding
//!
//! The submissions and users tables are owned by the surrounding product, so
//! tests seed them directly through the pool rather than through the API.

use std::sync::atomic::{AtomicI64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use chrono::{DateTime, Utc};
use kudos_db::{create_pool_from_env, PgPool};
use serde::{Deserialize, Serialize};

/// Counter mixed with the clock so ids stay unique across test runs
static ID_COUNTER: AtomicI64 = AtomicI64::new(0);

/// Generate a unique id for seeded rows
pub fn unique_id() -> i64 {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as i64)
        .unwrap_or(0);
    (nanos & 0x7FFF_FFFF_FFFF_0000) | (ID_COUNTER.fetch_add(1, Ordering::SeqCst) & 0xFFFF)
}

// ============================================================================
// Request bodies
// ============================================================================

/// Body for POST /api/v1/notifications
#[derive(Debug, Clone, Serialize)]
pub struct CreateNotificationBody {
    pub user_id: String,
    pub title: String,
    pub message: String,
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl CreateNotificationBody {
    /// A well-formed notification for the given recipient
    pub fn for_user(user_id: i64) -> Self {
        Self {
            user_id: user_id.to_string(),
            title: "Submission approved".to_string(),
            message: "Your hackathon entry earned 50 points".to_string(),
            kind: "submission-approved".to_string(),
            link: None,
        }
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    pub fn with_kind(mut self, kind: &str) -> Self {
        self.kind = kind.to_string();
        self
    }
}

// ============================================================================
// Response bodies
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct NotificationResponse {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub message: String,
    pub kind: String,
    pub read: bool,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub link: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UnreadCountResponse {
    pub unread_count: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MarkAllReadResponse {
    pub marked: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReactionCountsResponse {
    pub like: i64,
    pub love: i64,
    pub celebrate: i64,
    pub inspire: i64,
    pub total: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LeaderboardEntryResponse {
    pub rank: u32,
    pub user_id: String,
    pub display_name: String,
    pub total_points: i64,
    pub achievement_count: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FeedPollResponse {
    pub changed: bool,
    #[serde(default)]
    pub alert: Option<NotificationResponse>,
    pub notifications: Vec<NotificationResponse>,
    pub unread_count: i64,
    pub poll_interval_secs: u64,
}

// ============================================================================
// Database seeding
// ============================================================================

/// Direct pool handle for seeding the externally-owned tables
pub struct Seeder {
    pool: PgPool,
}

impl Seeder {
    /// Connect using DATABASE_URL
    pub async fn connect() -> Result<Self> {
        let pool = create_pool_from_env().await?;
        Ok(Self { pool })
    }

    /// Insert a directory user, returning its id
    pub async fn seed_user(&self, display_name: &str) -> Result<i64> {
        let id = unique_id();
        sqlx::query("INSERT INTO users (id, display_name) VALUES ($1, $2)")
            .bind(id)
            .bind(display_name)
            .execute(&self.pool)
            .await?;
        Ok(id)
    }

    /// Insert a submission for a student, returning its id
    pub async fn seed_submission(
        &self,
        student_id: i64,
        status: &str,
        points: i64,
    ) -> Result<i64> {
        let id = unique_id();
        sqlx::query(
            "INSERT INTO submissions (id, student_id, category, status, points, reviewed_at)
             VALUES ($1, $2, 'hackathon', $3, $4, NOW())",
        )
        .bind(id)
        .bind(student_id)
        .bind(status)
        .bind(points)
        .execute(&self.pool)
        .await?;
        Ok(id)
    }
}
