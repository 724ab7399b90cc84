//! Request DTOs with validation
//!
//! Structural validation (lengths, presence) lives here via the `validator`
//! derive; tag validation (notification/reaction kinds) is a domain concern
//! and happens in the services before any write.

use kudos_core::Snowflake;
use serde::Deserialize;
use validator::Validate;

/// Request body for creating a notification (producer-facing)
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateNotificationRequest {
    /// Recipient user id
    pub user_id: Snowflake,

    #[validate(length(min = 1, max = 200, message = "title must be 1-200 characters"))]
    pub title: String,

    #[validate(length(min = 1, max = 2000, message = "message must be 1-2000 characters"))]
    pub message: String,

    /// Kind tag from the fixed enumeration; unknown tags are rejected before
    /// any write
    #[validate(length(min = 1, max = 64))]
    pub kind: String,

    #[validate(length(max = 500, message = "link must be at most 500 characters"))]
    pub link: Option<String>,
}
