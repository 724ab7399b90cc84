//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::handlers::{feed, health, leaderboard, notifications, reactions};
use crate::state::AppState;

/// Create the main API router with all routes (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new()
        // API v1 endpoints
        .nest("/api/v1", api_v1_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(leaderboard_routes())
        .merge(notification_routes())
        .merge(feed_routes())
}

/// Leaderboard routes
fn leaderboard_routes() -> Router<AppState> {
    Router::new().route("/leaderboard", get(leaderboard::get_leaderboard))
}

/// Notification and reaction routes
fn notification_routes() -> Router<AppState> {
    Router::new()
        // Notification feed
        .route("/notifications", get(notifications::list_notifications))
        .route("/notifications", post(notifications::create_notification))
        .route("/notifications/unread-count", get(notifications::unread_count))
        .route("/notifications/read-all", post(notifications::mark_all_read))
        .route("/notifications/:id/read", post(notifications::mark_read))
        .route("/notifications/:id", delete(notifications::delete_notification))
        // Reactions
        .route(
            "/notifications/:id/reactions/:kind",
            put(reactions::set_reaction),
        )
        .route(
            "/notifications/:id/reactions",
            delete(reactions::clear_reaction),
        )
        .route(
            "/notifications/:id/reactions",
            get(reactions::get_reaction_counts),
        )
}

/// Feed poll routes
fn feed_routes() -> Router<AppState> {
    Router::new()
        .route("/feed/poll", get(feed::poll_feed))
        .route("/feed/session", delete(feed::end_feed_session))
}
