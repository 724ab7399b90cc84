//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance with the migrations applied
//! - Environment variable: DATABASE_URL
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_json, assert_status, check_test_env, fixtures::*, TestServer,
};
use reqwest::StatusCode;

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Notification Tests
// ============================================================================

#[tokio::test]
async fn test_create_and_list_notifications() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let user = unique_id();
    let producer = unique_id();

    let first = CreateNotificationBody::for_user(user).with_title("First");
    let second = CreateNotificationBody::for_user(user).with_title("Second");

    let response = server.post_as("/api/v1/notifications", producer, &first).await.unwrap();
    let created: NotificationResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(created.title, "First");
    assert!(!created.read);

    server.post_as("/api/v1/notifications", producer, &second).await.unwrap();

    // Newest first
    let response = server.get_as("/api/v1/notifications", user).await.unwrap();
    let listed: Vec<NotificationResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].title, "Second");
    assert_eq!(listed[1].title, "First");
}

#[tokio::test]
async fn test_create_notification_rejects_unknown_kind() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let user = unique_id();

    let body = CreateNotificationBody::for_user(user).with_kind("shouting");
    let response = server.post_as("/api/v1/notifications", unique_id(), &body).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    // Nothing was written
    let response = server.get_as("/api/v1/notifications", user).await.unwrap();
    let listed: Vec<NotificationResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(listed.is_empty());
}

#[tokio::test]
async fn test_notifications_require_identity() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let response = server.get("/api/v1/notifications").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_unread_count_matches_list() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let user = unique_id();
    let producer = unique_id();

    for title in ["A", "B", "C"] {
        let body = CreateNotificationBody::for_user(user).with_title(title);
        server.post_as("/api/v1/notifications", producer, &body).await.unwrap();
    }

    let response = server.get_as("/api/v1/notifications", user).await.unwrap();
    let listed: Vec<NotificationResponse> = assert_json(response, StatusCode::OK).await.unwrap();

    // Read one
    let target = &listed[1].id;
    let response = server
        .post_empty_as(&format!("/api/v1/notifications/{target}/read"), user)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server.get_as("/api/v1/notifications/unread-count", user).await.unwrap();
    let count: UnreadCountResponse = assert_json(response, StatusCode::OK).await.unwrap();

    let response = server.get_as("/api/v1/notifications", user).await.unwrap();
    let listed: Vec<NotificationResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    let unread_in_list = listed.iter().filter(|n| !n.read).count() as i64;

    assert_eq!(count.unread_count, unread_in_list);
    assert_eq!(count.unread_count, 2);
}

#[tokio::test]
async fn test_mark_read_is_idempotent() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let user = unique_id();

    let body = CreateNotificationBody::for_user(user);
    let response = server.post_as("/api/v1/notifications", unique_id(), &body).await.unwrap();
    let created: NotificationResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let path = format!("/api/v1/notifications/{}/read", created.id);
    for _ in 0..2 {
        let response = server.post_empty_as(&path, user).await.unwrap();
        assert_status(response, StatusCode::NO_CONTENT).await.unwrap();
    }

    // Unknown id is also a silent no-op
    let response = server
        .post_empty_as("/api/v1/notifications/31337/read", user)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server.get_as("/api/v1/notifications/unread-count", user).await.unwrap();
    let count: UnreadCountResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(count.unread_count, 0);
}

#[tokio::test]
async fn test_mark_all_read() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let user = unique_id();
    let producer = unique_id();

    for _ in 0..4 {
        let body = CreateNotificationBody::for_user(user);
        server.post_as("/api/v1/notifications", producer, &body).await.unwrap();
    }

    let response = server
        .post_empty_as("/api/v1/notifications/read-all", user)
        .await
        .unwrap();
    let marked: MarkAllReadResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(marked.marked, 4);

    let response = server.get_as("/api/v1/notifications/unread-count", user).await.unwrap();
    let count: UnreadCountResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(count.unread_count, 0);

    // Second sweep has nothing left to do
    let response = server
        .post_empty_as("/api/v1/notifications/read-all", user)
        .await
        .unwrap();
    let marked: MarkAllReadResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(marked.marked, 0);
}

#[tokio::test]
async fn test_delete_notification() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let user = unique_id();
    let moderator = unique_id();

    let body = CreateNotificationBody::for_user(user);
    let response = server.post_as("/api/v1/notifications", moderator, &body).await.unwrap();
    let created: NotificationResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let path = format!("/api/v1/notifications/{}", created.id);
    let response = server.delete_as(&path, moderator).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    // Deleting a missing notification is a real error, unlike mark_read
    let response = server.delete_as(&path, moderator).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Reaction Tests
// ============================================================================

async fn create_notification(server: &TestServer, user: i64) -> NotificationResponse {
    let body = CreateNotificationBody::for_user(user);
    let response = server
        .post_as("/api/v1/notifications", unique_id(), &body)
        .await
        .unwrap();
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

#[tokio::test]
async fn test_reaction_switch_is_exclusive() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let user = unique_id();
    let notification = create_notification(&server, user).await;

    let base = format!("/api/v1/notifications/{}/reactions", notification.id);

    let response = server.put_as(&format!("{base}/like"), user).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server.put_as(&format!("{base}/love"), user).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server.get_as(&base, user).await.unwrap();
    let counts: ReactionCountsResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(counts.like, 0);
    assert_eq!(counts.love, 1);
    assert_eq!(counts.total, 1);
}

#[tokio::test]
async fn test_clear_reaction() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let user = unique_id();
    let notification = create_notification(&server, user).await;

    let base = format!("/api/v1/notifications/{}/reactions", notification.id);

    server.put_as(&format!("{base}/celebrate"), user).await.unwrap();

    let response = server.delete_as(&base, user).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    // Clearing again is a silent no-op
    let response = server.delete_as(&base, user).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server.get_as(&base, user).await.unwrap();
    let counts: ReactionCountsResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(counts.total, 0);
}

#[tokio::test]
async fn test_reaction_rejects_unknown_kind() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let user = unique_id();
    let notification = create_notification(&server, user).await;

    let response = server
        .put_as(
            &format!("/api/v1/notifications/{}/reactions/dislike", notification.id),
            user,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_reaction_on_missing_notification() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let user = unique_id();

    let response = server
        .put_as("/api/v1/notifications/31337/reactions/like", user)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Feed Poll Tests
// ============================================================================

#[tokio::test]
async fn test_feed_poll_alerts_exactly_once() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let user = unique_id();
    let producer = unique_id();
    let session = uuid::Uuid::new_v4().to_string();
    let path = format!("/api/v1/feed/poll?session={session}");

    // Seed history before the session starts
    let body = CreateNotificationBody::for_user(user).with_title("Old");
    server.post_as("/api/v1/notifications", producer, &body).await.unwrap();

    // Initial poll: history never replays as new
    let response = server.get_as(&path, user).await.unwrap();
    let poll: FeedPollResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(poll.changed);
    assert!(poll.alert.is_none());
    assert_eq!(poll.notifications.len(), 1);
    assert!(poll.poll_interval_secs > 0);

    // Quiet cycle
    let response = server.get_as(&path, user).await.unwrap();
    let poll: FeedPollResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(poll.alert.is_none());

    // A new notification arrives: exactly one alert
    let body = CreateNotificationBody::for_user(user).with_title("Fresh");
    server.post_as("/api/v1/notifications", producer, &body).await.unwrap();

    let response = server.get_as(&path, user).await.unwrap();
    let poll: FeedPollResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(poll.alert.as_ref().unwrap().title, "Fresh");
    assert_eq!(poll.unread_count, 2);

    // And never again
    let response = server.get_as(&path, user).await.unwrap();
    let poll: FeedPollResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(poll.alert.is_none());
}

#[tokio::test]
async fn test_feed_sessions_are_independent() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let user = unique_id();
    let producer = unique_id();
    let phone = format!("/api/v1/feed/poll?session=phone-{user}");
    let laptop = format!("/api/v1/feed/poll?session=laptop-{user}");

    server.get_as(&phone, user).await.unwrap();

    let body = CreateNotificationBody::for_user(user).with_title("Ping");
    server.post_as("/api/v1/notifications", producer, &body).await.unwrap();

    // The laptop session starts after the item exists: no alert
    let response = server.get_as(&laptop, user).await.unwrap();
    let poll: FeedPollResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(poll.alert.is_none());

    // The phone session alerts for it
    let response = server.get_as(&phone, user).await.unwrap();
    let poll: FeedPollResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(poll.alert.as_ref().unwrap().title, "Ping");
}

// ============================================================================
// Leaderboard Tests
// ============================================================================

#[tokio::test]
async fn test_leaderboard_ranks_approved_points() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let seeder = Seeder::connect().await.unwrap();

    let amara = seeder.seed_user("Amara").await.unwrap();
    let bao = seeder.seed_user("Bao").await.unwrap();
    let idle = seeder.seed_user("Idle").await.unwrap();

    seeder.seed_submission(amara, "approved", 100).await.unwrap();
    seeder.seed_submission(amara, "approved", 100).await.unwrap();
    seeder.seed_submission(amara, "approved", 100).await.unwrap();
    seeder.seed_submission(bao, "approved", 100).await.unwrap();
    seeder.seed_submission(bao, "pending", 100).await.unwrap();
    seeder.seed_submission(bao, "rejected", 100).await.unwrap();

    let response = server.get("/api/v1/leaderboard").await.unwrap();
    let board: Vec<LeaderboardEntryResponse> = assert_json(response, StatusCode::OK).await.unwrap();

    let amara_entry = board
        .iter()
        .find(|e| e.user_id == amara.to_string())
        .expect("Amara on board");
    assert_eq!(amara_entry.total_points, 300);
    assert_eq!(amara_entry.achievement_count, 3);

    let bao_entry = board
        .iter()
        .find(|e| e.user_id == bao.to_string())
        .expect("Bao on board");
    assert_eq!(bao_entry.total_points, 100);
    assert_eq!(bao_entry.achievement_count, 1);

    assert!(amara_entry.rank < bao_entry.rank);

    // A user with zero approved submissions never appears
    assert!(board.iter().all(|e| e.user_id != idle.to_string()));
}

#[tokio::test]
async fn test_leaderboard_is_deterministic() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();

    let response = server.get("/api/v1/leaderboard").await.unwrap();
    let first: Vec<LeaderboardEntryResponse> = assert_json(response, StatusCode::OK).await.unwrap();

    let response = server.get("/api/v1/leaderboard").await.unwrap();
    let second: Vec<LeaderboardEntryResponse> = assert_json(response, StatusCode::OK).await.unwrap();

    let ranks_first: Vec<(u32, String)> = first.iter().map(|e| (e.rank, e.user_id.clone())).collect();
    let ranks_second: Vec<(u32, String)> = second.iter().map(|e| (e.rank, e.user_id.clone())).collect();
    assert_eq!(ranks_first, ranks_second);
}
