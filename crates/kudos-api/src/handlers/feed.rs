//! Feed poll handlers
//!
//! Clients re-fetch on an interval instead of holding a push channel. Each
//! device names its own session; the server keeps one poll cursor per
//! session, which is what keeps multi-device use alert-exactly-once.

use axum::{
    extract::{Query, State},
    Json,
};
use kudos_service::{FeedPoll, FeedPollResponse, FeedService};
use serde::Deserialize;

use crate::extractors::{Identity, Pagination};
use crate::response::{ApiError, ApiResult, NoContent};
use crate::state::AppState;

/// Query parameters identifying the polling session
#[derive(Debug, Deserialize)]
pub struct FeedSessionParams {
    pub session: String,
}

/// Run one poll cycle for the caller's session
///
/// GET /api/v1/feed/poll?session={session_id}
pub async fn poll_feed(
    State(state): State<AppState>,
    identity: Identity,
    Query(params): Query<FeedSessionParams>,
    pagination: Pagination,
) -> ApiResult<Json<FeedPollResponse>> {
    if params.session.is_empty() {
        return Err(ApiError::invalid_query("session must not be empty"));
    }

    let service = FeedService::new(state.service_context());
    let poll = service
        .poll(identity.user_id, &params.session, pagination.limit)
        .await?;

    let response = match poll {
        FeedPoll::Updated(response) => response,
        FeedPoll::Unchanged => FeedPollResponse::unchanged(),
    };

    Ok(Json(response.with_interval(state.config().poll.interval_secs)))
}

/// End the caller's polling session
///
/// DELETE /api/v1/feed/session?session={session_id}
pub async fn end_feed_session(
    State(state): State<AppState>,
    _identity: Identity,
    Query(params): Query<FeedSessionParams>,
) -> ApiResult<NoContent> {
    let service = FeedService::new(state.service_context());
    service.end_session(&params.session);
    Ok(NoContent)
}
