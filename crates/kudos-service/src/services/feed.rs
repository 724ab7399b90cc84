//! Feed service - drives the poll reconciliation protocol
//!
//! Each polling client (one session per device) calls `poll` on its own
//! interval. The service fetches the authoritative feed, runs it through the
//! session's cursor, and reports at most one alert per cycle. Poll results
//! always overwrite any optimistic local state on the client, which is why no
//! rollback path exists anywhere in this engine.

use tracing::{instrument, warn};

use kudos_core::feed::PollOutcome;
use kudos_core::Snowflake;

use crate::dto::{FeedPollResponse, NotificationResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Result of one poll cycle
#[derive(Debug)]
pub enum FeedPoll {
    /// Authoritative snapshot; overwrites client-local state
    Updated(FeedPollResponse),
    /// Store unreachable this cycle; prior client state stands
    Unchanged,
}

/// Feed service
pub struct FeedService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> FeedService<'a> {
    /// Create a new FeedService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Run one poll cycle for a client session
    ///
    /// A transient `Unavailable` from the store degrades to "no change this
    /// cycle": the session cursor is left untouched so the eventual
    /// successful poll alerts exactly once for whatever arrived meanwhile.
    #[instrument(skip(self))]
    pub async fn poll(
        &self,
        user_id: Snowflake,
        session_id: &str,
        limit: i64,
    ) -> ServiceResult<FeedPoll> {
        let notifications = match self
            .ctx
            .notification_repo()
            .list_for_user(user_id, limit)
            .await
        {
            Ok(list) => list,
            Err(e) if e.is_retryable() => {
                warn!(error = %e, session_id, "Feed poll degraded: store unavailable");
                return Ok(FeedPoll::Unchanged);
            }
            Err(e) => return Err(ServiceError::from(e)),
        };

        let unread_count = match self.ctx.notification_repo().unread_count(user_id).await {
            Ok(count) => count,
            Err(e) if e.is_retryable() => {
                warn!(error = %e, session_id, "Feed poll degraded: store unavailable");
                return Ok(FeedPoll::Unchanged);
            }
            Err(e) => return Err(ServiceError::from(e)),
        };

        // Advance the cursor only after both fetches succeeded
        let outcome = self.ctx.feed_sessions().observe(session_id, &notifications);
        let alert = match outcome {
            PollOutcome::NewArrival(notification) => {
                Some(NotificationResponse::from(&notification))
            }
            PollOutcome::Initial | PollOutcome::Quiet => None,
        };

        Ok(FeedPoll::Updated(FeedPollResponse {
            changed: true,
            alert,
            notifications: notifications.iter().map(NotificationResponse::from).collect(),
            unread_count,
            poll_interval_secs: 0,
        }))
    }

    /// End a client session, dropping its cursor
    pub fn end_session(&self, session_id: &str) -> bool {
        self.ctx.feed_sessions().end(session_id)
    }
}
