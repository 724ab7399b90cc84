//! Reaction service
//!
//! Maintains at-most-one reaction per (notification, user) and serves
//! tally-derived counts. Toggle behavior is the caller's choice between the
//! two explicit operations: set to switch kinds, clear to remove.

use tracing::{info, instrument};

use kudos_core::entities::{Reaction, ReactionCounts, ReactionKind};
use kudos_core::{DomainError, Snowflake};

use crate::dto::ReactionCountsResponse;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Reaction service
pub struct ReactionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReactionService<'a> {
    /// Create a new ReactionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Set (or switch) the caller's reaction on a notification
    ///
    /// The kind tag is validated before any write; an unknown notification id
    /// surfaces `NotFound`. The upsert keeps the old kind's count and the new
    /// kind's count consistent as a single row change.
    #[instrument(skip(self))]
    pub async fn set_reaction(
        &self,
        notification_id: Snowflake,
        user_id: Snowflake,
        kind: &str,
    ) -> ServiceResult<()> {
        let kind = ReactionKind::parse(kind)
            .ok_or_else(|| DomainError::InvalidReactionKind(kind.to_string()))?;

        self.require_notification(notification_id).await?;

        let reaction = Reaction::new(notification_id, user_id, kind);
        self.ctx.reaction_repo().upsert(&reaction).await?;

        info!(
            notification_id = %notification_id,
            user_id = %user_id,
            kind = %kind,
            "Reaction set"
        );

        Ok(())
    }

    /// Remove the caller's reaction from a notification
    ///
    /// Idempotent: a missing row (or a vanished notification) is a silent
    /// no-op so client retries never surface errors.
    #[instrument(skip(self))]
    pub async fn clear_reaction(
        &self,
        notification_id: Snowflake,
        user_id: Snowflake,
    ) -> ServiceResult<()> {
        let removed = self
            .ctx
            .reaction_repo()
            .delete(notification_id, user_id)
            .await?;

        if removed {
            info!(
                notification_id = %notification_id,
                user_id = %user_id,
                "Reaction cleared"
            );
        }

        Ok(())
    }

    /// Tally reactions on a notification by kind
    #[instrument(skip(self))]
    pub async fn counts(&self, notification_id: Snowflake) -> ServiceResult<ReactionCountsResponse> {
        self.require_notification(notification_id).await?;

        let tally = self
            .ctx
            .reaction_repo()
            .count_by_kind(notification_id)
            .await?;

        Ok(ReactionCountsResponse::from(ReactionCounts::from_tally(tally)))
    }

    async fn require_notification(&self, notification_id: Snowflake) -> ServiceResult<()> {
        self.ctx
            .notification_repo()
            .find_by_id(notification_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Notification", notification_id.to_string()))?;
        Ok(())
    }
}
