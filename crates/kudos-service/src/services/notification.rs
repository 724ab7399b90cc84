//! Notification service
//!
//! Owns the notification lifecycle: create, list, read-state transitions, and
//! the moderation hard-delete.

use tracing::{debug, info, instrument};

use kudos_core::entities::{AuditAction, AuditEntry, Notification, NotificationKind};
use kudos_core::{DomainError, Snowflake};

use crate::dto::{CreateNotificationRequest, NotificationResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Notification service
pub struct NotificationService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> NotificationService<'a> {
    /// Create a new NotificationService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a notification for a user
    ///
    /// The kind tag is validated against the fixed enumeration before any
    /// write reaches the store.
    #[instrument(skip(self, request), fields(user_id = %request.user_id))]
    pub async fn create(
        &self,
        actor_id: Snowflake,
        request: CreateNotificationRequest,
    ) -> ServiceResult<NotificationResponse> {
        let kind = NotificationKind::parse(&request.kind)
            .ok_or_else(|| DomainError::InvalidNotificationKind(request.kind.clone()))?;

        let notification = Notification::new(
            self.ctx.generate_id(),
            request.user_id,
            request.title,
            request.message,
            kind,
            request.link,
        );

        self.ctx.notification_repo().create(&notification).await?;

        info!(
            notification_id = %notification.id,
            user_id = %notification.user_id,
            kind = %notification.kind,
            "Notification created"
        );

        self.audit(
            AuditEntry::new(self.ctx.generate_id(), actor_id, AuditAction::Create)
                .with_target(notification.id, notification.title.clone()),
        );

        Ok(NotificationResponse::from(&notification))
    }

    /// List a user's notifications, newest first
    #[instrument(skip(self))]
    pub async fn list(
        &self,
        user_id: Snowflake,
        limit: i64,
    ) -> ServiceResult<Vec<NotificationResponse>> {
        let notifications = self
            .ctx
            .notification_repo()
            .list_for_user(user_id, limit)
            .await?;

        Ok(notifications.iter().map(NotificationResponse::from).collect())
    }

    /// Count a user's unread notifications
    #[instrument(skip(self))]
    pub async fn unread_count(&self, user_id: Snowflake) -> ServiceResult<i64> {
        Ok(self.ctx.notification_repo().unread_count(user_id).await?)
    }

    /// Mark one notification read
    ///
    /// Idempotent by design: an unknown id or an already-read row is a silent
    /// no-op so client retries never surface errors.
    #[instrument(skip(self))]
    pub async fn mark_read(&self, id: Snowflake) -> ServiceResult<()> {
        let updated = self.ctx.notification_repo().mark_read(id).await?;

        if !updated {
            debug!(notification_id = %id, "mark_read was a no-op");
        }

        Ok(())
    }

    /// Mark all of a user's unread notifications read in one sweep
    #[instrument(skip(self))]
    pub async fn mark_all_read(&self, user_id: Snowflake) -> ServiceResult<u64> {
        let marked = self.ctx.notification_repo().mark_all_read(user_id).await?;

        info!(user_id = %user_id, marked, "Marked all notifications read");

        Ok(marked)
    }

    /// Hard-delete a notification (moderation path)
    ///
    /// Unlike `mark_read`, this surfaces `NotFound` - a moderator deleting a
    /// missing record is a real error worth reporting.
    #[instrument(skip(self))]
    pub async fn delete(&self, actor_id: Snowflake, id: Snowflake) -> ServiceResult<()> {
        let notification = self
            .ctx
            .notification_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Notification", id.to_string()))?;

        self.ctx.reaction_repo().delete_for_notification(id).await?;
        self.ctx.notification_repo().delete(id).await?;

        info!(notification_id = %id, actor_id = %actor_id, "Notification deleted");

        self.audit(
            AuditEntry::new(self.ctx.generate_id(), actor_id, AuditAction::Delete)
                .with_target(id, notification.title),
        );

        Ok(())
    }

    /// Append an audit entry without blocking the triggering operation;
    /// failures are logged and swallowed
    fn audit(&self, entry: AuditEntry) {
        let sink = self.ctx.audit_sink();
        tokio::spawn(async move {
            if let Err(e) = sink.append(&entry).await {
                tracing::warn!(error = %e, action = entry.action.as_str(), "Audit append failed");
            }
        });
    }
}
