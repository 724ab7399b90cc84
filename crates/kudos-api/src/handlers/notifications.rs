//! Notification handlers
//!
//! Endpoints for the per-user notification feed and its read state.

use axum::{
    extract::{Path, State},
    Json,
};
use kudos_service::{
    CreateNotificationRequest, MarkAllReadResponse, NotificationResponse, NotificationService,
    UnreadCountResponse,
};

use crate::extractors::{Identity, Pagination, ValidatedJson};
use crate::response::{ApiError, ApiResult, Created, NoContent};
use crate::state::AppState;

/// List the caller's notifications, newest first
///
/// GET /api/v1/notifications
pub async fn list_notifications(
    State(state): State<AppState>,
    identity: Identity,
    pagination: Pagination,
) -> ApiResult<Json<Vec<NotificationResponse>>> {
    let service = NotificationService::new(state.service_context());
    let notifications = service.list(identity.user_id, pagination.limit).await?;
    Ok(Json(notifications))
}

/// Count the caller's unread notifications
///
/// GET /api/v1/notifications/unread-count
pub async fn unread_count(
    State(state): State<AppState>,
    identity: Identity,
) -> ApiResult<Json<UnreadCountResponse>> {
    let service = NotificationService::new(state.service_context());
    let unread_count = service.unread_count(identity.user_id).await?;
    Ok(Json(UnreadCountResponse { unread_count }))
}

/// Create a notification (producer-facing)
///
/// POST /api/v1/notifications
pub async fn create_notification(
    State(state): State<AppState>,
    identity: Identity,
    ValidatedJson(request): ValidatedJson<CreateNotificationRequest>,
) -> ApiResult<Created<Json<NotificationResponse>>> {
    let service = NotificationService::new(state.service_context());
    let notification = service.create(identity.user_id, request).await?;
    Ok(Created(Json(notification)))
}

/// Mark one notification read (idempotent)
///
/// POST /api/v1/notifications/{id}/read
pub async fn mark_read(
    State(state): State<AppState>,
    _identity: Identity,
    Path(id): Path<String>,
) -> ApiResult<NoContent> {
    let id = id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid notification id format"))?;

    let service = NotificationService::new(state.service_context());
    service.mark_read(id).await?;
    Ok(NoContent)
}

/// Mark every unread notification read for the caller
///
/// POST /api/v1/notifications/read-all
pub async fn mark_all_read(
    State(state): State<AppState>,
    identity: Identity,
) -> ApiResult<Json<MarkAllReadResponse>> {
    let service = NotificationService::new(state.service_context());
    let marked = service.mark_all_read(identity.user_id).await?;
    Ok(Json(MarkAllReadResponse { marked }))
}

/// Hard-delete a notification (moderation)
///
/// DELETE /api/v1/notifications/{id}
pub async fn delete_notification(
    State(state): State<AppState>,
    identity: Identity,
    Path(id): Path<String>,
) -> ApiResult<NoContent> {
    let id = id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid notification id format"))?;

    let service = NotificationService::new(state.service_context());
    service.delete(identity.user_id, id).await?;
    Ok(NoContent)
}
