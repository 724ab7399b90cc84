//! Reaction handlers
//!
//! Endpoints for notification reactions. Toggle semantics live in the client:
//! it calls set to add or switch, delete to remove.

use axum::{
    extract::{Path, State},
    Json,
};
use kudos_service::{ReactionCountsResponse, ReactionService};

use crate::extractors::Identity;
use crate::response::{ApiError, ApiResult, NoContent};
use crate::state::AppState;

/// Set (or switch) own reaction
///
/// PUT /api/v1/notifications/{id}/reactions/{kind}
pub async fn set_reaction(
    State(state): State<AppState>,
    identity: Identity,
    Path((id, kind)): Path<(String, String)>,
) -> ApiResult<NoContent> {
    let notification_id = id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid notification id format"))?;

    let service = ReactionService::new(state.service_context());
    service
        .set_reaction(notification_id, identity.user_id, &kind)
        .await?;
    Ok(NoContent)
}

/// Remove own reaction
///
/// DELETE /api/v1/notifications/{id}/reactions
pub async fn clear_reaction(
    State(state): State<AppState>,
    identity: Identity,
    Path(id): Path<String>,
) -> ApiResult<NoContent> {
    let notification_id = id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid notification id format"))?;

    let service = ReactionService::new(state.service_context());
    service
        .clear_reaction(notification_id, identity.user_id)
        .await?;
    Ok(NoContent)
}

/// Get reaction counts for a notification
///
/// GET /api/v1/notifications/{id}/reactions
pub async fn get_reaction_counts(
    State(state): State<AppState>,
    _identity: Identity,
    Path(id): Path<String>,
) -> ApiResult<Json<ReactionCountsResponse>> {
    let notification_id = id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid notification id format"))?;

    let service = ReactionService::new(state.service_context());
    let counts = service.counts(notification_id).await?;
    Ok(Json(counts))
}
