//! Leaderboard handler
//!
//! The board is recomputed from the submission ledger on every call; callers
//! wanting a cache apply their own TTL.

use axum::{extract::State, Json};
use kudos_service::{LeaderboardEntryResponse, LeaderboardService};

use crate::response::ApiResult;
use crate::state::AppState;

/// Get the current leaderboard
///
/// GET /api/v1/leaderboard
pub async fn get_leaderboard(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<LeaderboardEntryResponse>>> {
    let service = LeaderboardService::new(state.service_context());
    let board = service.leaderboard().await?;
    Ok(Json(board))
}
