//! Leaderboard service
//!
//! Recomputes the ranked leaderboard from the submission ledger on every
//! query; no rank state is cached between calls.

use std::collections::HashMap;

use tracing::instrument;

use kudos_core::ranking::{aggregate_points, build_leaderboard};
use kudos_core::Snowflake;

use crate::dto::LeaderboardEntryResponse;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Leaderboard service
pub struct LeaderboardService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> LeaderboardService<'a> {
    /// Create a new LeaderboardService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Compute the current leaderboard
    #[instrument(skip(self))]
    pub async fn leaderboard(&self) -> ServiceResult<Vec<LeaderboardEntryResponse>> {
        let approved = self.ctx.ledger().list_approved().await?;
        let aggregates = aggregate_points(&approved);

        let user_ids: Vec<Snowflake> = aggregates.keys().copied().collect();
        let names: HashMap<Snowflake, String> = self
            .ctx
            .user_directory()
            .resolve_many(&user_ids)
            .await?
            .into_iter()
            .map(|user| (user.id, user.display_name))
            .collect();

        let entries = build_leaderboard(&aggregates, |id| names.get(&id).cloned());

        Ok(entries.iter().map(LeaderboardEntryResponse::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testing::test_context;
    use kudos_core::entities::{Submission, SubmissionStatus};

    fn approved(id: i64, student: i64, points: i64) -> Submission {
        Submission {
            id: Snowflake::new(id),
            student_id: Snowflake::new(student),
            category: "research".to_string(),
            status: SubmissionStatus::Approved,
            points,
            reviewed_at: None,
        }
    }

    #[tokio::test]
    async fn test_leaderboard_ranks_and_names() {
        let (ctx, fixtures) = test_context();
        fixtures.add_user(1, "Amara");
        fixtures.add_user(2, "Bao");
        fixtures.add_submission(approved(10, 1, 100));
        fixtures.add_submission(approved(11, 1, 100));
        fixtures.add_submission(approved(12, 2, 250));

        let board = LeaderboardService::new(&ctx).leaderboard().await.unwrap();

        assert_eq!(board.len(), 2);
        assert_eq!(board[0].display_name, "Bao");
        assert_eq!(board[0].rank, 1);
        assert_eq!(board[0].total_points, 250);
        assert_eq!(board[1].display_name, "Amara");
        assert_eq!(board[1].achievement_count, 2);
    }

    #[tokio::test]
    async fn test_unknown_user_dropped_from_board() {
        let (ctx, fixtures) = test_context();
        fixtures.add_user(1, "Amara");
        // Student 2 has points but no directory record
        fixtures.add_submission(approved(10, 1, 50));
        fixtures.add_submission(approved(11, 2, 500));

        let board = LeaderboardService::new(&ctx).leaderboard().await.unwrap();

        assert_eq!(board.len(), 1);
        assert_eq!(board[0].display_name, "Amara");
        assert_eq!(board[0].rank, 1);
    }

    #[tokio::test]
    async fn test_directory_only_user_excluded() {
        let (ctx, fixtures) = test_context();
        fixtures.add_user(1, "Amara");

        let board = LeaderboardService::new(&ctx).leaderboard().await.unwrap();
        assert!(board.is_empty());
    }
}
