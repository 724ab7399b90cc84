//! Leaderboard construction from aggregated points

use std::collections::HashMap;

use crate::entities::LeaderboardEntry;
use crate::value_objects::Snowflake;

use super::points::PointsAggregate;

/// Project aggregates into ranked entries.
///
/// Sorted by total points descending with ties broken by ascending user id,
/// so repeated computation over the same input always yields the same order.
/// Ranks are sequential 1..N over the sorted sequence; ties share no
/// compressed rank. Users the resolver cannot name are dropped rather than
/// failing the whole computation, and ranks stay contiguous over what
/// remains.
pub fn build_leaderboard<F>(
    aggregates: &HashMap<Snowflake, PointsAggregate>,
    mut resolve_name: F,
) -> Vec<LeaderboardEntry>
where
    F: FnMut(Snowflake) -> Option<String>,
{
    let mut ranked: Vec<(Snowflake, PointsAggregate)> =
        aggregates.iter().map(|(id, agg)| (*id, *agg)).collect();

    ranked.sort_by(|(a_id, a), (b_id, b)| b.points.cmp(&a.points).then(a_id.cmp(b_id)));

    ranked
        .into_iter()
        .filter_map(|(user_id, agg)| {
            resolve_name(user_id).map(|display_name| (user_id, display_name, agg))
        })
        .enumerate()
        .map(|(index, (user_id, display_name, agg))| LeaderboardEntry {
            rank: index as u32 + 1,
            user_id,
            display_name,
            total_points: agg.points,
            achievement_count: agg.count,
        })
        .collect()
}
