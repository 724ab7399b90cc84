//! Ranking - pure computations from the submission ledger
//!
//! Both functions are stateless and safe to call concurrently from any number
//! of callers; the leaderboard is derived on every query.

mod leaderboard;
mod points;

pub use leaderboard::build_leaderboard;
pub use points::{aggregate_points, PointsAggregate};
