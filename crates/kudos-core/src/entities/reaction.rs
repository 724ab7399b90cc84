//! Reaction entity - an emoji reaction on a notification
//!
//! Keyed by `(notification_id, user_id)`: a user holds at most one reaction
//! per notification, and switching kinds overwrites the row in place.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::Snowflake;

/// Reaction kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReactionKind {
    Like,
    Love,
    Celebrate,
    Inspire,
}

impl ReactionKind {
    /// All known kinds, in declaration order
    pub const ALL: [ReactionKind; 4] = [Self::Like, Self::Love, Self::Celebrate, Self::Inspire];

    /// Stable string tag used in storage and APIs
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Like => "like",
            Self::Love => "love",
            Self::Celebrate => "celebrate",
            Self::Inspire => "inspire",
        }
    }

    /// Parse from the stable string tag
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == s)
    }
}

impl std::fmt::Display for ReactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reaction entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reaction {
    pub notification_id: Snowflake,
    pub user_id: Snowflake,
    pub kind: ReactionKind,
    pub updated_at: DateTime<Utc>,
}

impl Reaction {
    /// Create a new Reaction
    pub fn new(notification_id: Snowflake, user_id: Snowflake, kind: ReactionKind) -> Self {
        Self {
            notification_id,
            user_id,
            kind,
            updated_at: Utc::now(),
        }
    }
}

/// Per-kind reaction tally for one notification
///
/// Always derived from the reaction rows themselves; the struct carries no
/// independently mutated counters that could drift from the underlying set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ReactionCounts {
    pub like: i64,
    pub love: i64,
    pub celebrate: i64,
    pub inspire: i64,
}

impl ReactionCounts {
    /// Build counts from `(kind, count)` pairs as produced by a grouped tally
    pub fn from_tally<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (ReactionKind, i64)>,
    {
        let mut counts = Self::default();
        for (kind, count) in pairs {
            *counts.slot_mut(kind) += count;
        }
        counts
    }

    /// Count for a single kind
    pub fn of(&self, kind: ReactionKind) -> i64 {
        match kind {
            ReactionKind::Like => self.like,
            ReactionKind::Love => self.love,
            ReactionKind::Celebrate => self.celebrate,
            ReactionKind::Inspire => self.inspire,
        }
    }

    /// Total reactions across all kinds
    pub fn total(&self) -> i64 {
        self.like + self.love + self.celebrate + self.inspire
    }

    fn slot_mut(&mut self, kind: ReactionKind) -> &mut i64 {
        match kind {
            ReactionKind::Like => &mut self.like,
            ReactionKind::Love => &mut self.love,
            ReactionKind::Celebrate => &mut self.celebrate,
            ReactionKind::Inspire => &mut self.inspire,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_round_trip() {
        for kind in ReactionKind::ALL {
            assert_eq!(ReactionKind::parse(kind.as_str()), Some(kind));
        }
        assert_eq!(ReactionKind::parse("dislike"), None);
    }

    #[test]
    fn test_reaction_creation() {
        let reaction = Reaction::new(Snowflake::new(1), Snowflake::new(100), ReactionKind::Love);
        assert_eq!(reaction.notification_id, Snowflake::new(1));
        assert_eq!(reaction.user_id, Snowflake::new(100));
        assert_eq!(reaction.kind, ReactionKind::Love);
    }

    #[test]
    fn test_counts_from_tally() {
        let counts = ReactionCounts::from_tally([
            (ReactionKind::Like, 3),
            (ReactionKind::Celebrate, 1),
        ]);
        assert_eq!(counts.like, 3);
        assert_eq!(counts.love, 0);
        assert_eq!(counts.celebrate, 1);
        assert_eq!(counts.inspire, 0);
        assert_eq!(counts.total(), 4);
    }

    #[test]
    fn test_counts_of() {
        let counts = ReactionCounts::from_tally([(ReactionKind::Inspire, 2)]);
        assert_eq!(counts.of(ReactionKind::Inspire), 2);
        assert_eq!(counts.of(ReactionKind::Like), 0);
    }
}
