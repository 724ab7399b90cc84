//! Reaction entity <-> model mapper

use kudos_core::entities::{Reaction, ReactionKind};
use kudos_core::value_objects::Snowflake;

use crate::models::ReactionModel;

/// Convert ReactionModel to Reaction entity
///
/// The kind column is constrained at write time, so an unparseable tag means
/// a corrupted row; it degrades to `Like` with the row kept visible.
impl From<ReactionModel> for Reaction {
    fn from(model: ReactionModel) -> Self {
        Reaction {
            notification_id: Snowflake::new(model.notification_id),
            user_id: Snowflake::new(model.user_id),
            kind: ReactionKind::parse(&model.kind).unwrap_or(ReactionKind::Like),
            updated_at: model.updated_at,
        }
    }
}

/// Convert Reaction entity reference to values for database insertion
pub struct ReactionInsert {
    pub notification_id: i64,
    pub user_id: i64,
    pub kind: &'static str,
}

impl ReactionInsert {
    pub fn new(reaction: &Reaction) -> Self {
        Self {
            notification_id: reaction.notification_id.into_inner(),
            user_id: reaction.user_id.into_inner(),
            kind: reaction.kind.as_str(),
        }
    }
}
