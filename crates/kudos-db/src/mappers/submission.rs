//! Submission model -> entity mapper

use kudos_core::entities::{Submission, SubmissionStatus};
use kudos_core::value_objects::Snowflake;

use crate::models::SubmissionModel;

/// Convert SubmissionModel to Submission entity
///
/// Unknown status tags map to `Pending` so they can never count as approved.
impl From<SubmissionModel> for Submission {
    fn from(model: SubmissionModel) -> Self {
        Submission {
            id: Snowflake::new(model.id),
            student_id: Snowflake::new(model.student_id),
            category: model.category,
            status: SubmissionStatus::parse(&model.status).unwrap_or(SubmissionStatus::Pending),
            points: model.points,
            reviewed_at: model.reviewed_at,
        }
    }
}
