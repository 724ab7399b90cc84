//! Repository traits (ports)

mod repositories;

pub use repositories::{
    AuditSink, NotificationRepository, ReactionRepository, RepoResult, SubmissionLedger,
    UserDirectory,
};
