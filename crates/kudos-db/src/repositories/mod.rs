//! Repository implementations
//!
//! PostgreSQL implementations of the ports defined in kudos-core. Each
//! repository handles database operations for a specific collection.

mod audit;
mod error;
mod notification;
mod reaction;
mod submission;
mod user;

pub use audit::PgAuditSink;
pub use notification::PgNotificationRepository;
pub use reaction::PgReactionRepository;
pub use submission::PgSubmissionLedger;
pub use user::PgUserDirectory;
