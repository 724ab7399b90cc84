//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. The submission ledger and user directory are
//! owned by external collaborators; this engine only reads them.

use async_trait::async_trait;

use crate::entities::{AuditEntry, DirectoryUser, Notification, Reaction, ReactionKind, Submission};
use crate::error::DomainError;
use crate::value_objects::Snowflake;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Submission Ledger (external, read-only)
// ============================================================================

#[async_trait]
pub trait SubmissionLedger: Send + Sync {
    /// All approved submissions; the only rows that feed aggregation
    async fn list_approved(&self) -> RepoResult<Vec<Submission>>;
}

// ============================================================================
// User Directory (external, read-only)
// ============================================================================

#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Resolve a single user id to its directory record
    async fn resolve(&self, user_id: Snowflake) -> RepoResult<Option<DirectoryUser>>;

    /// Resolve a batch of user ids; unknown ids are simply absent from the result
    async fn resolve_many(&self, user_ids: &[Snowflake]) -> RepoResult<Vec<DirectoryUser>>;
}

// ============================================================================
// Notification Repository
// ============================================================================

#[async_trait]
pub trait NotificationRepository: Send + Sync {
    /// Find notification by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Notification>>;

    /// List a user's notifications, newest first
    ///
    /// The ordering is load-bearing: the poll reconciler treats element 0 as
    /// "the newest item".
    async fn list_for_user(&self, user_id: Snowflake, limit: i64) -> RepoResult<Vec<Notification>>;

    /// Persist a new notification
    async fn create(&self, notification: &Notification) -> RepoResult<()>;

    /// Set `read = true`; returns false if the row was missing or already read
    async fn mark_read(&self, id: Snowflake) -> RepoResult<bool>;

    /// Set `read = true` on every unread row for the user in one statement;
    /// returns the number of rows updated
    async fn mark_all_read(&self, user_id: Snowflake) -> RepoResult<u64>;

    /// Count unread rows for the user
    async fn unread_count(&self, user_id: Snowflake) -> RepoResult<i64>;

    /// Hard delete (moderation path); returns false if the row was missing
    async fn delete(&self, id: Snowflake) -> RepoResult<bool>;
}

// ============================================================================
// Reaction Repository
// ============================================================================

#[async_trait]
pub trait ReactionRepository: Send + Sync {
    /// Find the reaction a user holds on a notification
    async fn find(&self, notification_id: Snowflake, user_id: Snowflake)
        -> RepoResult<Option<Reaction>>;

    /// Insert or overwrite the `(notification_id, user_id)` row in place
    async fn upsert(&self, reaction: &Reaction) -> RepoResult<()>;

    /// Delete the row if present; returns false otherwise
    async fn delete(&self, notification_id: Snowflake, user_id: Snowflake) -> RepoResult<bool>;

    /// Delete all reactions on a notification (moderation cascade)
    async fn delete_for_notification(&self, notification_id: Snowflake) -> RepoResult<()>;

    /// Tally current rows grouped by kind
    ///
    /// Always computed from the rows themselves, never from separately
    /// maintained counters.
    async fn count_by_kind(&self, notification_id: Snowflake)
        -> RepoResult<Vec<(ReactionKind, i64)>>;
}

// ============================================================================
// Audit Sink
// ============================================================================

#[async_trait]
pub trait AuditSink: Send + Sync {
    /// Append an entry; failures must not block the triggering operation
    async fn append(&self, entry: &AuditEntry) -> RepoResult<()>;
}
