//! Error handling utilities for repositories

use kudos_core::error::DomainError;
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
///
/// Connectivity failures become `Unavailable` (fail fast, retryable with
/// backoff); unique violations become `Conflict`; everything else is an
/// opaque storage error.
pub fn map_db_error(e: SqlxError) -> DomainError {
    match &e {
        SqlxError::PoolTimedOut | SqlxError::PoolClosed | SqlxError::Io(_) => {
            DomainError::Unavailable(e.to_string())
        }
        SqlxError::Database(db_err) if db_err.is_unique_violation() => {
            DomainError::Conflict(e.to_string())
        }
        _ => DomainError::StorageError(e.to_string()),
    }
}
