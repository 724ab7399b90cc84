//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::Snowflake;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Notification not found: {0}")]
    NotificationNotFound(Snowflake),

    #[error("User not found: {0}")]
    UserNotFound(Snowflake),

    // =========================================================================
    // Invalid Argument Errors
    // =========================================================================
    #[error("Unknown reaction kind: {0}")]
    InvalidReactionKind(String),

    #[error("Unknown notification kind: {0}")]
    InvalidNotificationKind(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Write conflict: {0}")]
    Conflict(String),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    /// Store unreachable; retryable by the caller with backoff
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotificationNotFound(_) => "UNKNOWN_NOTIFICATION",
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::InvalidReactionKind(_) => "INVALID_REACTION_KIND",
            Self::InvalidNotificationKind(_) => "INVALID_NOTIFICATION_KIND",
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::Conflict(_) => "CONFLICT",
            Self::Unavailable(_) => "STORE_UNAVAILABLE",
            Self::StorageError(_) => "STORAGE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotificationNotFound(_) | Self::UserNotFound(_))
    }

    /// Check if this is an invalid-argument error (rejected before any write)
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Self::InvalidReactionKind(_) | Self::InvalidNotificationKind(_) | Self::ValidationError(_)
        )
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict(_))
    }

    /// Check if the caller may retry with backoff
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Unavailable(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = DomainError::NotificationNotFound(Snowflake::new(1));
        assert_eq!(err.code(), "UNKNOWN_NOTIFICATION");

        let err = DomainError::InvalidReactionKind("dislike".to_string());
        assert_eq!(err.code(), "INVALID_REACTION_KIND");
    }

    #[test]
    fn test_is_not_found() {
        assert!(DomainError::NotificationNotFound(Snowflake::new(1)).is_not_found());
        assert!(DomainError::UserNotFound(Snowflake::new(1)).is_not_found());
        assert!(!DomainError::Conflict("x".to_string()).is_not_found());
    }

    #[test]
    fn test_is_invalid_argument() {
        assert!(DomainError::InvalidReactionKind("x".to_string()).is_invalid_argument());
        assert!(DomainError::InvalidNotificationKind("x".to_string()).is_invalid_argument());
        assert!(!DomainError::Unavailable("down".to_string()).is_invalid_argument());
    }

    #[test]
    fn test_is_retryable() {
        assert!(DomainError::Unavailable("timeout".to_string()).is_retryable());
        assert!(!DomainError::StorageError("bad row".to_string()).is_retryable());
    }

    #[test]
    fn test_error_display() {
        let err = DomainError::NotificationNotFound(Snowflake::new(123));
        assert_eq!(err.to_string(), "Notification not found: 123");

        let err = DomainError::InvalidReactionKind("dislike".to_string());
        assert_eq!(err.to_string(), "Unknown reaction kind: dislike");
    }
}
