//! Service context - dependency container for services
//!
//! Holds the repositories (ports), the id generator, and the per-session poll
//! cursor registry shared by all services.

use std::sync::Arc;

use dashmap::DashMap;

use kudos_core::feed::{PollCursor, PollOutcome};
use kudos_core::traits::{
    AuditSink, NotificationRepository, ReactionRepository, SubmissionLedger, UserDirectory,
};
use kudos_core::{Notification, Snowflake, SnowflakeGenerator};

/// Registry of per-session poll cursors
///
/// Every polling client session (one per connected device) owns an
/// independent cursor, so multi-device use needs no extra coordination.
#[derive(Default)]
pub struct FeedSessions {
    cursors: DashMap<String, PollCursor>,
}

impl FeedSessions {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Run one poll cycle through the session's cursor, creating the session
    /// on first contact
    pub fn observe(&self, session_id: &str, current: &[Notification]) -> PollOutcome {
        self.cursors
            .entry(session_id.to_string())
            .or_default()
            .observe(current)
    }

    /// Drop a session's cursor; the next poll starts as a fresh session
    pub fn end(&self, session_id: &str) -> bool {
        self.cursors.remove(session_id).is_some()
    }

    /// Number of live sessions
    pub fn len(&self) -> usize {
        self.cursors.len()
    }

    /// Whether no sessions are live
    pub fn is_empty(&self) -> bool {
        self.cursors.is_empty()
    }
}

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
/// It provides access to:
/// - The submission ledger and user directory (external, read-only)
/// - Notification and reaction repositories
/// - The audit sink
/// - Snowflake generator for ID generation
/// - The feed session registry
#[derive(Clone)]
pub struct ServiceContext {
    ledger: Arc<dyn SubmissionLedger>,
    user_directory: Arc<dyn UserDirectory>,
    notification_repo: Arc<dyn NotificationRepository>,
    reaction_repo: Arc<dyn ReactionRepository>,
    audit_sink: Arc<dyn AuditSink>,

    snowflake_generator: Arc<SnowflakeGenerator>,
    feed_sessions: Arc<FeedSessions>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        ledger: Arc<dyn SubmissionLedger>,
        user_directory: Arc<dyn UserDirectory>,
        notification_repo: Arc<dyn NotificationRepository>,
        reaction_repo: Arc<dyn ReactionRepository>,
        audit_sink: Arc<dyn AuditSink>,
        snowflake_generator: Arc<SnowflakeGenerator>,
    ) -> Self {
        Self {
            ledger,
            user_directory,
            notification_repo,
            reaction_repo,
            audit_sink,
            snowflake_generator,
            feed_sessions: Arc::new(FeedSessions::new()),
        }
    }

    // === Repositories ===

    /// Get the submission ledger
    pub fn ledger(&self) -> &dyn SubmissionLedger {
        self.ledger.as_ref()
    }

    /// Get the user directory
    pub fn user_directory(&self) -> &dyn UserDirectory {
        self.user_directory.as_ref()
    }

    /// Get the notification repository
    pub fn notification_repo(&self) -> &dyn NotificationRepository {
        self.notification_repo.as_ref()
    }

    /// Get the reaction repository
    pub fn reaction_repo(&self) -> &dyn ReactionRepository {
        self.reaction_repo.as_ref()
    }

    /// Get the audit sink as a shared handle (clonable into spawned tasks)
    pub fn audit_sink(&self) -> Arc<dyn AuditSink> {
        Arc::clone(&self.audit_sink)
    }

    // === Services ===

    /// Get the feed session registry
    pub fn feed_sessions(&self) -> &FeedSessions {
        &self.feed_sessions
    }

    /// Generate a new Snowflake ID
    pub fn generate_id(&self) -> Snowflake {
        self.snowflake_generator.generate()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("feed_sessions", &self.feed_sessions.len())
            .finish()
    }
}

/// Builder for creating ServiceContext
#[derive(Default)]
pub struct ServiceContextBuilder {
    ledger: Option<Arc<dyn SubmissionLedger>>,
    user_directory: Option<Arc<dyn UserDirectory>>,
    notification_repo: Option<Arc<dyn NotificationRepository>>,
    reaction_repo: Option<Arc<dyn ReactionRepository>>,
    audit_sink: Option<Arc<dyn AuditSink>>,
    snowflake_generator: Option<Arc<SnowflakeGenerator>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ledger(mut self, ledger: Arc<dyn SubmissionLedger>) -> Self {
        self.ledger = Some(ledger);
        self
    }

    pub fn user_directory(mut self, directory: Arc<dyn UserDirectory>) -> Self {
        self.user_directory = Some(directory);
        self
    }

    pub fn notification_repo(mut self, repo: Arc<dyn NotificationRepository>) -> Self {
        self.notification_repo = Some(repo);
        self
    }

    pub fn reaction_repo(mut self, repo: Arc<dyn ReactionRepository>) -> Self {
        self.reaction_repo = Some(repo);
        self
    }

    pub fn audit_sink(mut self, sink: Arc<dyn AuditSink>) -> Self {
        self.audit_sink = Some(sink);
        self
    }

    pub fn snowflake_generator(mut self, generator: Arc<SnowflakeGenerator>) -> Self {
        self.snowflake_generator = Some(generator);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        use super::error::ServiceError;

        Ok(ServiceContext::new(
            self.ledger
                .ok_or_else(|| ServiceError::validation("ledger is required"))?,
            self.user_directory
                .ok_or_else(|| ServiceError::validation("user_directory is required"))?,
            self.notification_repo
                .ok_or_else(|| ServiceError::validation("notification_repo is required"))?,
            self.reaction_repo
                .ok_or_else(|| ServiceError::validation("reaction_repo is required"))?,
            self.audit_sink
                .ok_or_else(|| ServiceError::validation("audit_sink is required"))?,
            self.snowflake_generator
                .ok_or_else(|| ServiceError::validation("snowflake_generator is required"))?,
        ))
    }
}
