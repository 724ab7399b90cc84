//! In-memory test doubles for the kudos-core ports
//!
//! Service tests run against these instead of PostgreSQL. The doubles honor
//! the same contracts the SQL repositories do: newest-first listing, one-shot
//! read transitions, composite-key reaction upserts, and an `unavailable`
//! switch that makes every notification operation fail with a retryable
//! error.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use kudos_core::entities::{
    AuditEntry, DirectoryUser, Notification, NotificationKind, Reaction, ReactionKind, Submission,
};
use kudos_core::traits::{
    AuditSink, NotificationRepository, ReactionRepository, RepoResult, SubmissionLedger,
    UserDirectory,
};
use kudos_core::{DomainError, Snowflake, SnowflakeGenerator};

use super::context::{ServiceContext, ServiceContextBuilder};

#[derive(Default)]
struct State {
    notifications: Mutex<Vec<Notification>>,
    reactions: Mutex<HashMap<(Snowflake, Snowflake), Reaction>>,
    submissions: Mutex<Vec<Submission>>,
    users: Mutex<HashMap<Snowflake, String>>,
    audits: Mutex<Vec<AuditEntry>>,
    unavailable: AtomicBool,
}

impl State {
    fn check_available(&self) -> RepoResult<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            Err(DomainError::Unavailable("in-memory store offline".to_string()))
        } else {
            Ok(())
        }
    }
}

/// Handle for seeding and fault injection from tests
#[derive(Clone)]
pub struct Fixtures {
    state: Arc<State>,
}

impl Fixtures {
    pub fn add_user(&self, id: i64, display_name: &str) {
        self.state
            .users
            .lock()
            .unwrap()
            .insert(Snowflake::new(id), display_name.to_string());
    }

    pub fn add_submission(&self, submission: Submission) {
        self.state.submissions.lock().unwrap().push(submission);
    }

    pub fn set_unavailable(&self, offline: bool) {
        self.state.unavailable.store(offline, Ordering::SeqCst);
    }

    pub fn audit_log(&self) -> Vec<AuditEntry> {
        self.state.audits.lock().unwrap().clone()
    }
}

#[derive(Clone)]
struct InMemory {
    state: Arc<State>,
}

#[async_trait]
impl SubmissionLedger for InMemory {
    async fn list_approved(&self) -> RepoResult<Vec<Submission>> {
        self.state.check_available()?;
        Ok(self
            .state
            .submissions
            .lock()
            .unwrap()
            .iter()
            .filter(|s| s.is_approved())
            .cloned()
            .collect())
    }
}

#[async_trait]
impl UserDirectory for InMemory {
    async fn resolve(&self, user_id: Snowflake) -> RepoResult<Option<DirectoryUser>> {
        self.state.check_available()?;
        Ok(self
            .state
            .users
            .lock()
            .unwrap()
            .get(&user_id)
            .map(|name| DirectoryUser::new(user_id, name.clone())))
    }

    async fn resolve_many(&self, user_ids: &[Snowflake]) -> RepoResult<Vec<DirectoryUser>> {
        self.state.check_available()?;
        let users = self.state.users.lock().unwrap();
        Ok(user_ids
            .iter()
            .filter_map(|id| users.get(id).map(|name| DirectoryUser::new(*id, name.clone())))
            .collect())
    }
}

#[async_trait]
impl NotificationRepository for InMemory {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Notification>> {
        self.state.check_available()?;
        Ok(self
            .state
            .notifications
            .lock()
            .unwrap()
            .iter()
            .find(|n| n.id == id)
            .cloned())
    }

    async fn list_for_user(&self, user_id: Snowflake, limit: i64) -> RepoResult<Vec<Notification>> {
        self.state.check_available()?;
        let mut rows: Vec<Notification> = self
            .state
            .notifications
            .lock()
            .unwrap()
            .iter()
            .filter(|n| n.user_id == user_id)
            .cloned()
            .collect();
        // Newest first, matching the SQL ordering contract
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        rows.truncate(limit.clamp(1, 100) as usize);
        Ok(rows)
    }

    async fn create(&self, notification: &Notification) -> RepoResult<()> {
        self.state.check_available()?;
        self.state
            .notifications
            .lock()
            .unwrap()
            .push(notification.clone());
        Ok(())
    }

    async fn mark_read(&self, id: Snowflake) -> RepoResult<bool> {
        self.state.check_available()?;
        let mut rows = self.state.notifications.lock().unwrap();
        match rows.iter_mut().find(|n| n.id == id && !n.read) {
            Some(row) => {
                row.mark_read();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn mark_all_read(&self, user_id: Snowflake) -> RepoResult<u64> {
        self.state.check_available()?;
        let mut rows = self.state.notifications.lock().unwrap();
        let mut marked = 0;
        for row in rows.iter_mut().filter(|n| n.user_id == user_id && !n.read) {
            row.mark_read();
            marked += 1;
        }
        Ok(marked)
    }

    async fn unread_count(&self, user_id: Snowflake) -> RepoResult<i64> {
        self.state.check_available()?;
        Ok(self
            .state
            .notifications
            .lock()
            .unwrap()
            .iter()
            .filter(|n| n.user_id == user_id && !n.read)
            .count() as i64)
    }

    async fn delete(&self, id: Snowflake) -> RepoResult<bool> {
        self.state.check_available()?;
        let mut rows = self.state.notifications.lock().unwrap();
        let before = rows.len();
        rows.retain(|n| n.id != id);
        Ok(rows.len() < before)
    }
}

#[async_trait]
impl ReactionRepository for InMemory {
    async fn find(
        &self,
        notification_id: Snowflake,
        user_id: Snowflake,
    ) -> RepoResult<Option<Reaction>> {
        self.state.check_available()?;
        Ok(self
            .state
            .reactions
            .lock()
            .unwrap()
            .get(&(notification_id, user_id))
            .cloned())
    }

    async fn upsert(&self, reaction: &Reaction) -> RepoResult<()> {
        self.state.check_available()?;
        self.state
            .reactions
            .lock()
            .unwrap()
            .insert((reaction.notification_id, reaction.user_id), reaction.clone());
        Ok(())
    }

    async fn delete(&self, notification_id: Snowflake, user_id: Snowflake) -> RepoResult<bool> {
        self.state.check_available()?;
        Ok(self
            .state
            .reactions
            .lock()
            .unwrap()
            .remove(&(notification_id, user_id))
            .is_some())
    }

    async fn delete_for_notification(&self, notification_id: Snowflake) -> RepoResult<()> {
        self.state.check_available()?;
        self.state
            .reactions
            .lock()
            .unwrap()
            .retain(|(nid, _), _| *nid != notification_id);
        Ok(())
    }

    async fn count_by_kind(
        &self,
        notification_id: Snowflake,
    ) -> RepoResult<Vec<(ReactionKind, i64)>> {
        self.state.check_available()?;
        let reactions = self.state.reactions.lock().unwrap();
        let mut tally: HashMap<ReactionKind, i64> = HashMap::new();
        for reaction in reactions
            .values()
            .filter(|r| r.notification_id == notification_id)
        {
            *tally.entry(reaction.kind).or_default() += 1;
        }
        Ok(tally.into_iter().collect())
    }
}

#[async_trait]
impl AuditSink for InMemory {
    async fn append(&self, entry: &AuditEntry) -> RepoResult<()> {
        self.state.check_available()?;
        self.state.audits.lock().unwrap().push(entry.clone());
        Ok(())
    }
}

fn build_context(state: Arc<State>) -> ServiceContext {
    let store = InMemory { state };
    ServiceContextBuilder::new()
        .ledger(Arc::new(store.clone()))
        .user_directory(Arc::new(store.clone()))
        .notification_repo(Arc::new(store.clone()))
        .reaction_repo(Arc::new(store.clone()))
        .audit_sink(Arc::new(store))
        .snowflake_generator(Arc::new(SnowflakeGenerator::new(0)))
        .build()
        .expect("in-memory context")
}

/// Build a ServiceContext over fresh in-memory stores
pub fn test_context() -> (ServiceContext, Fixtures) {
    let state = Arc::new(State::default());
    let fixtures = Fixtures {
        state: Arc::clone(&state),
    };
    (build_context(state), fixtures)
}

/// Build a ServiceContext whose store is permanently unreachable
pub fn unavailable_context() -> ServiceContext {
    let state = Arc::new(State::default());
    state.unavailable.store(true, Ordering::SeqCst);
    build_context(state)
}

/// Insert a notification directly through the repository, returning its id
pub async fn seed_notification(ctx: &ServiceContext, user: i64) -> Snowflake {
    let notification = Notification::new(
        ctx.generate_id(),
        Snowflake::new(user),
        "seeded".to_string(),
        "seeded notification".to_string(),
        NotificationKind::Informational,
        None,
    );
    ctx.notification_repo()
        .create(&notification)
        .await
        .expect("seed notification");
    notification.id
}
