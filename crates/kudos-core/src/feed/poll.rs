//! Poll reconciliation state machine
//!
//! Clients have no push channel; they re-fetch the newest-first notification
//! list on an interval and need to know "is there something new to alert on"
//! without re-alerting for items already shown. Each client session keeps one
//! `PollCursor`, so multiple devices per user reconcile independently.
//!
//! The protocol leans on notifications only ever being prepended (ids are
//! time-ordered, the list is newest first). Several arrivals between two
//! polls collapse into a single alert for the newest one - a deliberate
//! trade-off that avoids a notification storm on reconnect.

use crate::entities::Notification;
use crate::value_objects::Snowflake;

/// Per-session reconciliation state
#[derive(Debug, Clone, Default)]
pub struct PollCursor {
    last_seen: Option<Snowflake>,
    seeded: bool,
}

/// What a poll cycle produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollOutcome {
    /// First observation of this session; history is never replayed as "new"
    Initial,
    /// Nothing newer than the last observed head
    Quiet,
    /// Exactly one alert, carrying the newest item
    NewArrival(Notification),
}

impl PollCursor {
    /// Create a cursor for a fresh session
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recently observed head id, if any
    pub fn last_seen(&self) -> Option<Snowflake> {
        self.last_seen
    }

    /// Feed one poll cycle's newest-first list through the state machine.
    ///
    /// The four cases:
    /// 1. initial load: no alert; seed `last_seen` from the head if present.
    /// 2. non-empty list whose head differs from `last_seen`: one alert for
    ///    the head; advance `last_seen`.
    /// 3. unchanged head: quiet, state untouched.
    /// 4. empty list after seeding: quiet, state untouched.
    pub fn observe(&mut self, current: &[Notification]) -> PollOutcome {
        let head = current.first();

        if !self.seeded {
            self.seeded = true;
            self.last_seen = head.map(|n| n.id);
            return PollOutcome::Initial;
        }

        match head {
            Some(newest) if Some(newest.id) != self.last_seen => {
                self.last_seen = Some(newest.id);
                PollOutcome::NewArrival(newest.clone())
            }
            _ => PollOutcome::Quiet,
        }
    }
}
