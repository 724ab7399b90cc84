//! Feed reconciliation - detecting new notifications across poll cycles

mod poll;

pub use poll::{PollCursor, PollOutcome};
