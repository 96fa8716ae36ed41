//! Single-slot deadline timer
//!
//! A carousel never spawns timer tasks. Each timer is a deadline owned by the
//! controller and checked on the UI tick, so re-arming replaces the previous
//! deadline and cancelling is clearing it. At most one deadline per slot can
//! ever be pending.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Deadline {
    due: Option<Instant>,
}

impl Deadline {
    /// Schedule the deadline `after` from `now`, replacing any pending one
    pub fn arm(&mut self, now: Instant, after: Duration) {
        self.due = Some(now + after);
    }

    pub fn cancel(&mut self) {
        self.due = None;
    }

    pub fn is_armed(&self) -> bool {
        self.due.is_some()
    }

    /// Consume the deadline if it has been reached
    ///
    /// Returns `true` exactly once per armed deadline.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.due {
            Some(due) if now >= due => {
                self.due = None;
                true
            }
            _ => false,
        }
    }

    /// Time left before the deadline, zero once it is overdue
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.due.map(|due| due.saturating_duration_since(now))
    }
}
