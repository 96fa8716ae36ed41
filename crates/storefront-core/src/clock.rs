//! Clock snapshots passed into time-dependent operations
//!
//! Carousel timers run on the monotonic clock while offer validity and
//! countdowns are expressed in wall-clock time. A [`Moment`] captures both at
//! once so a single event is evaluated against one consistent reading, and so
//! tests can drive time explicitly.

use std::time::{Duration, Instant};

use chrono::{DateTime, TimeDelta, Utc};

/// A paired monotonic and wall-clock reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Moment {
    /// Monotonic time, used for timers and deadlines
    pub at: Instant,
    /// Wall-clock time, used for eligibility windows and countdowns
    pub wall: DateTime<Utc>,
}

impl Moment {
    /// Read both clocks now
    pub fn now() -> Self {
        Self {
            at: Instant::now(),
            wall: Utc::now(),
        }
    }

    /// Build a moment from explicit readings
    pub fn new(at: Instant, wall: DateTime<Utc>) -> Self {
        Self { at, wall }
    }

    /// The same moment shifted forward by `by` on both clocks
    pub fn advanced(self, by: Duration) -> Self {
        let delta = TimeDelta::from_std(by).unwrap_or(TimeDelta::MAX);
        Self {
            at: self.at + by,
            wall: self.wall.checked_add_signed(delta).unwrap_or(self.wall),
        }
    }
}
