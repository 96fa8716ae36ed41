//! Countdown math for time-limited offers
//!
//! Countdowns are pure values recomputed on every UI tick; nothing here owns
//! a timer.

use std::fmt;
use std::time::Duration;

use chrono::{DateTime, Utc};

/// Time left until `end`, saturating at zero once it has passed
pub fn compute_remaining(now: DateTime<Utc>, end: DateTime<Utc>) -> Duration {
    (end - now).to_std().unwrap_or(Duration::ZERO)
}

/// Display form of a remaining duration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Countdown {
    /// Still running
    Running {
        days: u64,
        hours: u64,
        minutes: u64,
        seconds: u64,
    },
    /// The end time has passed
    Expired,
}

impl Countdown {
    /// Countdown from `now` until `end`
    pub fn until(now: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self::from_remaining(compute_remaining(now, end))
    }

    /// Split a remaining duration into display units
    pub fn from_remaining(remaining: Duration) -> Self {
        if remaining.is_zero() {
            return Countdown::Expired;
        }
        let total = remaining.as_secs();
        Countdown::Running {
            days: total / 86_400,
            hours: (total % 86_400) / 3_600,
            minutes: (total % 3_600) / 60,
            seconds: total % 60,
        }
    }

    pub fn is_expired(&self) -> bool {
        matches!(self, Countdown::Expired)
    }
}

impl fmt::Display for Countdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Countdown::Expired => write!(f, "Expired"),
            Countdown::Running {
                days,
                hours,
                minutes,
                seconds,
            } => {
                if *days > 0 {
                    write!(f, "{}d {:02}h {:02}m {:02}s", days, hours, minutes, seconds)
                } else {
                    write!(f, "{:02}h {:02}m {:02}s", hours, minutes, seconds)
                }
            }
        }
    }
}
