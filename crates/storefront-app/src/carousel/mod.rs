//! Rotating selection controller for storefront carousels
//!
//! One controller instance backs each carousel on the page (banners, the
//! discount spotlight, reviews). It owns the eligible items, the index of the
//! visible window and the timers that rotate it.
//!
//! ## State machine
//!
//! The phase is derived from the window count and the pause conditions, so
//! an invalid combination cannot be stored:
//!
//! | Phase            | Windows | Paused | Auto-advance |
//! |------------------|---------|--------|--------------|
//! | `Empty`          | 0       | any    | never        |
//! | `Steady`         | 1       | any    | never        |
//! | `RotatingActive` | ≥ 2     | no     | every interval |
//! | `RotatingPaused` | ≥ 2     | yes    | suspended    |
//!
//! ## Timing
//!
//! Timers are deadlines checked by [`RotatingSelection::tick`]. Manual
//! navigation cancels the pending advance and starts the grace period; when
//! the grace period ends a fresh interval begins. Pausing cancels both
//! deadlines and resuming starts a fresh interval, so missed ticks are never
//! caught up and at most one deadline is ever pending.

mod controller;
mod gesture;
mod timer;
mod window;


use std::time::Duration;

pub use controller::RotatingSelection;
pub use gesture::{interpret_drag, DEFAULT_DRAG_THRESHOLD};
pub use timer::Deadline;
pub use window::{window_count, window_range};

/// Default auto-advance interval
pub const DEFAULT_AUTO_ADVANCE: Duration = Duration::from_millis(5000);

/// Default pause after manual navigation before auto-advance resumes
pub const DEFAULT_GRACE: Duration = Duration::from_millis(5000);

/// Navigation direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// Why rotation is suspended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PauseReason {
    /// Pointer is over the carousel
    Hover,
    /// A drag gesture is in progress
    Drag,
    /// The user paused rotation explicitly
    User,
    /// Another view is drawn over the carousel
    Covered,
}

/// Observable controller phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselPhase {
    /// Nothing to show (before data arrives, after a failed or empty fetch)
    Empty,
    /// Exactly one window; rotation permanently disabled
    Steady,
    /// Two or more windows, auto-advance running
    RotatingActive,
    /// Two or more windows, auto-advance suspended
    RotatingPaused,
}

impl CarouselPhase {
    pub fn is_rotating(&self) -> bool {
        matches!(
            self,
            CarouselPhase::RotatingActive | CarouselPhase::RotatingPaused
        )
    }
}

/// Auto-advance cadence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselTiming {
    /// Time between automatic advances
    pub interval: Duration,
    /// Delay after manual navigation before the interval restarts
    /// (zero restarts the interval immediately)
    pub grace: Duration,
}

impl Default for CarouselTiming {
    fn default() -> Self {
        Self {
            interval: DEFAULT_AUTO_ADVANCE,
            grace: DEFAULT_GRACE,
        }
    }
}

impl CarouselTiming {
    pub fn new(interval: Duration, grace: Duration) -> Self {
        Self { interval, grace }
    }
}
