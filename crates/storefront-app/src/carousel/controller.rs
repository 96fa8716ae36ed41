//! Rotating selection controller

use std::time::{Duration, Instant};

use storefront_core::prelude::*;
use storefront_core::{eligible_items, DisplayItem, Moment};

use super::gesture::interpret_drag;
use super::timer::Deadline;
use super::window::{window_count, window_range};
use super::{CarouselPhase, CarouselTiming, Direction, PauseReason};

/// Pause conditions currently held
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct PauseSet {
    hover: bool,
    drag: bool,
    user: bool,
    covered: bool,
}

impl PauseSet {
    fn any(&self) -> bool {
        self.hover || self.drag || self.user || self.covered
    }

    fn holds(&self, reason: PauseReason) -> bool {
        match reason {
            PauseReason::Hover => self.hover,
            PauseReason::Drag => self.drag,
            PauseReason::User => self.user,
            PauseReason::Covered => self.covered,
        }
    }

    fn flag(&mut self, reason: PauseReason) -> &mut bool {
        match reason {
            PauseReason::Hover => &mut self.hover,
            PauseReason::Drag => &mut self.drag,
            PauseReason::User => &mut self.user,
            PauseReason::Covered => &mut self.covered,
        }
    }
}

/// Which window of eligible items is visible, and when it changes
///
/// Owns the eligible items, the current window index, the auto-advance
/// deadline and the post-interaction grace deadline. Every operation clamps
/// or rejects its input, so `current_index` is always a valid window index
/// (or 0 when there is nothing to show).
#[derive(Debug, Clone)]
pub struct RotatingSelection<T> {
    items: Vec<T>,
    window_size: usize,
    current: usize,
    paused: PauseSet,
    timing: CarouselTiming,
    drag_threshold: u32,
    drag_origin: Option<i32>,
    advance_timer: Deadline,
    grace_timer: Deadline,
}

impl<T> Default for RotatingSelection<T> {
    fn default() -> Self {
        Self::new(CarouselTiming::default(), super::DEFAULT_DRAG_THRESHOLD)
    }
}

impl<T> RotatingSelection<T> {
    /// Create an empty controller
    pub fn new(timing: CarouselTiming, drag_threshold: u32) -> Self {
        Self {
            items: Vec::new(),
            window_size: 1,
            current: 0,
            paused: PauseSet::default(),
            timing,
            drag_threshold,
            drag_origin: None,
            advance_timer: Deadline::default(),
            grace_timer: Deadline::default(),
        }
    }

    // ─────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn window_size(&self) -> usize {
        self.window_size
    }

    pub fn window_count(&self) -> usize {
        window_count(self.items.len(), self.window_size)
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn timing(&self) -> CarouselTiming {
        self.timing
    }

    /// Items in the visible window, at most `window_size` of them
    pub fn current_window(&self) -> &[T] {
        &self.items[window_range(self.current, self.items.len(), self.window_size)]
    }

    /// Whether more than one window exists
    pub fn can_rotate(&self) -> bool {
        self.window_count() > 1
    }

    pub fn is_paused(&self) -> bool {
        self.paused.any()
    }

    pub fn is_paused_by(&self, reason: PauseReason) -> bool {
        self.paused.holds(reason)
    }

    pub fn is_dragging(&self) -> bool {
        self.drag_origin.is_some()
    }

    pub fn phase(&self) -> CarouselPhase {
        match self.window_count() {
            0 => CarouselPhase::Empty,
            1 => CarouselPhase::Steady,
            _ if self.is_paused() => CarouselPhase::RotatingPaused,
            _ => CarouselPhase::RotatingActive,
        }
    }

    /// Number of pending deadlines (auto-advance plus grace), never above one
    pub fn scheduled_timers(&self) -> usize {
        usize::from(self.advance_timer.is_armed()) + usize::from(self.grace_timer.is_armed())
    }

    /// When the next automatic advance will happen, if one is scheduled
    ///
    /// During a grace period this includes the full interval that follows it.
    pub fn until_next_advance(&self, now: Instant) -> Option<Duration> {
        if let Some(remaining) = self.advance_timer.remaining(now) {
            return Some(remaining);
        }
        self.grace_timer
            .remaining(now)
            .map(|grace| grace + self.timing.interval)
    }

    /// Item committed by a selection at `offset` within the current window
    pub fn select_at(&self, offset: usize) -> Option<&T> {
        self.current_window().get(offset)
    }

    /// Item committed by a selection on the current window
    pub fn select(&self) -> Option<&T> {
        self.select_at(0)
    }

    // ─────────────────────────────────────────────────────────
    // Lifecycle
    // ─────────────────────────────────────────────────────────

    /// Drop every item and cancel all pending deadlines
    pub fn clear(&mut self) {
        self.items.clear();
        self.current = 0;
        self.drag_origin = None;
        self.paused.drag = false;
        self.advance_timer.cancel();
        self.grace_timer.cancel();
    }

    /// Change how many items are shown per window
    ///
    /// Windows are recomputed and the index resets to the first window.
    /// Returns `false` when the size is unchanged.
    pub fn set_window_size(&mut self, window_size: usize, now: Instant) -> bool {
        let window_size = window_size.max(1);
        if window_size == self.window_size {
            return false;
        }
        self.window_size = window_size;
        self.current = 0;
        self.restart_rotation(now);
        true
    }

    // ─────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────

    /// Manually move one window in `direction`, wrapping at either end
    ///
    /// No-op with fewer than two windows. A successful move restarts the
    /// auto-advance schedule from `now`.
    pub fn advance(&mut self, direction: Direction, now: Instant) -> bool {
        if !self.step(direction) {
            return false;
        }
        self.after_manual_navigation(now);
        true
    }

    pub fn next(&mut self, now: Instant) -> bool {
        self.advance(Direction::Forward, now)
    }

    pub fn prev(&mut self, now: Instant) -> bool {
        self.advance(Direction::Backward, now)
    }

    /// Jump straight to window `index`
    ///
    /// Out-of-range indices are ignored without touching the schedule.
    pub fn jump_to(&mut self, index: usize, now: Instant) -> bool {
        if index >= self.window_count() {
            trace!(
                "Ignoring jump to window {} of {}",
                index,
                self.window_count()
            );
            return false;
        }
        self.current = index;
        self.after_manual_navigation(now);
        true
    }

    /// Pagination dot clicked
    pub fn dot_click(&mut self, index: usize, now: Instant) -> bool {
        self.jump_to(index, now)
    }

    // ─────────────────────────────────────────────────────────
    // Pause / resume
    // ─────────────────────────────────────────────────────────

    /// Hold a pause condition; no advance is scheduled while any is held
    pub fn pause(&mut self, reason: PauseReason) {
        *self.paused.flag(reason) = true;
        self.advance_timer.cancel();
        self.grace_timer.cancel();
    }

    /// Release a pause condition
    ///
    /// When the last condition is released a fresh interval starts at `now`;
    /// ticks missed while paused are not caught up.
    pub fn resume(&mut self, reason: PauseReason, now: Instant) {
        let flag = self.paused.flag(reason);
        if !*flag {
            return;
        }
        *flag = false;
        if !self.is_paused() {
            self.restart_rotation(now);
        }
    }

    /// Flip the user pause; returns whether the controller is now paused by it
    pub fn toggle_user_pause(&mut self, now: Instant) -> bool {
        if self.paused.user {
            self.resume(PauseReason::User, now);
            false
        } else {
            self.pause(PauseReason::User);
            true
        }
    }

    pub fn hover_enter(&mut self) {
        self.pause(PauseReason::Hover);
    }

    pub fn hover_exit(&mut self, now: Instant) {
        self.resume(PauseReason::Hover, now);
    }

    // ─────────────────────────────────────────────────────────
    // Drag gestures
    // ─────────────────────────────────────────────────────────

    /// Pointer pressed at `x`; rotation pauses until the drag ends
    pub fn drag_start(&mut self, x: i32) {
        if self.items.is_empty() {
            return;
        }
        self.drag_origin = Some(x);
        self.pause(PauseReason::Drag);
    }

    /// Pointer released at `x`
    ///
    /// Returns the direction navigated, or `None` when the movement stayed
    /// within the drag threshold (a click) or no drag was in progress.
    pub fn drag_end(&mut self, x: i32, now: Instant) -> Option<Direction> {
        let origin = self.drag_origin.take()?;
        self.resume(PauseReason::Drag, now);
        let direction = interpret_drag(origin, x, self.drag_threshold)?;
        self.advance(direction, now);
        Some(direction)
    }

    /// Abandon a drag without navigating (pointer left the carousel)
    pub fn drag_cancel(&mut self, now: Instant) {
        if self.drag_origin.take().is_some() {
            self.resume(PauseReason::Drag, now);
        }
    }

    // ─────────────────────────────────────────────────────────
    // Timer callback
    // ─────────────────────────────────────────────────────────

    /// Run any deadline that is due at `now`
    ///
    /// Returns `true` when the carousel auto-advanced.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.is_paused() || !self.can_rotate() {
            return false;
        }

        if self.grace_timer.fire(now) {
            self.advance_timer.arm(now, self.timing.interval);
            return false;
        }

        if self.advance_timer.fire(now) {
            self.step(Direction::Forward);
            self.advance_timer.arm(now, self.timing.interval);
            trace!("Auto-advanced to window {}", self.current);
            return true;
        }

        false
    }

    // ─────────────────────────────────────────────────────────
    // Internals
    // ─────────────────────────────────────────────────────────

    fn step(&mut self, direction: Direction) -> bool {
        let count = self.window_count();
        if count <= 1 {
            return false;
        }
        self.current = match direction {
            Direction::Forward => (self.current + 1) % count,
            Direction::Backward => (self.current + count - 1) % count,
        };
        true
    }

    /// Cancel pending deadlines and start a fresh interval if rotation applies
    fn restart_rotation(&mut self, now: Instant) {
        self.grace_timer.cancel();
        if self.can_rotate() && !self.is_paused() {
            self.advance_timer.arm(now, self.timing.interval);
        } else {
            self.advance_timer.cancel();
        }
    }

    /// Manual navigation replaces the pending tick with the grace period
    fn after_manual_navigation(&mut self, now: Instant) {
        self.advance_timer.cancel();
        self.grace_timer.cancel();
        if !self.can_rotate() || self.is_paused() {
            return;
        }
        if self.timing.grace.is_zero() {
            self.advance_timer.arm(now, self.timing.interval);
        } else {
            self.grace_timer.arm(now, self.timing.grace);
        }
    }
}

impl<T: DisplayItem> RotatingSelection<T> {
    /// Load freshly fetched items
    ///
    /// Keeps eligible items only, orders them, partitions them into windows of
    /// `window_size` and starts at the first window. Pending deadlines from the
    /// previous list are cancelled.
    pub fn initialize(&mut self, items: Vec<T>, window_size: usize, now: Moment) {
        let fetched = items.len();
        self.items = eligible_items(items, now.wall);
        self.window_size = window_size.max(1);
        self.current = 0;
        self.drag_origin = None;
        self.paused.drag = false;
        self.restart_rotation(now.at);
        debug!(
            "Carousel initialized: {} of {} items eligible, {} windows of {}",
            self.items.len(),
            fetched,
            self.window_count(),
            self.window_size
        );
    }
}
