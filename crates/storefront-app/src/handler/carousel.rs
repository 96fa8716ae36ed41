//! Carousel interaction handlers

use std::time::Instant;

use storefront_core::prelude::*;

use crate::carousel::{Direction, RotatingSelection};
use crate::message::CarouselEvent;
use crate::section::Section;
use crate::state::AppState;

use super::UpdateResult;

/// How a pointer release resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DragOutcome {
    /// Travel exceeded the threshold; the carousel moved
    Swiped(Direction),
    /// Press and release without meaningful travel
    Click,
    /// No drag was in progress
    Idle,
}

/// Route a carousel event to the controller for `section`
pub(crate) fn handle_carousel_event(
    state: &mut AppState,
    section: Section,
    event: CarouselEvent,
    at: Instant,
) -> UpdateResult {
    match section {
        Section::Banners => apply(&mut state.banners, section, event, at),
        Section::Offers => apply(&mut state.offers, section, event, at),
        Section::Reviews => apply(&mut state.reviews, section, event, at),
    };
    UpdateResult::none()
}

/// Finish a drag on `section`, reporting whether it was a swipe or a click
pub(crate) fn finish_drag(
    state: &mut AppState,
    section: Section,
    x: i32,
    at: Instant,
) -> DragOutcome {
    match section {
        Section::Banners => drag_end(&mut state.banners, x, at),
        Section::Offers => drag_end(&mut state.offers, x, at),
        Section::Reviews => drag_end(&mut state.reviews, x, at),
    }
}

fn drag_end<T>(carousel: &mut RotatingSelection<T>, x: i32, at: Instant) -> DragOutcome {
    if !carousel.is_dragging() {
        return DragOutcome::Idle;
    }
    match carousel.drag_end(x, at) {
        Some(direction) => DragOutcome::Swiped(direction),
        None => DragOutcome::Click,
    }
}

fn apply<T>(
    carousel: &mut RotatingSelection<T>,
    section: Section,
    event: CarouselEvent,
    at: Instant,
) {
    match event {
        CarouselEvent::Next => {
            carousel.next(at);
        }
        CarouselEvent::Prev => {
            carousel.prev(at);
        }
        CarouselEvent::Jump(index) => {
            carousel.dot_click(index, at);
        }
        CarouselEvent::TogglePause => {
            let paused = carousel.toggle_user_pause(at);
            debug!(
                "{} rotation {}",
                section,
                if paused { "paused" } else { "resumed" }
            );
        }
        CarouselEvent::HoverEnter => carousel.hover_enter(),
        CarouselEvent::HoverExit => carousel.hover_exit(at),
        CarouselEvent::DragStart(x) => carousel.drag_start(x),
        CarouselEvent::DragEnd(x) => {
            if let DragOutcome::Swiped(direction) = drag_end(carousel, x, at) {
                trace!("{} swiped {:?}", section, direction);
            }
        }
        CarouselEvent::DragCancel => carousel.drag_cancel(at),
    }
}
