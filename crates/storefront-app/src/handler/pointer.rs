//! Pointer handlers: press, release and hover
//!
//! A press on a pagination dot jumps to that window. A press anywhere else in
//! a section starts a drag; the release either swipes (travel beyond the drag
//! threshold) or counts as a click that selects the card under the pointer.
//! Moving over a section pauses its rotation until the pointer leaves.

use storefront_core::prelude::*;
use storefront_core::Moment;

use crate::message::{CarouselEvent, Message};
use crate::pointer::{PointerEvent, PointerKind};
use crate::section::Section;
use crate::state::{AppState, Press, Route};

use super::carousel::{finish_drag, handle_carousel_event, DragOutcome};
use super::UpdateResult;

pub(crate) fn handle_pointer(state: &mut AppState, event: PointerEvent, at: Moment) -> UpdateResult {
    let (column, row) = (event.column, event.row);
    let under = match state.route {
        Route::Home => state.regions.section_at(column, row),
        Route::Detail(_) => None,
    };
    update_hover(state, under, at);

    if !matches!(state.route, Route::Home) {
        return UpdateResult::none();
    }

    match event.kind {
        // Motion without a held button means the release happened elsewhere
        PointerKind::Moved => {
            cancel_press(state, at);
            UpdateResult::none()
        }

        PointerKind::Drag => UpdateResult::none(),

        PointerKind::Down => {
            // A release outside the terminal never reaches us
            cancel_press(state, at);

            if let Some((section, index)) = state.regions.dot_at(column, row) {
                state.focus = section;
                return UpdateResult::message(Message::Carousel {
                    section,
                    event: CarouselEvent::Jump(index),
                    at,
                });
            }

            let Some(section) = under else {
                return UpdateResult::none();
            };
            state.focus = section;
            let offset = state
                .regions
                .card_at(column, row)
                .filter(|(s, _)| *s == section)
                .map(|(_, offset)| offset)
                .unwrap_or(0);
            state.pressed = Some(Press { section, offset });
            UpdateResult::message(Message::Carousel {
                section,
                event: CarouselEvent::DragStart(i32::from(column)),
                at,
            })
        }

        PointerKind::Up => {
            let Some(press) = state.pressed.take() else {
                return UpdateResult::none();
            };
            match finish_drag(state, press.section, i32::from(column), at.at) {
                DragOutcome::Swiped(direction) => {
                    debug!("{} swiped {:?}", press.section, direction);
                    UpdateResult::none()
                }
                DragOutcome::Click => UpdateResult::message(Message::Select {
                    section: press.section,
                    offset: press.offset,
                }),
                DragOutcome::Idle => UpdateResult::none(),
            }
        }
    }
}

/// Abandon an unfinished press, releasing its drag pause
pub(crate) fn cancel_press(state: &mut AppState, at: Moment) {
    if let Some(press) = state.pressed.take() {
        debug!("{} drag abandoned", press.section);
        handle_carousel_event(state, press.section, CarouselEvent::DragCancel, at.at);
    }
}

/// Move the hover pause to whatever section is now under the pointer
pub(crate) fn update_hover(state: &mut AppState, under: Option<Section>, at: Moment) {
    if state.hovered == under {
        return;
    }
    if let Some(previous) = state.hovered.take() {
        handle_carousel_event(state, previous, CarouselEvent::HoverExit, at.at);
    }
    if let Some(section) = under {
        handle_carousel_event(state, section, CarouselEvent::HoverEnter, at.at);
    }
    state.hovered = under;
}
