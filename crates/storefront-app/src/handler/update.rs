//! Main update function - handles state transitions (TEA pattern)

use storefront_core::prelude::*;

use crate::carousel::PauseReason;
use crate::message::Message;
use crate::state::{AppState, Route};

use super::{carousel, catalog, keys::handle_key, pointer, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.request_quit();
            UpdateResult::none()
        }

        Message::Key { key, at } => {
            state.now = at;
            match handle_key(state, key, at) {
                Some(msg) => UpdateResult::message(msg),
                None => UpdateResult::none(),
            }
        }

        Message::Pointer { event, at } => {
            state.now = at;
            pointer::handle_pointer(state, event, at)
        }

        Message::Tick(at) => {
            state.now = at;
            state.banners.tick(at.at);
            state.offers.tick(at.at);
            state.reviews.tick(at.at);
            state.expire_toast(at.at);
            UpdateResult::none()
        }

        Message::Resize { width, height, at } => {
            trace!("Resize to {}x{}", width, height);
            state.viewport_width = width;
            let window_size = state.reviews_window_size();
            if state.reviews.set_window_size(window_size, at.at) {
                debug!("Reviews now {} per page", window_size);
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Navigation Messages
        // ─────────────────────────────────────────────────────────
        Message::FocusNext => {
            state.focus = state.focus.next();
            UpdateResult::none()
        }

        Message::FocusPrev => {
            state.focus = state.focus.prev();
            UpdateResult::none()
        }

        Message::Carousel { section, event, at } => {
            state.now = at;
            carousel::handle_carousel_event(state, section, event, at.at)
        }

        Message::Select { section, offset } => match state.selected_item(section, offset) {
            Some(item) => UpdateResult::message(Message::OpenItem(item)),
            None => {
                trace!("Nothing to select in {}", section);
                UpdateResult::none()
            }
        },

        Message::OpenItem(item) => {
            info!("Opening {}", item.title());
            let now = state.now;
            pointer::update_hover(state, None, now);
            pointer::cancel_press(state, now);
            state.pause_all(PauseReason::Covered);
            state.focus = item.section();
            state.route = Route::Detail(item);
            UpdateResult::none()
        }

        Message::Back => {
            if matches!(state.route, Route::Detail(_)) {
                state.resume_all(PauseReason::Covered, state.now.at);
            }
            state.route = Route::Home;
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Catalog Messages
        // ─────────────────────────────────────────────────────────
        Message::LoadCatalog => catalog::handle_load_catalog(state),

        Message::SectionLoaded {
            generation,
            section,
            result,
            at,
        } => catalog::handle_section_loaded(state, generation, section, result, at),

        Message::LogosLoaded {
            generation,
            result,
            at,
        } => catalog::handle_logos_loaded(state, generation, result, at),
    }
}

