//! Key event handlers per route

use storefront_core::Moment;

use crate::input_key::InputKey;
use crate::message::{CarouselEvent, Message};
use crate::state::{AppState, Route};

/// Convert key events to messages based on the current route
pub(crate) fn handle_key(state: &AppState, key: InputKey, at: Moment) -> Option<Message> {
    match state.route {
        Route::Home => handle_key_home(state, key, at),
        Route::Detail(_) => handle_key_detail(key),
    }
}

fn handle_key_home(state: &AppState, key: InputKey, at: Moment) -> Option<Message> {
    let section = state.focus;
    let carousel = |event| {
        Some(Message::Carousel {
            section,
            event,
            at,
        })
    };

    match key {
        InputKey::Char('q') | InputKey::CharCtrl('c') | InputKey::Esc => Some(Message::Quit),

        // Focus
        InputKey::Tab | InputKey::Down | InputKey::Char('j') => Some(Message::FocusNext),
        InputKey::BackTab | InputKey::Up | InputKey::Char('k') => Some(Message::FocusPrev),

        // Carousel navigation
        InputKey::Left | InputKey::Char('h') => carousel(CarouselEvent::Prev),
        InputKey::Right | InputKey::Char('l') => carousel(CarouselEvent::Next),
        InputKey::Home => carousel(CarouselEvent::Jump(0)),
        InputKey::End => {
            let last = state.window_count(section).checked_sub(1)?;
            carousel(CarouselEvent::Jump(last))
        }
        InputKey::Char(' ') => carousel(CarouselEvent::TogglePause),
        k if k.dot_index().is_some() => carousel(CarouselEvent::Jump(k.dot_index()?)),

        InputKey::Enter => Some(Message::Select { section, offset: 0 }),
        InputKey::Char('r') => Some(Message::LoadCatalog),

        _ => None,
    }
}

fn handle_key_detail(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc | InputKey::Backspace | InputKey::Left | InputKey::Char('h') => {
            Some(Message::Back)
        }
        InputKey::Char('q') | InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => None,
    }
}
