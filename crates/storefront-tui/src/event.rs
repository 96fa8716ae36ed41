//! Terminal event polling

use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use storefront_app::message::Message;
use storefront_app::{InputKey, PointerEvent, PointerKind};
use storefront_core::prelude::*;
use storefront_core::Moment;

/// Convert crossterm KeyEvent to InputKey
pub fn key_event_to_input(key: KeyEvent) -> Option<InputKey> {
    match key.code {
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(InputKey::CharCtrl(c))
        }
        KeyCode::Char(c) => Some(InputKey::Char(c)),
        KeyCode::Enter => Some(InputKey::Enter),
        KeyCode::Esc => Some(InputKey::Esc),
        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => Some(InputKey::BackTab),
        KeyCode::Tab => Some(InputKey::Tab),
        KeyCode::BackTab => Some(InputKey::BackTab),
        KeyCode::Backspace => Some(InputKey::Backspace),
        KeyCode::Up => Some(InputKey::Up),
        KeyCode::Down => Some(InputKey::Down),
        KeyCode::Left => Some(InputKey::Left),
        KeyCode::Right => Some(InputKey::Right),
        KeyCode::Home => Some(InputKey::Home),
        KeyCode::End => Some(InputKey::End),
        _ => None, // Unsupported keys ignored
    }
}

/// Convert crossterm MouseEvent to a PointerEvent
///
/// Only the primary button takes part in press/drag/release; scroll and
/// other buttons are ignored.
pub fn mouse_event_to_pointer(mouse: MouseEvent) -> Option<PointerEvent> {
    let kind = match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => PointerKind::Down,
        MouseEventKind::Up(MouseButton::Left) => PointerKind::Up,
        MouseEventKind::Drag(MouseButton::Left) => PointerKind::Drag,
        MouseEventKind::Moved => PointerKind::Moved,
        _ => return None,
    };
    Some(PointerEvent::new(kind, mouse.column, mouse.row))
}

/// Map a raw terminal event to a message stamped with `at`
pub fn event_to_message(event: Event, at: Moment) -> Option<Message> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            key_event_to_input(key).map(|key| Message::Key { key, at })
        }
        Event::Mouse(mouse) => {
            mouse_event_to_pointer(mouse).map(|event| Message::Pointer { event, at })
        }
        Event::Resize(width, height) => Some(Message::Resize { width, height, at }),
        _ => None,
    }
}

/// Poll for terminal events with timeout
///
/// Returns a tick when nothing arrives within `tick_rate`.
pub fn poll(tick_rate: Duration) -> Result<Option<Message>> {
    if event::poll(tick_rate)? {
        let event = event::read()?;
        Ok(event_to_message(event, Moment::now()))
    } else {
        // Generate tick on timeout for carousel deadlines and countdowns
        Ok(Some(Message::Tick(Moment::now())))
    }
}
