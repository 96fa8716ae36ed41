//! Message types for the application (TEA pattern)

use storefront_core::{Logo, Moment};

use crate::input_key::InputKey;
use crate::pointer::PointerEvent;
use crate::section::{Section, SectionItems, SelectedItem};

/// Interaction aimed at one carousel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselEvent {
    Next,
    Prev,
    /// Pagination dot clicked or digit key pressed
    Jump(usize),
    TogglePause,
    HoverEnter,
    HoverExit,
    /// Pointer pressed at column
    DragStart(i32),
    /// Pointer released at column
    DragEnd(i32),
    DragCancel,
}

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key { key: InputKey, at: Moment },

    /// Mouse event from terminal
    Pointer { event: PointerEvent, at: Moment },

    /// Tick event for carousel deadlines, countdowns and toasts
    Tick(Moment),

    /// Terminal resized
    Resize { width: u16, height: u16, at: Moment },

    /// Force quit (q, Ctrl+C, signal handler)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Navigation Messages
    // ─────────────────────────────────────────────────────────
    /// Move focus to the next section
    FocusNext,
    /// Move focus to the previous section
    FocusPrev,
    /// Drive a carousel
    Carousel {
        section: Section,
        event: CarouselEvent,
        at: Moment,
    },
    /// Commit to the item at `offset` in the visible window of `section`
    Select { section: Section, offset: usize },
    /// Open the detail view for an item
    OpenItem(SelectedItem),
    /// Leave the detail view
    Back,

    // ─────────────────────────────────────────────────────────
    // Catalog Messages
    // ─────────────────────────────────────────────────────────
    /// Fetch (or re-fetch) every section
    LoadCatalog,
    /// A section fetch finished
    SectionLoaded {
        generation: u64,
        section: Section,
        result: Result<SectionItems, String>,
        at: Moment,
    },
    /// The logo fetch finished
    LogosLoaded {
        generation: u64,
        result: Result<Vec<Logo>, String>,
        at: Moment,
    },
}
