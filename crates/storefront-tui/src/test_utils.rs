//! Test utilities for widget and view rendering
//!
//! Provides a [`TestTerminal`] wrapper around ratatui's `TestBackend` plus
//! helpers that build an [`AppState`] with a fixed clock and loaded catalog.

use chrono::{TimeZone, Utc};
use ratatui::{backend::TestBackend, buffer::Buffer, layout::Rect, widgets::Widget, Frame, Terminal};
use storefront_app::config::Settings;
use storefront_app::handler::update;
use storefront_app::{AppState, Message, SectionItems};
use storefront_core::{Banner, ItemId, Moment, Offer, Review};

/// Standard test terminal size (80x24 - classic terminal)
pub const TEST_WIDTH: u16 = 80;
pub const TEST_HEIGHT: u16 = 24;

/// Compact terminal size for responsive testing
pub const COMPACT_WIDTH: u16 = 40;
pub const COMPACT_HEIGHT: u16 = 12;

/// Test terminal wrapper with helper methods
pub struct TestTerminal {
    pub terminal: Terminal<TestBackend>,
}

impl TestTerminal {
    /// Create a new test terminal with standard size (80x24)
    pub fn new() -> Self {
        Self::with_size(TEST_WIDTH, TEST_HEIGHT)
    }

    /// Create a compact test terminal (40x12)
    pub fn compact() -> Self {
        Self::with_size(COMPACT_WIDTH, COMPACT_HEIGHT)
    }

    pub fn with_size(width: u16, height: u16) -> Self {
        let backend = TestBackend::new(width, height);
        let terminal = Terminal::new(backend).expect("Failed to create test terminal");
        Self { terminal }
    }

    pub fn area(&self) -> Rect {
        let size = self.terminal.size().expect("Failed to get terminal size");
        Rect::new(0, 0, size.width, size.height)
    }

    pub fn render_widget<W: Widget>(&mut self, widget: W, area: Rect) {
        self.terminal
            .draw(|frame| frame.render_widget(widget, area))
            .expect("Failed to render widget");
    }

    /// Draws a frame using a custom rendering function, e.g. the full view
    pub fn draw_with<F>(&mut self, f: F)
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(f).expect("Failed to draw frame");
    }

    pub fn buffer(&self) -> &Buffer {
        self.terminal.backend().buffer()
    }

    /// Check if the buffer contains a string anywhere
    pub fn buffer_contains(&self, text: &str) -> bool {
        buffer_to_string(self.buffer()).contains(text)
    }

    /// Check if a specific line contains text
    pub fn line_contains(&self, line: u16, text: &str) -> bool {
        get_line_content(self.buffer(), line).contains(text)
    }

    /// Get the content of a specific cell
    pub fn cell_at(&self, x: u16, y: u16) -> Option<&str> {
        let buffer = self.buffer();
        if x < buffer.area.width && y < buffer.area.height {
            Some(buffer[(x, y)].symbol())
        } else {
            None
        }
    }

    /// Get all content as a string (for debugging)
    pub fn content(&self) -> String {
        buffer_to_string(self.buffer())
    }
}

impl Default for TestTerminal {
    fn default() -> Self {
        Self::new()
    }
}

fn buffer_to_string(buffer: &Buffer) -> String {
    let mut result = String::new();
    for y in 0..buffer.area.height {
        result.push_str(&get_line_content(buffer, y));
        result.push('\n');
    }
    result
}

fn get_line_content(buffer: &Buffer, line: u16) -> String {
    let mut result = String::new();
    if line < buffer.area.height {
        for x in 0..buffer.area.width {
            result.push_str(buffer[(x, line)].symbol());
        }
    }
    result
}

/// Fixed clock: 2025-06-15 10:00 UTC
pub fn test_moment() -> Moment {
    Moment::new(
        std::time::Instant::now(),
        Utc.with_ymd_and_hms(2025, 6, 15, 10, 0, 0).unwrap(),
    )
}

/// Create a minimal AppState for testing
pub fn create_test_state() -> AppState {
    AppState::new(Settings::default(), test_moment())
}

pub fn test_banners() -> Vec<Banner> {
    (1..=3)
        .map(|id| Banner {
            id: ItemId(id),
            title: format!("Banner {id}"),
            subtitle: Some(format!("Subtitle {id}")),
            image_url: None,
            link: Some(format!("/category/{id}")),
            is_active: true,
            position: id as i64,
        })
        .collect()
}

pub fn test_offers() -> Vec<Offer> {
    (1..=2)
        .map(|id| Offer {
            id: ItemId(id),
            title: format!("Offer {id}"),
            description: None,
            product_name: Some("Alphonso Mango".into()),
            discount_percent: 10 * id as u8,
            code: Some(format!("SAVE{id}")),
            starts_at: None,
            ends_at: Some(Utc.with_ymd_and_hms(2025, 6, 16, 10, 0, 0).unwrap()),
            is_active: true,
        })
        .collect()
}

pub fn test_reviews() -> Vec<Review> {
    (1..=4)
        .map(|id| Review {
            id: ItemId(id),
            customer_name: format!("Customer {id}"),
            rating: 5,
            comment: format!("Comment {id}"),
            product_name: None,
            is_published: true,
            created_at: None,
        })
        .collect()
}

/// AppState sized to `width` with every section loaded from the test lists
pub fn loaded_state(width: u16) -> AppState {
    let mut state = create_test_state();
    let at = state.now;
    update(
        &mut state,
        Message::Resize {
            width,
            height: TEST_HEIGHT,
            at,
        },
    );
    let generation = state.begin_load();
    for items in [
        SectionItems::Banners(test_banners()),
        SectionItems::Offers(test_offers()),
        SectionItems::Reviews(test_reviews()),
    ] {
        update(
            &mut state,
            Message::SectionLoaded {
                generation,
                section: items.section(),
                result: Ok(items),
                at,
            },
        );
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::widgets::Paragraph;

    #[test]
    fn test_terminal_sizes() {
        assert_eq!(TestTerminal::new().area(), Rect::new(0, 0, 80, 24));
        assert_eq!(TestTerminal::compact().area(), Rect::new(0, 0, 40, 12));
    }

    #[test]
    fn test_buffer_and_line_contains() {
        let mut term = TestTerminal::with_size(20, 5);
        term.render_widget(Paragraph::new("Hello\nWorld"), term.area());

        assert!(term.buffer_contains("Hello"));
        assert!(term.line_contains(1, "World"));
        assert!(!term.line_contains(0, "World"));
        assert_eq!(term.cell_at(0, 0), Some("H"));
        assert_eq!(term.cell_at(100, 100), None);
    }

    #[test]
    fn test_loaded_state_fills_every_section() {
        let state = loaded_state(TEST_WIDTH);
        assert_eq!(state.banners.window_count(), 3);
        assert_eq!(state.offers.window_count(), 2);
        assert_eq!(state.reviews.window_count(), 4);

        let wide = loaded_state(120);
        assert_eq!(wide.reviews.window_size(), 3);
        assert_eq!(wide.reviews.window_count(), 2);
    }
}
