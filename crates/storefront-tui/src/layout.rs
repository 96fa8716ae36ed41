//! Screen layout definitions for the TUI
//!
//! The home screen stacks a header, the three carousel sections and a
//! one-row status bar. The detail route reuses the section band as a single
//! content area.

use ratatui::layout::{Constraint, Layout, Rect};

/// Height of the bordered header (top border + title row + bottom border)
pub const HEADER_HEIGHT: u16 = 3;

/// Height of the banner and discount sections
pub const SECTION_HEIGHT: u16 = 7;

/// Minimum height of the review section
pub const MIN_REVIEWS_HEIGHT: u16 = 5;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    pub header: Rect,
    pub banners: Rect,
    pub offers: Rect,
    /// Review cards take whatever height remains
    pub reviews: Rect,
    pub status: Rect,
}

impl ScreenAreas {
    /// The band covering all three sections, used by the detail view
    pub fn content(&self) -> Rect {
        self.banners.union(self.offers).union(self.reviews)
    }
}

/// Create the main screen layout
pub fn create(area: Rect) -> ScreenAreas {
    let chunks = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Length(SECTION_HEIGHT),
        Constraint::Length(SECTION_HEIGHT),
        Constraint::Min(MIN_REVIEWS_HEIGHT),
        Constraint::Length(1),
    ])
    .split(area);

    ScreenAreas {
        header: chunks[0],
        banners: chunks[1],
        offers: chunks[2],
        reviews: chunks[3],
        status: chunks[4],
    }
}

/// Split a card row into `count` equal columns
pub fn card_columns(area: Rect, count: usize) -> Vec<Rect> {
    if count == 0 {
        return Vec::new();
    }
    Layout::horizontal(vec![Constraint::Fill(1); count])
        .spacing(1)
        .split(area)
        .to_vec()
}
