//! Pagination dots under a carousel
//!
//! One dot per window, the current window highlighted. Dots sit two columns
//! apart so each one is a separate click target.

use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

use crate::theme::styles;

const CURRENT: &str = "●";
const OTHER: &str = "○";

pub struct PaginationDots {
    count: usize,
    current: usize,
}

impl PaginationDots {
    pub fn new(count: usize, current: usize) -> Self {
        Self { count, current }
    }

    /// Cell of each dot within `area`, horizontally centered on its first row
    ///
    /// Empty when the dots do not fit; the section title still shows the
    /// position in that case.
    pub fn dot_areas(&self, area: Rect) -> Vec<Rect> {
        if self.count == 0 || area.height == 0 {
            return Vec::new();
        }
        let span = self.count * 2 - 1;
        let Ok(span) = u16::try_from(span) else {
            return Vec::new();
        };
        if span > area.width {
            return Vec::new();
        }
        let start = area.x + (area.width - span) / 2;
        (0..self.count as u16)
            .map(|i| Rect::new(start + i * 2, area.y, 1, 1))
            .collect()
    }
}

impl Widget for PaginationDots {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for (index, cell) in self.dot_areas(area).into_iter().enumerate() {
            let (symbol, style) = if index == self.current {
                (CURRENT, styles::accent())
            } else {
                (OTHER, styles::text_muted())
            };
            buf.set_string(cell.x, cell.y, symbol, style);
        }
    }
}
