//! Centered one-line message shown in place of carousel content

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::Line,
    widgets::{Paragraph, Widget},
};

use storefront_app::Section;

use super::text::truncate_with_ellipsis;
use crate::theme::styles;

pub struct Placeholder {
    text: String,
    style: Style,
}

impl Placeholder {
    pub fn loading(section: Section) -> Self {
        Self {
            text: format!("Loading {}…", section.label().to_lowercase()),
            style: styles::text_muted(),
        }
    }

    pub fn failed(section: Section, error: &str) -> Self {
        Self {
            text: format!(
                "Couldn't load {}: {} (r to retry)",
                section.label().to_lowercase(),
                error
            ),
            style: styles::status_red(),
        }
    }

    pub fn empty(section: Section) -> Self {
        let text = match section {
            Section::Banners => "No banners right now".to_string(),
            Section::Offers => "No active discounts right now".to_string(),
            Section::Reviews => "No reviews yet".to_string(),
        };
        Self {
            text,
            style: styles::text_muted(),
        }
    }
}

impl Widget for Placeholder {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }
        let row = Rect {
            y: area.y + (area.height - 1) / 2,
            height: 1,
            ..area
        };
        Paragraph::new(Line::styled(
            truncate_with_ellipsis(&self.text, area.width as usize),
            self.style,
        ))
        .alignment(Alignment::Center)
        .render(row, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_loading_text() {
        let mut term = TestTerminal::with_size(40, 3);
        term.render_widget(Placeholder::loading(Section::Offers), Rect::new(0, 0, 40, 3));
        assert!(term.line_contains(1, "Loading discounts…"));
    }

    #[test]
    fn test_failed_text_includes_error() {
        let mut term = TestTerminal::with_size(60, 1);
        term.render_widget(
            Placeholder::failed(Section::Reviews, "HTTP 503"),
            Rect::new(0, 0, 60, 1),
        );
        assert!(term.buffer_contains("Couldn't load reviews: HTTP 503"));
    }

    #[test]
    fn test_empty_text_per_section() {
        let mut term = TestTerminal::with_size(40, 1);
        term.render_widget(Placeholder::empty(Section::Offers), Rect::new(0, 0, 40, 1));
        assert!(term.buffer_contains("No active discounts right now"));
    }
}
