//! Bottom status bar: toast or key hints on the left, catalog source on the right

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use storefront_app::{AppState, Route};

use super::text::{display_width, truncate_with_ellipsis};
use crate::theme::styles;

const HOME_HINTS: &[(&str, &str)] = &[
    ("←→", "browse"),
    ("1-9", "jump"),
    ("space", "pause"),
    ("tab", "section"),
    ("enter", "open"),
    ("r", "refresh"),
    ("q", "quit"),
];

const DETAIL_HINTS: &[(&str, &str)] = &[("esc", "back"), ("q", "quit")];

pub struct StatusBar<'a> {
    state: &'a AppState,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn hints(&self) -> &'static [(&'static str, &'static str)] {
        match self.state.route {
            Route::Home => HOME_HINTS,
            Route::Detail(_) => DETAIL_HINTS,
        }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let label = &self.state.catalog_label;
        let label_width = if label.is_empty() || display_width(label) + 4 > area.width / 2 {
            0
        } else {
            display_width(label) + 1
        };
        let left_width = area.width - label_width;

        let left = match &self.state.toast {
            Some(toast) => Line::from(vec![
                Span::styled(" ⚠ ", styles::status_red()),
                Span::styled(
                    truncate_with_ellipsis(&toast.message, left_width.saturating_sub(3) as usize),
                    styles::status_red(),
                ),
            ]),
            None => {
                let mut spans = vec![Span::raw(" ")];
                for (key, action) in self.hints() {
                    spans.push(Span::styled(*key, styles::keybinding()));
                    spans.push(Span::raw(" "));
                    spans.push(Span::styled(*action, styles::text_muted()));
                    spans.push(Span::raw("  "));
                }
                Line::from(spans)
            }
        };
        left.render(Rect { width: left_width, ..area }, buf);

        if label_width > 0 {
            Line::from(Span::styled(label.as_str(), styles::text_muted())).render(
                Rect {
                    x: area.x + left_width,
                    width: label_width,
                    ..area
                },
                buf,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{create_test_state, TestTerminal};
    use storefront_app::SelectedItem;
    use storefront_core::{ItemId, Review};

    #[test]
    fn test_home_hints() {
        let state = create_test_state();
        let mut term = TestTerminal::new();
        term.render_widget(StatusBar::new(&state), Rect::new(0, 0, 80, 1));

        assert!(term.buffer_contains("space pause"));
        assert!(term.buffer_contains("q quit"));
    }

    #[test]
    fn test_toast_replaces_hints() {
        let mut state = create_test_state();
        let now = state.now.at;
        state.show_toast("Couldn't load reviews: timeout", now);
        let mut term = TestTerminal::new();
        term.render_widget(StatusBar::new(&state), Rect::new(0, 0, 80, 1));

        assert!(term.buffer_contains("Couldn't load reviews: timeout"));
        assert!(!term.buffer_contains("space pause"));
    }

    #[test]
    fn test_detail_hints_and_catalog_label() {
        let mut state = create_test_state().with_catalog_label("fixture demo.json");
        state.route = Route::Detail(SelectedItem::Review(Review {
            id: ItemId(1),
            customer_name: "Ines".into(),
            rating: 5,
            comment: "Great".into(),
            product_name: None,
            is_published: true,
            created_at: None,
        }));
        let mut term = TestTerminal::new();
        term.render_widget(StatusBar::new(&state), Rect::new(0, 0, 80, 1));

        assert!(term.buffer_contains("esc back"));
        assert!(term.buffer_contains("fixture demo.json"));
    }
}
