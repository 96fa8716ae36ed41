//! Header bar widget
//!
//! Shows the store name (or the active admin-managed logo) with the tagline,
//! and a loading indicator while catalog fetches are in flight.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use storefront_app::StoreContext;

use super::text::{display_width, truncate_with_ellipsis};
use crate::theme::styles;

/// Main header showing the store identity
pub struct StoreHeader<'a> {
    context: &'a StoreContext,
    loading: bool,
}

impl<'a> StoreHeader<'a> {
    pub fn new(context: &'a StoreContext) -> Self {
        Self {
            context,
            loading: false,
        }
    }

    /// Show a loading indicator on the right edge
    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }
}

impl Widget for StoreHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let row = Rect { height: 1, ..inner };

        let right = if self.loading {
            Some(Span::styled("⟳ loading ", styles::status_yellow()))
        } else if self.context.active_logo().is_some() {
            Some(Span::styled("● open ", styles::status_green()))
        } else {
            None
        };
        let right_width = right
            .as_ref()
            .map(|span| display_width(&span.content))
            .unwrap_or(0);

        let name = self.context.display_name();
        let mut spans = vec![
            Span::styled(" ◆ ", styles::accent()),
            Span::styled(name.to_string(), styles::accent_bold()),
        ];
        if let Some(tagline) = self.context.tagline() {
            let used = 3 + display_width(name) + 2 + right_width;
            let room = row.width.saturating_sub(used) as usize;
            if room > 3 {
                spans.push(Span::raw("  "));
                spans.push(Span::styled(
                    truncate_with_ellipsis(tagline, room),
                    styles::text_secondary(),
                ));
            }
        }
        Line::from(spans).render(row, buf);

        if let Some(span) = right {
            if right_width < row.width {
                let right_area = Rect {
                    x: row.x + row.width - right_width,
                    width: right_width,
                    ..row
                };
                Line::from(span).render(right_area, buf);
            }
        }
    }
}
