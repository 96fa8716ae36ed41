//! Banner slide widget

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use storefront_core::Banner;

use super::text::truncate_with_ellipsis;
use crate::theme::styles;

/// One banner, centered in its slot
pub struct BannerSlide<'a> {
    banner: &'a Banner,
}

impl<'a> BannerSlide<'a> {
    pub fn new(banner: &'a Banner) -> Self {
        Self { banner }
    }
}

impl Widget for BannerSlide<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }
        let width = area.width as usize;

        let mut lines = vec![Line::from(Span::styled(
            truncate_with_ellipsis(&self.banner.title, width),
            styles::title(),
        ))];
        if let Some(subtitle) = &self.banner.subtitle {
            lines.push(Line::from(Span::styled(
                truncate_with_ellipsis(subtitle, width),
                styles::text_secondary(),
            )));
        }
        if let Some(link) = &self.banner.link {
            lines.push(Line::from(Span::styled(
                truncate_with_ellipsis(&format!("→ {}", link), width),
                styles::accent(),
            )));
        }

        // Vertically center the slide
        let top = area.height.saturating_sub(lines.len() as u16) / 2;
        let body = Rect {
            y: area.y + top,
            height: area.height - top,
            ..area
        };
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(body, buf);
    }
}
