//! Review card widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use storefront_core::Review;

use super::text::{display_width, truncate_with_ellipsis};
use crate::theme::styles;

/// One customer review: stars and name, then the wrapped comment
pub struct ReviewCard<'a> {
    review: &'a Review,
}

impl<'a> ReviewCard<'a> {
    pub fn new(review: &'a Review) -> Self {
        Self { review }
    }
}

impl Widget for ReviewCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }
        let review = self.review;
        let stars = review.stars();
        let name_room = area
            .width
            .saturating_sub(display_width(&stars) + 1) as usize;

        let mut lines = vec![Line::from(vec![
            Span::styled(stars, styles::stars()),
            Span::raw(" "),
            Span::styled(
                truncate_with_ellipsis(&review.customer_name, name_room),
                styles::title(),
            ),
        ])];
        if let Some(product) = &review.product_name {
            lines.push(Line::from(Span::styled(
                truncate_with_ellipsis(product, area.width as usize),
                styles::text_muted(),
            )));
        }
        lines.push(Line::from(Span::styled(
            format!("“{}”", review.comment),
            styles::text_primary(),
        )));

        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}
