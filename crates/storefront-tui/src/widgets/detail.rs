//! Detail view for a selected banner, offer or review

use chrono::{DateTime, Utc};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use storefront_app::SelectedItem;
use storefront_core::{Banner, Offer, Review};

use super::offer::countdown_line;
use crate::theme::styles;

pub struct DetailView<'a> {
    item: &'a SelectedItem,
    now: DateTime<Utc>,
    show_countdown: bool,
}

impl<'a> DetailView<'a> {
    pub fn new(item: &'a SelectedItem, now: DateTime<Utc>) -> Self {
        Self {
            item,
            now,
            show_countdown: true,
        }
    }

    pub fn show_countdown(mut self, show: bool) -> Self {
        self.show_countdown = show;
        self
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let mut lines = vec![
            Line::from(Span::styled(self.item.title(), styles::accent_bold())),
            Line::default(),
        ];
        match self.item {
            SelectedItem::Banner(banner) => banner_lines(banner, &mut lines),
            SelectedItem::Offer(offer) => {
                offer_lines(offer, &mut lines);
                if self.show_countdown {
                    lines.extend(countdown_line(offer, self.now));
                }
            }
            SelectedItem::Review(review) => review_lines(review, &mut lines),
        }
        lines
    }
}

fn field(label: &'static str, value: impl Into<String>) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:<10}", label), styles::text_muted()),
        Span::styled(value.into(), styles::text_primary()),
    ])
}

fn banner_lines(banner: &Banner, lines: &mut Vec<Line<'static>>) {
    if let Some(subtitle) = &banner.subtitle {
        lines.push(Line::from(Span::styled(
            subtitle.clone(),
            styles::text_secondary(),
        )));
        lines.push(Line::default());
    }
    if let Some(link) = &banner.link {
        lines.push(field("Link", link.clone()));
    }
    if let Some(image) = &banner.image_url {
        lines.push(field("Image", image.clone()));
    }
}

fn offer_lines(offer: &Offer, lines: &mut Vec<Line<'static>>) {
    lines.push(Line::from(vec![
        Span::styled(format!("{:<10}", "Discount"), styles::text_muted()),
        Span::styled(format!("{}% off", offer.discount_percent), styles::price_tag()),
    ]));
    if let Some(product) = &offer.product_name {
        lines.push(field("Product", product.clone()));
    }
    if let Some(code) = &offer.code {
        lines.push(field("Code", code.clone()));
    }
    if let Some(end) = offer.ends_at {
        lines.push(field("Ends", end.format("%Y-%m-%d %H:%M UTC").to_string()));
    }
    if let Some(description) = &offer.description {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            description.clone(),
            styles::text_secondary(),
        )));
        lines.push(Line::default());
    }
}

fn review_lines(review: &Review, lines: &mut Vec<Line<'static>>) {
    lines.push(Line::from(vec![
        Span::styled(review.stars(), styles::stars()),
        Span::styled(
            format!("  {}/{}", review.rating, Review::MAX_RATING),
            styles::text_muted(),
        ),
    ]));
    if let Some(product) = &review.product_name {
        lines.push(field("Product", product.clone()));
    }
    if let Some(created) = review.created_at {
        lines.push(field("Posted", created.format("%Y-%m-%d").to_string()));
    }
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        format!("“{}”", review.comment),
        styles::text_primary(),
    )));
}

impl Widget for DetailView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(true).title(Line::from(Span::styled(
            format!(" {} ", self.item.section().label()),
            styles::accent_bold(),
        )));
        let inner = block.inner(area);
        let lines = self.lines();
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }
        let body = Rect {
            x: inner.x + 1,
            width: inner.width.saturating_sub(2),
            ..inner
        };
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(body, buf);
    }
}
