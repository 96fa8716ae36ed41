//! Discount offer card with a live countdown

use chrono::{DateTime, Utc};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use storefront_core::{Countdown, Offer};

use super::text::truncate_with_ellipsis;
use crate::theme::styles;

/// One discount offer
///
/// The countdown is recomputed from `now` on every frame; the card owns no
/// timer of its own.
pub struct OfferCard<'a> {
    offer: &'a Offer,
    now: DateTime<Utc>,
    show_countdown: bool,
}

impl<'a> OfferCard<'a> {
    pub fn new(offer: &'a Offer, now: DateTime<Utc>) -> Self {
        Self {
            offer,
            now,
            show_countdown: true,
        }
    }

    pub fn show_countdown(mut self, show: bool) -> Self {
        self.show_countdown = show;
        self
    }
}

/// Countdown line for an offer, if it has an end time
pub fn countdown_line(offer: &Offer, now: DateTime<Utc>) -> Option<Line<'static>> {
    let end = offer.ends_at?;
    let line = match Countdown::until(now, end) {
        Countdown::Expired => Line::from(Span::styled("Expired", styles::status_red())),
        running => Line::from(vec![
            Span::styled("Ends in ", styles::text_muted()),
            Span::styled(running.to_string(), styles::status_yellow()),
        ]),
    };
    Some(line)
}

impl Widget for OfferCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }
        let width = area.width as usize;
        let offer = self.offer;

        let badge = format!("-{}% ", offer.discount_percent);
        let title_room = width.saturating_sub(badge.len());
        let mut lines = vec![Line::from(vec![
            Span::styled(badge, styles::price_tag()),
            Span::styled(
                truncate_with_ellipsis(&offer.title, title_room),
                styles::title(),
            ),
        ])];

        let detail = offer
            .product_name
            .as_deref()
            .or(offer.description.as_deref());
        if let Some(detail) = detail {
            lines.push(Line::from(Span::styled(
                truncate_with_ellipsis(detail, width),
                styles::text_secondary(),
            )));
        }
        if let Some(code) = &offer.code {
            lines.push(Line::from(vec![
                Span::styled("Code ", styles::text_muted()),
                Span::styled(code.clone(), styles::price_tag()),
            ]));
        }
        if self.show_countdown {
            lines.extend(countdown_line(offer, self.now));
        }

        Paragraph::new(lines).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use chrono::TimeZone;
    use storefront_core::ItemId;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 15, 10, 0, 0).unwrap()
    }

    fn offer() -> Offer {
        Offer {
            id: ItemId(3),
            title: "Weekend Mango Deal".into(),
            description: Some("Boxes of six".into()),
            product_name: Some("Alphonso Mango".into()),
            discount_percent: 25,
            code: Some("MANGO25".into()),
            starts_at: None,
            ends_at: Some(Utc.with_ymd_and_hms(2025, 6, 16, 12, 30, 15).unwrap()),
            is_active: true,
        }
    }

    #[test]
    fn test_offer_card_contents() {
        let offer = offer();
        let mut term = TestTerminal::with_size(60, 5);
        term.render_widget(OfferCard::new(&offer, now()), Rect::new(0, 0, 60, 5));

        assert!(term.line_contains(0, "-25%"));
        assert!(term.line_contains(0, "Weekend Mango Deal"));
        assert!(term.line_contains(1, "Alphonso Mango"));
        assert!(term.line_contains(2, "MANGO25"));
        assert!(term.line_contains(3, "Ends in 1d 02h 30m 15s"));
    }

    #[test]
    fn test_countdown_hidden_when_disabled() {
        let offer = offer();
        let mut term = TestTerminal::with_size(60, 5);
        term.render_widget(
            OfferCard::new(&offer, now()).show_countdown(false),
            Rect::new(0, 0, 60, 5),
        );

        assert!(!term.buffer_contains("Ends in"));
    }

    #[test]
    fn test_countdown_line_expired_and_open_ended() {
        let offer = offer();
        let later = Utc.with_ymd_and_hms(2025, 7, 1, 0, 0, 0).unwrap();
        let expired = countdown_line(&offer, later).unwrap();
        assert_eq!(expired.to_string(), "Expired");

        let open_ended = Offer {
            ends_at: None,
            ..offer
        };
        assert!(countdown_line(&open_ended, now()).is_none());
    }
}
