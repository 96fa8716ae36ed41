//! Main render/view function (View in TEA pattern)


use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Widget};
use ratatui::Frame;

use storefront_app::{AppState, LoadState, Region, Route, Section};

use super::{layout, widgets};
use crate::theme::{palette, styles};

/// Render the complete UI (View function in TEA)
///
/// Apart from drawing, the only state this touches is the hit-region map
/// that pointer handling reads on the next event.
pub fn view(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();

    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area);
    state.regions.clear();

    let header = widgets::StoreHeader::new(&state.context).loading(state.loads.is_loading());
    frame.render_widget(header, areas.header);

    let detail = match &state.route {
        Route::Detail(item) => Some(item.clone()),
        Route::Home => None,
    };
    match detail {
        Some(item) => {
            let view = widgets::DetailView::new(&item, state.now.wall)
                .show_countdown(state.settings.ui.show_countdown);
            frame.render_widget(view, areas.content());
        }
        None => {
            render_section(frame, state, Section::Banners, areas.banners);
            render_section(frame, state, Section::Offers, areas.offers);
            render_section(frame, state, Section::Reviews, areas.reviews);
        }
    }

    frame.render_widget(widgets::StatusBar::new(state), areas.status);
}

fn region(rect: Rect) -> Region {
    Region::new(rect.x, rect.y, rect.width, rect.height)
}

/// Section title: label, window position and pause marker
fn section_title(
    section: Section,
    index: usize,
    count: usize,
    paused: bool,
    focused: bool,
) -> Line<'static> {
    let label_style = if focused {
        styles::accent_bold()
    } else {
        styles::title()
    };
    let mut spans = vec![Span::styled(format!(" {} ", section.label()), label_style)];
    if count > 0 {
        spans.push(Span::styled(
            format!("{}/{} ", index + 1, count),
            styles::text_muted(),
        ));
    }
    if paused {
        spans.push(Span::styled("⏸ paused ", styles::status_yellow()));
    }
    Line::from(spans)
}

/// Draw `items` side by side in equal slots, returning each card's area
fn render_cards<'a, T, W, F>(
    frame: &mut Frame,
    items: &'a [T],
    slots: usize,
    area: Rect,
    card: F,
) -> Vec<Rect>
where
    W: Widget,
    F: Fn(&'a T) -> W,
{
    let columns = layout::card_columns(area, slots.max(1));
    for (item, column) in items.iter().zip(&columns) {
        frame.render_widget(card(item), *column);
    }
    columns.into_iter().take(items.len()).collect()
}

fn render_section(frame: &mut Frame, state: &mut AppState, section: Section, area: Rect) {
    let focused = state.focus == section;
    let count = state.window_count(section);
    let index = state.current_index(section);
    let paused = state.is_paused(section);

    let block = styles::glass_block(focused).title(section_title(
        section, index, count, paused, focused,
    ));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    state.regions.add_section(section, region(area));

    if inner.width == 0 || inner.height == 0 {
        return;
    }

    match state.loads.get(section) {
        LoadState::Loading => {
            frame.render_widget(widgets::Placeholder::loading(section), inner);
            return;
        }
        LoadState::Failed(error) => {
            frame.render_widget(widgets::Placeholder::failed(section, error), inner);
            return;
        }
        LoadState::Ready => {}
    }

    if count == 0 {
        frame.render_widget(widgets::Placeholder::empty(section), inner);
        return;
    }

    // Dots take the last inner row when there is more than one window
    let (body, dots_row) = if count > 1 && inner.height > 1 {
        let body = Rect {
            height: inner.height - 1,
            ..inner
        };
        let dots = Rect {
            y: inner.y + inner.height - 1,
            height: 1,
            ..inner
        };
        (body, Some(dots))
    } else {
        (inner, None)
    };

    let now = state.now.wall;
    let show_countdown = state.settings.ui.show_countdown;
    let cards = match section {
        Section::Banners => render_cards(
            frame,
            state.banners.current_window(),
            state.banners.window_size(),
            body,
            widgets::BannerSlide::new,
        ),
        Section::Offers => render_cards(
            frame,
            state.offers.current_window(),
            state.offers.window_size(),
            body,
            |offer| widgets::OfferCard::new(offer, now).show_countdown(show_countdown),
        ),
        Section::Reviews => render_cards(
            frame,
            state.reviews.current_window(),
            state.reviews.window_size(),
            body,
            widgets::ReviewCard::new,
        ),
    };
    for (offset, card) in cards.into_iter().enumerate() {
        state.regions.add_card(section, offset, region(card));
    }

    if let Some(row) = dots_row {
        let dots = widgets::PaginationDots::new(count, index);
        let cells = dots.dot_areas(row);
        frame.render_widget(dots, row);
        for (dot, cell) in cells.into_iter().enumerate() {
            state.regions.add_dot(section, dot, region(cell));
        }
    }
}
