//! Catalog fetch completion handlers

use storefront_core::prelude::*;
use storefront_core::{Logo, Moment};

use crate::section::{LoadState, Section, SectionItems};
use crate::state::AppState;

use super::{UpdateAction, UpdateResult};

/// Start (or restart) fetching every section
pub(crate) fn handle_load_catalog(state: &mut AppState) -> UpdateResult {
    let generation = state.begin_load();
    info!(
        "Fetching catalog from {} (generation {})",
        state.catalog_label, generation
    );
    UpdateResult::action(UpdateAction::FetchCatalog { generation })
}

/// A section fetch finished
pub(crate) fn handle_section_loaded(
    state: &mut AppState,
    generation: u64,
    section: Section,
    result: std::result::Result<SectionItems, String>,
    at: Moment,
) -> UpdateResult {
    if generation != state.generation {
        debug!(
            "Discarding stale {} result (generation {}, current {})",
            section, generation, state.generation
        );
        return UpdateResult::none();
    }

    match result {
        Ok(items) if items.section() == section => {
            let fetched = items.len();
            match items {
                SectionItems::Banners(list) => state.banners.initialize(list, 1, at),
                SectionItems::Offers(list) => state.offers.initialize(list, 1, at),
                SectionItems::Reviews(list) => {
                    let window_size = state.reviews_window_size();
                    state.reviews.initialize(list, window_size, at)
                }
            }
            state.loads.set(section, LoadState::Ready);
            info!("Loaded {} {}", fetched, section.label().to_lowercase());
        }
        Ok(items) => {
            warn!(
                "Ignoring {} items delivered for {}",
                items.section(),
                section
            );
        }
        Err(message) => {
            warn!("Failed to load {}: {}", section, message);
            state.clear_carousel(section);
            state.loads.set(section, LoadState::Failed(message.clone()));
            state.show_toast(
                format!(
                    "Couldn't load {}: {}",
                    section.label().to_lowercase(),
                    message
                ),
                at.at,
            );
        }
    }

    UpdateResult::none()
}

/// The logo fetch finished
pub(crate) fn handle_logos_loaded(
    state: &mut AppState,
    generation: u64,
    result: std::result::Result<Vec<Logo>, String>,
    at: Moment,
) -> UpdateResult {
    if generation != state.generation {
        debug!("Discarding stale logo result (generation {})", generation);
        return UpdateResult::none();
    }

    match result {
        Ok(logos) => state.context.set_logos(logos, at.wall),
        Err(message) => warn!("Failed to load logos: {}", message),
    }

    UpdateResult::none()
}
