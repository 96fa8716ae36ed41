//! Action handlers: UpdateAction dispatch and background fetch spawning

use std::sync::Arc;

use storefront_catalog::{Catalog, CatalogSource};
use storefront_core::prelude::*;
use storefront_core::Moment;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::handler::UpdateAction;
use crate::message::Message;
use crate::section::{Section, SectionItems};

/// Execute an action by spawning background tasks
///
/// Returns the handles of the spawned tasks.
pub fn handle_action(
    action: UpdateAction,
    msg_tx: mpsc::Sender<Message>,
    catalog: Arc<Catalog>,
) -> Vec<JoinHandle<()>> {
    match action {
        UpdateAction::FetchCatalog { generation } => {
            let mut tasks: Vec<JoinHandle<()>> = Section::ALL
                .into_iter()
                .map(|section| {
                    spawn_section_fetch(section, generation, catalog.clone(), msg_tx.clone())
                })
                .collect();
            tasks.push(spawn_logo_fetch(generation, catalog, msg_tx));
            tasks
        }
    }
}

/// Fetch one section's list and report it back to the event loop
fn spawn_section_fetch(
    section: Section,
    generation: u64,
    catalog: Arc<Catalog>,
    msg_tx: mpsc::Sender<Message>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let result = fetch_section(&catalog, section)
            .await
            .map_err(|e| e.to_string());
        let message = Message::SectionLoaded {
            generation,
            section,
            result,
            at: Moment::now(),
        };
        if msg_tx.send(message).await.is_err() {
            debug!("Event loop gone; dropping {} result", section);
        }
    })
}

fn spawn_logo_fetch(
    generation: u64,
    catalog: Arc<Catalog>,
    msg_tx: mpsc::Sender<Message>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let result = CatalogSource::logos(catalog.as_ref())
            .await
            .map_err(|e| e.to_string());
        let message = Message::LogosLoaded {
            generation,
            result,
            at: Moment::now(),
        };
        if msg_tx.send(message).await.is_err() {
            debug!("Event loop gone; dropping logo result");
        }
    })
}

async fn fetch_section(catalog: &Catalog, section: Section) -> Result<SectionItems> {
    let items = match section {
        Section::Banners => SectionItems::Banners(CatalogSource::banners(catalog).await?),
        Section::Offers => SectionItems::Offers(CatalogSource::offers(catalog).await?),
        Section::Reviews => SectionItems::Reviews(CatalogSource::reviews(catalog).await?),
    };
    Ok(items)
}
