//! Main TUI runner - entry point and event loop
//!
//! Contains the application lifecycle:
//! - `run`: set up the terminal, mount the storefront and start fetching
//! - `run_loop`: process background results, draw, then poll the terminal

use std::sync::Arc;
use std::time::{Duration, Instant};

use storefront_app::config::Settings;
use storefront_app::message::Message;
use storefront_app::process::process_message;
use storefront_app::signals;
use storefront_app::state::AppState;
use storefront_catalog::Catalog;
use storefront_core::prelude::*;
use storefront_core::Moment;
use tokio::sync::mpsc;

use super::{event, render, terminal};

/// Run the storefront TUI against `catalog`
pub async fn run(settings: Settings, catalog: Catalog) -> Result<()> {
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    let tick_rate = settings.ui.tick_rate();
    let catalog = Arc::new(catalog);
    info!("Catalog source: {}", catalog.describe());

    let mut term = terminal::init()?;
    if let Err(e) = terminal::enable_mouse_capture() {
        warn!("Mouse input unavailable: {}", e);
    }

    let mut state =
        AppState::new(settings, Moment::now()).with_catalog_label(catalog.describe());

    // Unified message channel for fetch results and the signal handler
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);
    signals::spawn_signal_handler(msg_tx.clone());

    // Size the review carousel before the first fetch lands
    match term.size() {
        Ok(size) => process_message(
            &mut state,
            Message::Resize {
                width: size.width,
                height: size.height,
                at: Moment::now(),
            },
            &msg_tx,
            &catalog,
        ),
        Err(e) => warn!("Could not read terminal size: {}", e),
    }

    process_message(&mut state, Message::LoadCatalog, &msg_tx, &catalog);

    let result = run_loop(&mut term, &mut state, msg_rx, &msg_tx, &catalog, tick_rate);

    // Cancel every carousel deadline and release fetched data
    state.teardown();

    if let Err(e) = terminal::disable_mouse_capture() {
        warn!("{}", e);
    }
    let restored = terminal::restore();

    result.and(restored)
}

/// Main event loop
fn run_loop(
    term: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    msg_tx: &mpsc::Sender<Message>,
    catalog: &Arc<Catalog>,
    tick_rate: Duration,
) -> Result<()> {
    let mut last_tick = Instant::now();

    while !state.should_quit() {
        // Process background results (fetches, signal handler)
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg, msg_tx, catalog);
        }

        term.draw(|frame| render::view(frame, state))?;

        match event::poll(tick_rate)? {
            Some(Message::Tick(at)) => {
                last_tick = at.at;
                process_message(state, Message::Tick(at), msg_tx, catalog);
            }
            Some(message) => process_message(state, message, msg_tx, catalog),
            None => {}
        }

        // A steady stream of mouse moves would otherwise starve the tick
        if last_tick.elapsed() >= tick_rate {
            let now = Moment::now();
            last_tick = now.at;
            process_message(state, Message::Tick(now), msg_tx, catalog);
        }
    }

    info!("Storefront shutting down");
    Ok(())
}
