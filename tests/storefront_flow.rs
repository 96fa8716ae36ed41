//! End-to-end flows through the TEA loop against the demo fixture catalog
//!
//! These drive `process_message` the way the TUI runner does, minus the
//! terminal: fetch results arrive over the message channel and ticks are
//! supplied explicitly.

use std::sync::Arc;
use std::time::Duration;

use storefront::app::config::Settings;
use storefront::app::message::Message;
use storefront::app::process::process_message;
use storefront::app::{AppState, InputKey, LoadState, Route, Section, SelectedItem};
use storefront::catalog::{Catalog, FixtureCatalog, Resource, StaticCatalog};
use storefront::core::Moment;
use tokio::sync::mpsc;

fn demo_catalog() -> Arc<Catalog> {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("demos/catalog.json");
    Arc::new(Catalog::Fixture(FixtureCatalog::open(path).unwrap()))
}

/// Mount the storefront and wait for every fetch (three sections plus logos)
async fn mount(catalog: &Arc<Catalog>, width: u16) -> (AppState, mpsc::Sender<Message>) {
    let (tx, mut rx) = mpsc::channel(64);
    let mut state = AppState::new(Settings::default(), Moment::now());

    let at = Moment::now();
    process_message(
        &mut state,
        Message::Resize {
            width,
            height: 30,
            at,
        },
        &tx,
        catalog,
    );
    process_message(&mut state, Message::LoadCatalog, &tx, catalog);

    for _ in 0..4 {
        let msg = tokio::time::timeout(Duration::from_secs(5), rx.recv())
            .await
            .expect("fetch timed out")
            .expect("channel closed");
        process_message(&mut state, msg, &tx, catalog);
    }
    (state, tx)
}

fn tick(state: &mut AppState, tx: &mpsc::Sender<Message>, catalog: &Arc<Catalog>, at: Moment) {
    process_message(state, Message::Tick(at), tx, catalog);
}

fn key(state: &mut AppState, tx: &mpsc::Sender<Message>, catalog: &Arc<Catalog>, key: InputKey) {
    let at = state.now;
    process_message(state, Message::Key { key, at }, tx, catalog);
}

#[tokio::test]
async fn test_mount_loads_every_section() {
    let catalog = demo_catalog();
    let (state, _tx) = mount(&catalog, 80).await;

    for section in Section::ALL {
        assert_eq!(*state.loads.get(section), LoadState::Ready);
    }
    assert_eq!(state.banners.window_count(), 3);
    assert_eq!(state.offers.window_count(), 3);
    assert_eq!(state.reviews.window_count(), 4);
    assert_eq!(state.context.display_name(), "Harvest & Co.");
}

#[tokio::test]
async fn test_wide_terminal_pages_reviews_in_threes() {
    let catalog = demo_catalog();
    let (state, _tx) = mount(&catalog, 120).await;

    assert_eq!(state.reviews.window_size(), 3);
    assert_eq!(state.reviews.window_count(), 2);
}

#[tokio::test]
async fn test_carousels_rotate_on_ticks() {
    let catalog = demo_catalog();
    let (mut state, tx) = mount(&catalog, 80).await;
    let start = state.now;

    // Nothing moves before the interval
    tick(&mut state, &tx, &catalog, Moment::now());
    assert_eq!(state.banners.current_index(), 0);

    let later = Moment::now().advanced(Duration::from_secs(6));
    tick(&mut state, &tx, &catalog, later);
    assert_eq!(state.banners.current_index(), 1);
    assert_eq!(state.offers.current_index(), 1);
    assert_eq!(state.reviews.current_index(), 1);
    assert!(state.now.at >= start.at);
}

#[tokio::test]
async fn test_paused_section_holds_while_others_rotate() {
    let catalog = demo_catalog();
    let (mut state, tx) = mount(&catalog, 80).await;

    // Focus discounts and pause them
    key(&mut state, &tx, &catalog, InputKey::Tab);
    key(&mut state, &tx, &catalog, InputKey::Char(' '));
    assert!(state.is_paused(Section::Offers));

    let later = Moment::now().advanced(Duration::from_secs(6));
    tick(&mut state, &tx, &catalog, later);
    assert_eq!(state.offers.current_index(), 0);
    assert_eq!(state.banners.current_index(), 1);
}

#[tokio::test]
async fn test_open_and_close_detail() {
    let catalog = demo_catalog();
    let (mut state, tx) = mount(&catalog, 80).await;

    key(&mut state, &tx, &catalog, InputKey::Right);
    key(&mut state, &tx, &catalog, InputKey::Enter);
    match &state.route {
        Route::Detail(SelectedItem::Banner(banner)) => {
            assert_eq!(banner.title, "Free Delivery Over $40");
        }
        other => panic!("expected banner detail, got {other:?}"),
    }

    key(&mut state, &tx, &catalog, InputKey::Esc);
    assert_eq!(state.route, Route::Home);
    assert!(!state.should_quit());

    key(&mut state, &tx, &catalog, InputKey::Char('q'));
    assert!(state.should_quit());
}

#[tokio::test]
async fn test_failed_resource_falls_back_per_section() {
    let document = storefront::catalog::CatalogDocument::default();
    let catalog = Arc::new(Catalog::Static(
        StaticCatalog::new(document).failing(Resource::Reviews, "connection refused"),
    ));
    let (mut state, tx) = mount(&catalog, 80).await;

    assert_eq!(*state.loads.get(Section::Banners), LoadState::Ready);
    assert!(state.banners.is_empty());
    let error = state.loads.get(Section::Reviews).error().unwrap();
    assert!(error.contains("connection refused"));
    assert!(state.toast.is_some());

    // A refresh starts a new generation and refetches everything
    key(&mut state, &tx, &catalog, InputKey::Char('r'));
    assert_eq!(state.generation, 2);
    assert!(state.loads.is_loading());
    drop(tx);
}
