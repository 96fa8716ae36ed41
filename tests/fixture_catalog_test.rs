//! Tests that the bundled demo catalog parses and filters as expected

use chrono::{TimeZone, Utc};
use storefront::catalog::{CatalogDocument, CatalogSource, FixtureCatalog};
use storefront::core::{eligible_items, ItemId};

fn demo_path() -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("demos/catalog.json")
}

#[test]
fn test_demo_catalog_is_valid_json() {
    let json = include_str!("../demos/catalog.json");
    let document: CatalogDocument = serde_json::from_str(json).unwrap();

    assert_eq!(document.banners.len(), 4);
    assert_eq!(document.offers.len(), 4);
    assert_eq!(document.reviews.len(), 5);
    assert_eq!(document.logos.len(), 1);
}

#[test]
fn test_demo_catalog_eligibility() {
    let json = include_str!("../demos/catalog.json");
    let document: CatalogDocument = serde_json::from_str(json).unwrap();
    let now = Utc.with_ymd_and_hms(2025, 6, 15, 10, 0, 0).unwrap();

    let banners = eligible_items(document.banners, now);
    let ids: Vec<ItemId> = banners.iter().map(|b| b.id).collect();
    assert_eq!(ids, vec![ItemId(1), ItemId(2), ItemId(3)]);

    // The spring clearance ended in 2024
    let offers = eligible_items(document.offers, now);
    assert_eq!(offers.len(), 3);
    assert!(offers.iter().all(|o| o.id != ItemId(14)));

    // Unpublished reviews never show
    let reviews = eligible_items(document.reviews, now);
    assert_eq!(reviews.len(), 4);
    assert!(reviews.iter().all(|r| r.customer_name != "Spam Bot"));
}

#[tokio::test]
async fn test_fixture_catalog_serves_demo_file() {
    let catalog = FixtureCatalog::open(demo_path()).unwrap();

    let banners = CatalogSource::banners(&catalog).await.unwrap();
    assert_eq!(banners[0].title, "Mango Season Is Here");

    let offers = CatalogSource::offers(&catalog).await.unwrap();
    assert_eq!(offers[0].code.as_deref(), Some("MANGO25"));

    let logos = CatalogSource::logos(&catalog).await.unwrap();
    assert_eq!(logos[0].name, "Harvest & Co.");
}

#[test]
fn test_missing_fixture_is_reported() {
    let err = FixtureCatalog::open("demos/does-not-exist.json").unwrap_err();
    assert!(err.to_string().contains("does-not-exist.json"));
}
