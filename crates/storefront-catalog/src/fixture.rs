//! JSON fixture catalog backend
//!
//! Reads a single document shaped like the combined REST responses:
//!
//! ```json
//! { "banners": [...], "discounts": [...], "reviews": [...], "logos": [...] }
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use storefront_core::prelude::*;
use storefront_core::{Banner, Logo, Offer, Review};

use crate::source::CatalogSource;

/// Every catalog list in one document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogDocument {
    #[serde(default)]
    pub banners: Vec<Banner>,
    #[serde(default, rename = "discounts", alias = "offers")]
    pub offers: Vec<Offer>,
    #[serde(default)]
    pub reviews: Vec<Review>,
    #[serde(default)]
    pub logos: Vec<Logo>,
}

/// Catalog backed by a JSON file on disk
#[derive(Debug, Clone)]
pub struct FixtureCatalog {
    path: PathBuf,
}

impl FixtureCatalog {
    /// Point at a fixture file; fails early if it does not exist
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if !path.is_file() {
            return Err(Error::fixture_not_found(path));
        }
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the whole document
    ///
    /// The file is re-read on every call so edits show up on the next
    /// manual refresh.
    pub async fn load(&self) -> Result<CatalogDocument> {
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => Error::fixture_not_found(&self.path),
                _ => Error::Io(e),
            })?;
        let document = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse fixture {}", self.path.display()))?;
        debug!("Loaded catalog fixture from {:?}", self.path);
        Ok(document)
    }
}

impl CatalogSource for FixtureCatalog {
    async fn banners(&self) -> Result<Vec<Banner>> {
        Ok(self.load().await?.banners)
    }

    async fn offers(&self) -> Result<Vec<Offer>> {
        Ok(self.load().await?.offers)
    }

    async fn reviews(&self) -> Result<Vec<Review>> {
        Ok(self.load().await?.reviews)
    }

    async fn logos(&self) -> Result<Vec<Logo>> {
        Ok(self.load().await?.logos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const DOCUMENT: &str = r#"{
        "banners": [
            {"id": 1, "title": "Harvest Festival", "position": 2},
            {"id": 2, "title": "Bakery Corner", "position": 1, "is_active": false}
        ],
        "discounts": [
            {"id": 10, "title": "Citrus Crate", "discount_percent": 25}
        ],
        "reviews": [
            {"id": 20, "customer_name": "Luis", "rating": 4, "comment": "Great cheese"}
        ]
    }"#;

    #[test]
    fn test_open_missing_fixture() {
        let temp = tempdir().unwrap();
        let err = FixtureCatalog::open(temp.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, Error::FixtureNotFound { .. }));
    }

    #[tokio::test]
    async fn test_fixture_lists() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("catalog.json");
        std::fs::write(&path, DOCUMENT).unwrap();

        let catalog = FixtureCatalog::open(&path).unwrap();

        assert_eq!(catalog.banners().await.unwrap().len(), 2);
        assert_eq!(catalog.offers().await.unwrap()[0].discount_percent, 25);
        assert_eq!(catalog.reviews().await.unwrap()[0].customer_name, "Luis");
        assert!(catalog.logos().await.unwrap().is_empty());
    }

    #[test]
    fn test_offers_alias() {
        let doc: CatalogDocument =
            serde_json::from_str(r#"{"offers": [{"id": 1, "title": "Berries"}]}"#).unwrap();
        assert_eq!(doc.offers.len(), 1);
    }

    #[tokio::test]
    async fn test_malformed_fixture_is_json_error() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("catalog.json");
        std::fs::write(&path, "{ not json").unwrap();

        let catalog = FixtureCatalog::open(&path).unwrap();
        let err = catalog.banners().await.unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[tokio::test]
    async fn test_fixture_removed_after_open() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("catalog.json");
        std::fs::write(&path, DOCUMENT).unwrap();
        let catalog = FixtureCatalog::open(&path).unwrap();

        std::fs::remove_file(&path).unwrap();

        let err = catalog.reviews().await.unwrap_err();
        assert!(matches!(err, Error::FixtureNotFound { .. }));
    }
}
