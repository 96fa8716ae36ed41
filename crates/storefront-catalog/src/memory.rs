//! In-memory catalog backend

use std::collections::HashMap;

use storefront_core::prelude::*;
use storefront_core::{Banner, Logo, Offer, Review};

use crate::fixture::CatalogDocument;
use crate::source::{CatalogSource, Resource};

/// Catalog answering from lists held in memory
///
/// Individual resources can be configured to fail, which is how the app's
/// fallback paths are exercised without a network.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    document: CatalogDocument,
    failures: HashMap<Resource, String>,
}

impl StaticCatalog {
    pub fn new(document: CatalogDocument) -> Self {
        Self {
            document,
            failures: HashMap::new(),
        }
    }

    pub fn with_banners(mut self, banners: Vec<Banner>) -> Self {
        self.document.banners = banners;
        self
    }

    pub fn with_offers(mut self, offers: Vec<Offer>) -> Self {
        self.document.offers = offers;
        self
    }

    pub fn with_reviews(mut self, reviews: Vec<Review>) -> Self {
        self.document.reviews = reviews;
        self
    }

    pub fn with_logos(mut self, logos: Vec<Logo>) -> Self {
        self.document.logos = logos;
        self
    }

    /// Make every request for `resource` fail with `message`
    pub fn failing(mut self, resource: Resource, message: impl Into<String>) -> Self {
        self.failures.insert(resource, message.into());
        self
    }

    fn answer<T: Clone>(&self, resource: Resource, items: &[T]) -> Result<Vec<T>> {
        match self.failures.get(&resource) {
            Some(message) => Err(Error::fetch(format!("{}: {}", resource, message))),
            None => Ok(items.to_vec()),
        }
    }
}

impl CatalogSource for StaticCatalog {
    async fn banners(&self) -> Result<Vec<Banner>> {
        self.answer(Resource::Banners, &self.document.banners)
    }

    async fn offers(&self) -> Result<Vec<Offer>> {
        self.answer(Resource::Offers, &self.document.offers)
    }

    async fn reviews(&self) -> Result<Vec<Review>> {
        self.answer(Resource::Reviews, &self.document.reviews)
    }

    async fn logos(&self) -> Result<Vec<Logo>> {
        self.answer(Resource::Logos, &self.document.logos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::ItemId;

    fn review(id: u64) -> Review {
        Review {
            id: ItemId(id),
            customer_name: "Mei".into(),
            rating: 5,
            comment: "Best sourdough in town".into(),
            product_name: None,
            is_published: true,
            created_at: None,
        }
    }

    #[tokio::test]
    async fn test_static_catalog_returns_configured_lists() {
        let catalog = StaticCatalog::default().with_reviews(vec![review(1), review(2)]);

        assert_eq!(catalog.reviews().await.unwrap().len(), 2);
        assert!(catalog.banners().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_static_catalog_failure_is_per_resource() {
        let catalog = StaticCatalog::default()
            .with_reviews(vec![review(1)])
            .failing(Resource::Offers, "backend offline");

        let err = catalog.offers().await.unwrap_err();
        assert!(err.to_string().contains("discounts: backend offline"));
        assert!(err.is_recoverable());
        assert!(catalog.reviews().await.is_ok());
    }
}
