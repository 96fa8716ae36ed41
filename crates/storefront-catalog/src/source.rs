//! Catalog source abstraction
//!
//! The storefront fetches each resource once per mount through a
//! [`CatalogSource`]. The UI never sees which backend answered.

use std::fmt;

use storefront_core::prelude::*;
use storefront_core::{Banner, Logo, Offer, Review};

use crate::fixture::FixtureCatalog;
use crate::http::HttpCatalog;
use crate::memory::StaticCatalog;

/// A list endpoint exposed by the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Banners,
    Offers,
    Reviews,
    Logos,
}

impl Resource {
    /// Path segment of the REST endpoint, relative to the API base URL
    pub fn path(&self) -> &'static str {
        match self {
            Resource::Banners => "banners",
            Resource::Offers => "discounts",
            Resource::Reviews => "reviews",
            Resource::Logos => "logos",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Read access to the storefront catalog
#[trait_variant::make(CatalogSource: Send)]
pub trait LocalCatalogSource {
    /// Home page banner slides
    async fn banners(&self) -> Result<Vec<Banner>>;

    /// Discount promotions
    async fn offers(&self) -> Result<Vec<Offer>>;

    /// Customer reviews
    async fn reviews(&self) -> Result<Vec<Review>>;

    /// Store logos
    async fn logos(&self) -> Result<Vec<Logo>>;
}

/// The configured catalog backend
#[derive(Debug, Clone)]
pub enum Catalog {
    /// Remote REST API
    Http(HttpCatalog),
    /// JSON document on disk
    Fixture(FixtureCatalog),
    /// In-memory lists
    Static(StaticCatalog),
}

impl Catalog {
    /// Short human-readable description for logs and the status bar
    pub fn describe(&self) -> String {
        match self {
            Catalog::Http(c) => c.base_url().to_string(),
            Catalog::Fixture(c) => format!("fixture {}", c.path().display()),
            Catalog::Static(_) => "in-memory catalog".to_string(),
        }
    }
}

impl CatalogSource for Catalog {
    async fn banners(&self) -> Result<Vec<Banner>> {
        match self {
            Catalog::Http(c) => CatalogSource::banners(c).await,
            Catalog::Fixture(c) => CatalogSource::banners(c).await,
            Catalog::Static(c) => CatalogSource::banners(c).await,
        }
    }

    async fn offers(&self) -> Result<Vec<Offer>> {
        match self {
            Catalog::Http(c) => CatalogSource::offers(c).await,
            Catalog::Fixture(c) => CatalogSource::offers(c).await,
            Catalog::Static(c) => CatalogSource::offers(c).await,
        }
    }

    async fn reviews(&self) -> Result<Vec<Review>> {
        match self {
            Catalog::Http(c) => CatalogSource::reviews(c).await,
            Catalog::Fixture(c) => CatalogSource::reviews(c).await,
            Catalog::Static(c) => CatalogSource::reviews(c).await,
        }
    }

    async fn logos(&self) -> Result<Vec<Logo>> {
        match self {
            Catalog::Http(c) => CatalogSource::logos(c).await,
            Catalog::Fixture(c) => CatalogSource::logos(c).await,
            Catalog::Static(c) => CatalogSource::logos(c).await,
        }
    }
}
