//! storefront-catalog - Catalog data sources for the storefront showcase
//!
//! The storefront treats its backend as an external collaborator: each
//! resource is fetched once per mount and either yields a list or an error.
//! This crate provides that collaborator:
//!
//! - [`CatalogSource`] - async read access (banners, offers, reviews, logos)
//! - [`HttpCatalog`] - the REST API over reqwest
//! - [`FixtureCatalog`] - a JSON document on disk for offline demos
//! - [`StaticCatalog`] - in-memory lists, with per-resource failure injection
//! - [`Catalog`] - the configured backend, chosen at startup

pub mod fixture;
pub mod http;
pub mod memory;
pub mod source;

pub use fixture::{CatalogDocument, FixtureCatalog};
pub use http::{HttpCatalog, DEFAULT_TIMEOUT};
pub use memory::StaticCatalog;
pub use source::{Catalog, CatalogSource, LocalCatalogSource, Resource};
