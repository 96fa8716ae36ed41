//! REST catalog backend
//!
//! Plain JSON list endpoints under a base URL: `GET {base}/banners`,
//! `/discounts`, `/reviews` and `/logos`. Non-2xx responses become
//! [`Error::Http`]; transport timeouts become [`Error::Timeout`].

use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use storefront_core::prelude::*;
use storefront_core::{Banner, Logo, Offer, Review};
use url::Url;

use crate::source::{CatalogSource, Resource};

/// Default request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP client for the storefront REST API
#[derive(Debug, Clone)]
pub struct HttpCatalog {
    http: Client,
    base_url: Url,
}

impl HttpCatalog {
    /// Create a client for `base_url` with a per-request timeout
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let base_url = parse_base_url(base_url)?;
        let http = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("storefront/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::fetch(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Absolute URL of a resource endpoint
    pub fn endpoint(&self, resource: Resource) -> Result<Url> {
        self.base_url
            .join(resource.path())
            .map_err(|e| Error::invalid_url(self.base_url.as_str(), e.to_string()))
    }

    async fn get_list<T: DeserializeOwned>(&self, resource: Resource) -> Result<Vec<T>> {
        let url = self.endpoint(resource)?;
        debug!("GET {}", url);

        let response = self
            .http
            .get(url.clone())
            .header("accept", "application/json")
            .send()
            .await
            .map_err(|e| map_transport_error(resource, e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "(no body)".into());
            warn!("{} returned {}: {}", url, status, body);
            return Err(Error::http(status.as_u16(), url.path(), body));
        }

        let items: Vec<T> = response.json().await.map_err(|e| {
            Error::fetch(format!("invalid response from /{}: {}", resource.path(), e))
        })?;
        debug!("GET {} -> {} items", url, items.len());
        Ok(items)
    }
}

impl CatalogSource for HttpCatalog {
    async fn banners(&self) -> Result<Vec<Banner>> {
        self.get_list(Resource::Banners).await
    }

    async fn offers(&self) -> Result<Vec<Offer>> {
        self.get_list(Resource::Offers).await
    }

    async fn reviews(&self) -> Result<Vec<Review>> {
        self.get_list(Resource::Reviews).await
    }

    async fn logos(&self) -> Result<Vec<Logo>> {
        self.get_list(Resource::Logos).await
    }
}

/// Parse and normalise the API base URL
///
/// A trailing slash is enforced so `Url::join` appends endpoint paths instead
/// of replacing the last segment (`/api/v1` + `banners` must give
/// `/api/v1/banners`).
fn parse_base_url(raw: &str) -> Result<Url> {
    let mut url = Url::parse(raw).map_err(|e| Error::invalid_url(raw, e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(Error::invalid_url(raw, "scheme must be http or https"));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

fn map_transport_error(resource: Resource, err: reqwest::Error) -> Error {
    if err.is_timeout() {
        Error::timeout(format!("/{}", resource.path()))
    } else {
        Error::fetch(format!("/{}: {}", resource.path(), err))
    }
}
