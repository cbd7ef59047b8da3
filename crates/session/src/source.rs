//! Catalog source: where the product collection comes from.

use async_trait::async_trait;
use reqwest::Url;
use serde_json::Value;

use storefront_products::Product;

use crate::config::SessionConfig;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(String),
    #[error("catalog API error ({0}): {1}")]
    Status(u16, String),
    #[error("decode error: {0}")]
    Decode(String),
    #[error("fetch task failed: {0}")]
    Task(String),
    #[error("fetch cancelled")]
    Cancelled,
}

/// Anything able to produce the full product collection once.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch_products(&self) -> Result<Vec<Product>, FetchError>;
}

/// Catalog served as a JSON array over HTTP GET.
#[derive(Debug, Clone)]
pub struct HttpCatalog {
    client: reqwest::Client,
    url: Url,
}

impl HttpCatalog {
    pub fn new(url: Url) -> Self {
        Self {
            client: reqwest::Client::new(),
            url,
        }
    }

    pub fn from_config(config: &SessionConfig) -> Self {
        Self::new(config.catalog_url.clone())
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait]
impl CatalogSource for HttpCatalog {
    async fn fetch_products(&self) -> Result<Vec<Product>, FetchError> {
        tracing::info!(url = %self.url, "fetching product catalog");

        let resp = self
            .client
            .get(self.url.clone())
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16(), resp.text().await.unwrap_or_default()));
        }

        let body = resp.bytes().await.map_err(|e| FetchError::Network(e.to_string()))?;
        decode_catalog(&body)
    }
}

/// Decode a catalog response body.
///
/// The body must be a JSON array. Records that do not decode as a [`Product`]
/// (missing `category.name`, `images`, ...) are skipped with a warning.
pub fn decode_catalog(body: &[u8]) -> Result<Vec<Product>, FetchError> {
    let records: Vec<Value> = serde_json::from_slice(body).map_err(|e| FetchError::Decode(e.to_string()))?;
    let total = records.len();

    let products: Vec<Product> = records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| match serde_json::from_value::<Product>(record) {
            Ok(product) => Some(product),
            Err(err) => {
                tracing::warn!(index, error = %err, "skipping malformed catalog record");
                None
            }
        })
        .collect();

    tracing::info!(total, decoded = products.len(), "catalog decoded");
    Ok(products)
}
