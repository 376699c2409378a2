//! Product catalog client.

use async_trait::async_trait;
use mockall::automock;
use reqwest::Client;
use serde::Deserialize;

use crate::{api::ApiError, config::ApiConfig, products::Product};

/// Remote product catalog.
///
/// No query parameters are sent; search and category filtering happen
/// client-side over the full fetched list.
#[automock]
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// Fetch the full product catalog.
    async fn fetch_products(&self) -> Result<Vec<Product>, ApiError>;
}

/// HTTP client for the catalog endpoint.
#[derive(Debug, Clone)]
pub struct HttpCatalogApi {
    config: ApiConfig,
    http: Client,
}

impl HttpCatalogApi {
    /// Create a new client from the given configuration.
    #[must_use]
    pub fn new(config: ApiConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ProductsResponse {
    products: Vec<Product>,
}

#[async_trait]
impl CatalogApi for HttpCatalogApi {
    async fn fetch_products(&self) -> Result<Vec<Product>, ApiError> {
        let url = format!("{}/products", self.config.base_url);

        let response = self.http.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(ApiError::Api("Failed to fetch products".to_owned()));
        }

        let parsed: ProductsResponse = response.json().await?;

        tracing::debug!(count = parsed.products.len(), "fetched product catalog");

        Ok(parsed.products)
    }
}
