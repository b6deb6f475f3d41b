// src/catalog/commerce.rs
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use tracing::{debug, instrument};

use super::{CatalogError, CatalogService};
use crate::config::CommerceConfig;
use crate::models::product::{Product, ProductPage};

const AUTH_HEADER: &str = "x-authorization";

/// Client for the hosted commerce REST API.
#[derive(Debug, Clone)]
pub struct CommerceClient {
    http: reqwest::Client,
    base_url: String,
}

impl CommerceClient {
    pub fn new(config: &CommerceConfig) -> Result<Self, CatalogError> {
        let mut headers = HeaderMap::new();
        let mut key = HeaderValue::from_str(&config.api_key)
            .map_err(|_| CatalogError::InvalidApiKey)?;
        key.set_sensitive(true);
        headers.insert(AUTH_HEADER, key);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            http,
            base_url: config.api_url.trim_end_matches('/').to_string(),
        })
    }

    fn products_url(&self) -> String {
        format!("{}/products", self.base_url)
    }
}

#[async_trait]
impl CatalogService for CommerceClient {
    #[instrument(skip(self), fields(url = %self.products_url()))]
    async fn list_products(&self) -> Result<Vec<Product>, CatalogError> {
        let response = self.http.get(self.products_url()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        let page: ProductPage = serde_json::from_slice(&body)?;
        debug!(count = page.data.len(), "Fetched products");
        Ok(page.data)
    }
}
