//! Product catalog collaborator.

pub mod commerce;

use async_trait::async_trait;

use crate::models::product::Product;

pub use commerce::CommerceClient;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("api key is not a valid header value")]
    InvalidApiKey,
    #[error("catalog request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("catalog responded with status {0}")]
    Status(u16),
    #[error("catalog response could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Read access to a hosted product catalog.
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// Lists all products in catalog order. No filtering or pagination is requested.
    async fn list_products(&self) -> Result<Vec<Product>, CatalogError>;
}
