//! Catalog reads: products and categories.
//!
//! These endpoints are public (no bearer token) and identical for every
//! shopper, so responses go through the client's short-lived cache.
//! Search queries bypass the cache; the long tail of search terms would
//! only churn it.

use minutemart_core::{Product, ProductId};
use reqwest::Method;
use tracing::instrument;

use super::types::{CategoryList, ProductQuery, ProductsPage};
use super::{ApiError, CommerceClient};

impl CommerceClient {
    /// List products for the given filter, sort, and page.
    ///
    /// # Errors
    ///
    /// Returns an error if the commerce API call fails.
    #[instrument(skip(self))]
    pub async fn products(&self, query: &ProductQuery) -> Result<ProductsPage, ApiError> {
        let builder = self.request(Method::GET, "/api/products/", None).query(query);

        if query.is_cacheable() {
            let key = format!("products:{}", cache_suffix(query)?);
            self.fetch_catalog(key, builder).await
        } else {
            self.fetch_json(builder).await
        }
    }

    /// Fetch a single product by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the product does not exist or the call fails.
    #[instrument(skip(self))]
    pub async fn product(&self, id: ProductId) -> Result<Product, ApiError> {
        let builder = self.request(Method::GET, &format!("/api/products/{id}"), None);
        self.fetch_catalog(format!("product:{id}"), builder).await
    }

    /// List active categories.
    ///
    /// # Errors
    ///
    /// Returns an error if the commerce API call fails.
    #[instrument(skip(self))]
    pub async fn categories(&self) -> Result<CategoryList, ApiError> {
        let builder = self.request(Method::GET, "/api/categories/", None);
        self.fetch_catalog("categories".to_string(), builder).await
    }
}

/// Canonical cache key suffix for a product query.
///
/// Serialized field order is the struct's declaration order, so equal
/// queries always produce equal keys.
fn cache_suffix(query: &ProductQuery) -> Result<String, ApiError> {
    serde_json::to_string(query).map_err(ApiError::Payload)
}
