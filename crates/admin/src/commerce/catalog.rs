//! Catalog management: product and category CRUD.
//!
//! Reads hit the same public endpoints shoppers use; writes require an
//! administrator token. Vendors manage their own listings through the
//! `/api/vendor/products` surface instead (see [`super::vendor`]).

use minutemart_core::{CategoryId, ProductId};
use reqwest::Method;
use secrecy::SecretString;
use tracing::instrument;

use super::types::ProductListQuery;
use super::{ApiError, CommerceClient};

impl CommerceClient {
    /// Paginated product list, admin view included fields and all.
    ///
    /// # Errors
    ///
    /// Returns an error if the commerce API call fails.
    #[instrument(skip_all)]
    pub async fn products(&self, query: &ProductListQuery) -> Result<serde_json::Value, ApiError> {
        let builder = self.request(Method::GET, "/api/products/", None).query(query);
        self.forward(builder).await
    }

    /// One product by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the product does not exist or the call fails.
    #[instrument(skip_all, fields(product_id = %id))]
    pub async fn product(&self, id: ProductId) -> Result<serde_json::Value, ApiError> {
        let builder = self.request(Method::GET, &format!("/api/products/{id}"), None);
        self.forward(builder).await
    }

    /// All categories.
    ///
    /// # Errors
    ///
    /// Returns an error if the commerce API call fails.
    #[instrument(skip_all)]
    pub async fn categories(&self) -> Result<serde_json::Value, ApiError> {
        let builder = self.request(Method::GET, "/api/categories/", None);
        self.forward(builder).await
    }

    /// Create a product under the store's own catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if required fields are missing or the call fails.
    #[instrument(skip_all)]
    pub async fn create_product(
        &self,
        token: &SecretString,
        payload: &serde_json::Value,
    ) -> Result<serde_json::Value, ApiError> {
        let builder = self
            .request(Method::POST, "/api/products/", Some(token))
            .json(payload);
        self.forward(builder).await
    }

    /// Update a product.
    ///
    /// # Errors
    ///
    /// Returns an error if the product does not exist or the call fails.
    #[instrument(skip_all, fields(product_id = %id))]
    pub async fn update_product(
        &self,
        token: &SecretString,
        id: ProductId,
        payload: &serde_json::Value,
    ) -> Result<serde_json::Value, ApiError> {
        let builder = self
            .request(Method::PUT, &format!("/api/products/{id}"), Some(token))
            .json(payload);
        self.forward(builder).await
    }

    /// Retire a product. The backend deactivates rather than deletes
    /// when orders reference it.
    ///
    /// # Errors
    ///
    /// Returns an error if the product does not exist or the call fails.
    #[instrument(skip_all, fields(product_id = %id))]
    pub async fn delete_product(
        &self,
        token: &SecretString,
        id: ProductId,
    ) -> Result<serde_json::Value, ApiError> {
        let builder = self.request(Method::DELETE, &format!("/api/products/{id}"), Some(token));
        self.forward(builder).await
    }

    /// Create a category.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is taken or the call fails.
    #[instrument(skip_all)]
    pub async fn create_category(
        &self,
        token: &SecretString,
        payload: &serde_json::Value,
    ) -> Result<serde_json::Value, ApiError> {
        let builder = self
            .request(Method::POST, "/api/categories/", Some(token))
            .json(payload);
        self.forward(builder).await
    }

    /// Update a category.
    ///
    /// # Errors
    ///
    /// Returns an error if the category does not exist or the call fails.
    #[instrument(skip_all, fields(category_id = %id))]
    pub async fn update_category(
        &self,
        token: &SecretString,
        id: CategoryId,
        payload: &serde_json::Value,
    ) -> Result<serde_json::Value, ApiError> {
        let builder = self
            .request(Method::PUT, &format!("/api/categories/{id}"), Some(token))
            .json(payload);
        self.forward(builder).await
    }

    /// Retire a category.
    ///
    /// # Errors
    ///
    /// Returns an error if the category does not exist or the call fails.
    #[instrument(skip_all, fields(category_id = %id))]
    pub async fn delete_category(
        &self,
        token: &SecretString,
        id: CategoryId,
    ) -> Result<serde_json::Value, ApiError> {
        let builder = self.request(
            Method::DELETE,
            &format!("/api/categories/{id}"),
            Some(token),
        );
        self.forward(builder).await
    }
}
