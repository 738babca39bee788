//! Vendor self-service surface (`/api/vendor/*`, vendor token).
//!
//! The backend scopes every call to the vendor who owns the token:
//! their listings, the orders containing their items, their stats.

use minutemart_core::{OrderId, ProductId};
use reqwest::Method;
use secrecy::SecretString;
use tracing::instrument;

use super::types::{StatusQuery, VendorProductQuery};
use super::{ApiError, CommerceClient};

impl CommerceClient {
    /// The vendor's business profile.
    ///
    /// # Errors
    ///
    /// Returns an error if the commerce API call fails.
    #[instrument(skip_all)]
    pub async fn vendor_profile(&self, token: &SecretString) -> Result<serde_json::Value, ApiError> {
        let builder = self.request(Method::GET, "/api/vendor/profile", Some(token));
        self.forward(builder).await
    }

    /// Update the vendor's business profile.
    ///
    /// # Errors
    ///
    /// Returns an error if the commerce API call fails.
    #[instrument(skip_all)]
    pub async fn update_vendor_profile(
        &self,
        token: &SecretString,
        payload: &serde_json::Value,
    ) -> Result<serde_json::Value, ApiError> {
        let builder = self
            .request(Method::PUT, "/api/vendor/profile", Some(token))
            .json(payload);
        self.forward(builder).await
    }

    /// The vendor's own product list.
    ///
    /// # Errors
    ///
    /// Returns an error if the commerce API call fails.
    #[instrument(skip_all)]
    pub async fn vendor_products(
        &self,
        token: &SecretString,
        query: &VendorProductQuery,
    ) -> Result<serde_json::Value, ApiError> {
        let builder = self
            .request(Method::GET, "/api/vendor/products", Some(token))
            .query(query);
        self.forward(builder).await
    }

    /// List a new product. It stays hidden from shoppers until an
    /// administrator approves it.
    ///
    /// # Errors
    ///
    /// Returns an error if required fields are missing or the category
    /// is not assigned to this vendor.
    #[instrument(skip_all)]
    pub async fn vendor_create_product(
        &self,
        token: &SecretString,
        payload: &serde_json::Value,
    ) -> Result<serde_json::Value, ApiError> {
        let builder = self
            .request(Method::POST, "/api/vendor/products", Some(token))
            .json(payload);
        self.forward(builder).await
    }

    /// Update one of the vendor's products.
    ///
    /// # Errors
    ///
    /// Returns an error if the product is not theirs or the call fails.
    #[instrument(skip_all, fields(product_id = %id))]
    pub async fn vendor_update_product(
        &self,
        token: &SecretString,
        id: ProductId,
        payload: &serde_json::Value,
    ) -> Result<serde_json::Value, ApiError> {
        let builder = self
            .request(
                Method::PUT,
                &format!("/api/vendor/products/{id}"),
                Some(token),
            )
            .json(payload);
        self.forward(builder).await
    }

    /// Retire one of the vendor's products.
    ///
    /// # Errors
    ///
    /// Returns an error if the product is not theirs or the call fails.
    #[instrument(skip_all, fields(product_id = %id))]
    pub async fn vendor_delete_product(
        &self,
        token: &SecretString,
        id: ProductId,
    ) -> Result<serde_json::Value, ApiError> {
        let builder = self.request(
            Method::DELETE,
            &format!("/api/vendor/products/{id}"),
            Some(token),
        );
        self.forward(builder).await
    }

    /// Listing counts and assignable categories for the vendor's
    /// dashboard.
    ///
    /// # Errors
    ///
    /// Returns an error if the commerce API call fails.
    #[instrument(skip_all)]
    pub async fn vendor_stats(&self, token: &SecretString) -> Result<serde_json::Value, ApiError> {
        let builder = self.request(Method::GET, "/api/vendor/dashboard/stats", Some(token));
        self.forward(builder).await
    }

    /// Orders containing the vendor's items, with totals restricted to
    /// their share.
    ///
    /// # Errors
    ///
    /// Returns an error if the commerce API call fails.
    #[instrument(skip_all)]
    pub async fn vendor_orders(
        &self,
        token: &SecretString,
        query: &StatusQuery,
    ) -> Result<serde_json::Value, ApiError> {
        let builder = self
            .request(Method::GET, "/api/vendor/orders", Some(token))
            .query(query);
        self.forward(builder).await
    }

    /// One order, restricted to the vendor's items.
    ///
    /// # Errors
    ///
    /// Returns an error if the order has none of their items.
    #[instrument(skip_all, fields(order_id = %id))]
    pub async fn vendor_order(
        &self,
        token: &SecretString,
        id: OrderId,
    ) -> Result<serde_json::Value, ApiError> {
        let builder = self.request(Method::GET, &format!("/api/vendor/orders/{id}"), Some(token));
        self.forward(builder).await
    }

    /// Move an order the vendor fulfills to a new status.
    ///
    /// # Errors
    ///
    /// Returns an error if the order has none of their items or the
    /// status is not one the backend accepts.
    #[instrument(skip_all, fields(order_id = %id))]
    pub async fn vendor_update_order_status(
        &self,
        token: &SecretString,
        id: OrderId,
        payload: &serde_json::Value,
    ) -> Result<serde_json::Value, ApiError> {
        let builder = self
            .request(
                Method::PUT,
                &format!("/api/vendor/orders/{id}/status"),
                Some(token),
            )
            .json(payload);
        self.forward(builder).await
    }

    /// Remove a delivered or cancelled order from the vendor's view.
    ///
    /// # Errors
    ///
    /// Returns an error if the order is still in flight.
    #[instrument(skip_all, fields(order_id = %id))]
    pub async fn vendor_delete_order(
        &self,
        token: &SecretString,
        id: OrderId,
    ) -> Result<serde_json::Value, ApiError> {
        let builder = self.request(
            Method::DELETE,
            &format!("/api/vendor/orders/{id}"),
            Some(token),
        );
        self.forward(builder).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::time::Duration;

    use wiremock::matchers::{bearer_token, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::config::CommerceConfig;

    async fn test_client(server: &MockServer) -> CommerceClient {
        let config = CommerceConfig {
            base_url: server.uri().parse().unwrap(),
            timeout: Duration::from_secs(2),
        };
        CommerceClient::new(&config).unwrap()
    }

    #[tokio::test]
    async fn test_vendor_products_scopes_by_token() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/vendor/products"))
            .and(bearer_token("vendor-jwt"))
            .and(query_param("search", "paneer"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "products": [], "total": 0, "page": 1, "per_page": 20, "pages": 0
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server).await;
        let query = VendorProductQuery {
            search: Some("paneer".to_string()),
            ..VendorProductQuery::default()
        };
        client
            .vendor_products(&SecretString::from("vendor-jwt"), &query)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_vendor_order_status_update() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/api/vendor/orders/9/status"))
            .and(bearer_token("vendor-jwt"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "message": "Order status updated successfully"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server).await;
        client
            .vendor_update_order_status(
                &SecretString::from("vendor-jwt"),
                OrderId::new(9),
                &serde_json::json!({ "status": "Processing" }),
            )
            .await
            .unwrap();
    }
}
