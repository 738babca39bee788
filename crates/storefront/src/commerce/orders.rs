//! Order placement and history.

use minutemart_core::{OrderDetail, OrderId, OrderReceipt, OrderSummary};
use reqwest::Method;
use secrecy::SecretString;
use serde::Deserialize;
use tracing::instrument;
use uuid::Uuid;

use super::types::{Acknowledgement, OrderRequest};
use super::{ApiError, CommerceClient};

#[derive(Debug, Deserialize)]
struct OrderList {
    orders: Vec<OrderSummary>,
}

impl CommerceClient {
    /// Place an order for the caller's server-side cart.
    ///
    /// `idempotency_key` is generated client-side per checkout attempt
    /// and re-sent on retries so a timed-out request that actually
    /// landed does not double-charge.
    ///
    /// # Errors
    ///
    /// Returns an error when the backend rejects the order or the call
    /// fails.
    #[instrument(skip(self, token, request), fields(%idempotency_key))]
    pub async fn place_order(
        &self,
        token: &SecretString,
        request: &OrderRequest,
        idempotency_key: Uuid,
    ) -> Result<OrderReceipt, ApiError> {
        let builder = self
            .request(Method::POST, "/api/orders/", Some(token))
            .header("Idempotency-Key", idempotency_key.to_string())
            .json(request);
        self.fetch_json(builder).await
    }

    /// List the caller's orders, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the token is invalid or the call fails.
    #[instrument(skip(self, token))]
    pub async fn orders(&self, token: &SecretString) -> Result<Vec<OrderSummary>, ApiError> {
        let builder = self.request(Method::GET, "/api/orders/", Some(token));
        let list: OrderList = self.fetch_json(builder).await?;
        Ok(list.orders)
    }

    /// Fetch one order with its line items and delivery address.
    ///
    /// # Errors
    ///
    /// Returns an error if the order does not belong to the caller or
    /// the call fails.
    #[instrument(skip(self, token))]
    pub async fn order(&self, token: &SecretString, id: OrderId) -> Result<OrderDetail, ApiError> {
        let builder = self.request(Method::GET, &format!("/api/orders/{id}"), Some(token));
        self.fetch_json(builder).await
    }

    /// Delete a finished order from history.
    ///
    /// The backend only allows this for delivered or cancelled orders.
    ///
    /// # Errors
    ///
    /// Returns an error if the order is still in flight or the call
    /// fails.
    #[instrument(skip(self, token))]
    pub async fn delete_order(
        &self,
        token: &SecretString,
        id: OrderId,
    ) -> Result<Acknowledgement, ApiError> {
        let builder = self.request(Method::DELETE, &format!("/api/orders/{id}"), Some(token));
        self.fetch_json(builder).await
    }
}
