//! Delivery partner surface (`/api/delivery/*`, partner token).

use minutemart_core::OrderId;
use reqwest::Method;
use secrecy::SecretString;
use tracing::instrument;

use super::types::StatusQuery;
use super::{ApiError, CommerceClient};

impl CommerceClient {
    /// The partner's own record, verification state included.
    ///
    /// # Errors
    ///
    /// Returns an error if the commerce API call fails.
    #[instrument(skip_all)]
    pub async fn delivery_profile(
        &self,
        token: &SecretString,
    ) -> Result<serde_json::Value, ApiError> {
        let builder = self.request(Method::GET, "/api/delivery/profile", Some(token));
        self.forward(builder).await
    }

    /// Delivery assignments. `status=available` lists unclaimed orders
    /// ready to go out; otherwise the partner's own assignments.
    ///
    /// # Errors
    ///
    /// Returns an error if the commerce API call fails.
    #[instrument(skip_all)]
    pub async fn delivery_assignments(
        &self,
        token: &SecretString,
        query: &StatusQuery,
    ) -> Result<serde_json::Value, ApiError> {
        let builder = self
            .request(Method::GET, "/api/delivery/orders", Some(token))
            .query(query);
        self.forward(builder).await
    }

    /// Claim an unassigned order for delivery.
    ///
    /// # Errors
    ///
    /// Returns an error if someone else claimed it first.
    #[instrument(skip_all, fields(order_id = %id))]
    pub async fn accept_assignment(
        &self,
        token: &SecretString,
        id: OrderId,
    ) -> Result<serde_json::Value, ApiError> {
        let builder = self.request(
            Method::PUT,
            &format!("/api/delivery/orders/{id}/accept"),
            Some(token),
        );
        self.forward(builder).await
    }

    /// Mark a claimed order as delivered.
    ///
    /// # Errors
    ///
    /// Returns an error if the order is not assigned to this partner.
    #[instrument(skip_all, fields(order_id = %id))]
    pub async fn complete_assignment(
        &self,
        token: &SecretString,
        id: OrderId,
    ) -> Result<serde_json::Value, ApiError> {
        let builder = self.request(
            Method::PUT,
            &format!("/api/delivery/orders/{id}/complete"),
            Some(token),
        );
        self.forward(builder).await
    }
}
