//! Coupon management (administrator token throughout).

use minutemart_core::CouponId;
use reqwest::Method;
use secrecy::SecretString;
use tracing::instrument;

use super::{ApiError, CommerceClient};

impl CommerceClient {
    /// All coupons, newest first, active or not.
    ///
    /// # Errors
    ///
    /// Returns an error if the commerce API call fails.
    #[instrument(skip_all)]
    pub async fn coupons(&self, token: &SecretString) -> Result<serde_json::Value, ApiError> {
        let builder = self.request(Method::GET, "/api/coupons/", Some(token));
        self.forward(builder).await
    }

    /// Create a coupon.
    ///
    /// # Errors
    ///
    /// Returns an error if the code already exists or the call fails.
    #[instrument(skip_all)]
    pub async fn create_coupon(
        &self,
        token: &SecretString,
        payload: &serde_json::Value,
    ) -> Result<serde_json::Value, ApiError> {
        let builder = self
            .request(Method::POST, "/api/coupons/", Some(token))
            .json(payload);
        self.forward(builder).await
    }

    /// Update a coupon's terms or active flag.
    ///
    /// # Errors
    ///
    /// Returns an error if the coupon does not exist or the call fails.
    #[instrument(skip_all, fields(coupon_id = %id))]
    pub async fn update_coupon(
        &self,
        token: &SecretString,
        id: CouponId,
        payload: &serde_json::Value,
    ) -> Result<serde_json::Value, ApiError> {
        let builder = self
            .request(Method::PUT, &format!("/api/coupons/{id}"), Some(token))
            .json(payload);
        self.forward(builder).await
    }

    /// Deactivate a coupon. The backend keeps the row so historical
    /// orders still resolve their code.
    ///
    /// # Errors
    ///
    /// Returns an error if the coupon does not exist or the call fails.
    #[instrument(skip_all, fields(coupon_id = %id))]
    pub async fn delete_coupon(
        &self,
        token: &SecretString,
        id: CouponId,
    ) -> Result<serde_json::Value, ApiError> {
        let builder = self.request(Method::DELETE, &format!("/api/coupons/{id}"), Some(token));
        self.forward(builder).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::time::Duration;

    use wiremock::matchers::{bearer_token, body_json, method, path};
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
    async fn test_create_coupon_forwards_full_terms() {
        let server = MockServer::start().await;
        let terms = serde_json::json!({
            "code": "FRESH50",
            "description": "Flat 50 off on first order",
            "discount_type": "fixed",
            "discount_value": 50,
            "min_purchase_amount": 199,
            "usage_limit": 1000
        });

        Mock::given(method("POST"))
            .and(path("/api/coupons/"))
            .and(bearer_token("admin-jwt"))
            .and(body_json(terms.clone()))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
                "message": "Coupon created successfully",
                "coupon_id": 12
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server).await;
        let created = client
            .create_coupon(&SecretString::from("admin-jwt"), &terms)
            .await
            .unwrap();
        assert_eq!(created["coupon_id"], 12);
    }
}
