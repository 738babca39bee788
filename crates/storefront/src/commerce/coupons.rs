//! Coupon validation.

use minutemart_core::{AppliedCoupon, Money};
use reqwest::Method;
use secrecy::SecretString;
use serde::Serialize;
use tracing::instrument;

use super::types::CouponValidation;
use super::{ApiError, CommerceClient};

#[derive(Debug, Serialize)]
struct ValidateRequest<'a> {
    code: &'a str,
    cart_total: Money,
}

impl CommerceClient {
    /// Validate a coupon code against the current cart subtotal.
    ///
    /// The backend checks expiry, usage limits, and minimum purchase,
    /// and computes the discount server-side.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Rejected`] with the backend's reason when the
    /// coupon does not apply.
    #[instrument(skip(self, token), fields(code))]
    pub async fn validate_coupon(
        &self,
        token: &SecretString,
        code: &str,
        cart_total: Money,
    ) -> Result<AppliedCoupon, ApiError> {
        let builder = self
            .request(Method::POST, "/api/coupons/validate", Some(token))
            .json(&ValidateRequest { code, cart_total });
        let validation: CouponValidation = self.fetch_json(builder).await?;
        Ok(validation.coupon)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::time::Duration;

    use minutemart_core::DiscountType;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::config::CommerceConfig;

    use super::*;

    async fn test_client(server: &MockServer) -> CommerceClient {
        let config = CommerceConfig {
            base_url: server.uri().parse().unwrap(),
            timeout: Duration::from_secs(2),
        };
        CommerceClient::new(&config).unwrap()
    }

    #[tokio::test]
    async fn test_valid_coupon_returns_discount() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/coupons/validate"))
            .and(header("authorization", "Bearer jwt-token"))
            .and(body_json(serde_json::json!({
                "code": "FLAT50",
                "cart_total": 400.0
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "valid": true,
                "code": "FLAT50",
                "description": "Flat 50 off",
                "discount_type": "fixed",
                "discount_value": 50.0,
                "discount_amount": 50.0,
                "final_amount": 350.0
            })))
            .mount(&server)
            .await;

        let client = test_client(&server).await;
        let token = SecretString::from("jwt-token");
        let coupon = client
            .validate_coupon(&token, "FLAT50", Money::from_rupees(400))
            .await
            .unwrap();

        assert_eq!(coupon.code, "FLAT50");
        assert_eq!(coupon.discount_type, DiscountType::Fixed);
        assert_eq!(coupon.discount_amount, Money::from_rupees(50));
    }

    #[tokio::test]
    async fn test_minimum_purchase_rejection_keeps_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/coupons/validate"))
            .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
                "error": "Minimum purchase amount of 500 required"
            })))
            .mount(&server)
            .await;

        let client = test_client(&server).await;
        let token = SecretString::from("jwt-token");
        let error = client
            .validate_coupon(&token, "BIGSPEND", Money::from_rupees(100))
            .await
            .unwrap_err();

        match error {
            ApiError::Rejected { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message, "Minimum purchase amount of 500 required");
            }
            other => panic!("expected Rejected, got {other:?}"),
        }
    }
}
