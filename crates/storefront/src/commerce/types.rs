//! Wire types for the commerce API.
//!
//! Field names follow the backend's JSON exactly. Anything the backend
//! treats as optional gets a `#[serde(default)]` so a missing field
//! never fails the whole response.

use minutemart_core::{
    Address, AddressId, AppliedCoupon, Category, Email, PaymentMethod, Product, UserId,
};
use serde::{Deserialize, Serialize};

/// One page of the product listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductsPage {
    pub products: Vec<Product>,
    pub total: u64,
    pub page: u32,
    pub per_page: u32,
    pub pages: u32,
}

/// Query parameters accepted by the product listing.
///
/// Doubles as the axum `Query` extractor for the storefront's own
/// listing endpoint, so the two stay in sync by construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
}

impl ProductQuery {
    /// Whether this query can be served from the catalog cache.
    ///
    /// Search results are always fetched fresh.
    #[must_use]
    pub const fn is_cacheable(&self) -> bool {
        self.search.is_none()
    }
}

/// Category listing envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryList {
    pub categories: Vec<Category>,
}

/// Address listing envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddressList {
    pub addresses: Vec<Address>,
}

/// Response to creating an address.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddressCreated {
    pub message: String,
    pub address_id: AddressId,
}

/// Request body for creating or updating an address.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddressPayload {
    pub address_line1: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_line2: Option<String>,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default)]
    pub is_default: bool,
}

/// Generic `{"message": ...}` acknowledgement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Acknowledgement {
    pub message: String,
}

/// The commerce API's user record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: UserId,
    pub email: Email,
    pub full_name: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub is_admin: bool,
    #[serde(default)]
    pub is_verified: bool,
}

/// Profile fetch/update envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub user: UserProfile,
}

/// Request body for updating the signed-in user's profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileUpdate {
    pub full_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Login credentials.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful login response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    pub user: UserProfile,
}

/// Registration payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub full_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Registration acknowledgement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Registered {
    pub message: String,
    pub user_id: UserId,
}

/// OTP verification payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyOtpRequest {
    pub email: String,
    pub otp: String,
}

/// Payload for endpoints keyed by email alone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailRequest {
    pub email: String,
}

/// Password reset payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResetPasswordRequest {
    pub email: String,
    pub otp: String,
    pub new_password: String,
}

/// Coupon validation response.
///
/// The backend flattens the coupon fields beside `valid`, which is
/// always `true` on a 200; failures come back as error responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CouponValidation {
    pub valid: bool,
    #[serde(flatten)]
    pub coupon: AppliedCoupon,
}

/// Order creation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderRequest {
    pub address_id: AddressId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coupon_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<PaymentMethod>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use minutemart_core::DiscountType;

    use super::*;

    #[test]
    fn test_products_page_deserializes_backend_shape() {
        let page: ProductsPage = serde_json::from_str(
            r#"{
                "products": [
                    {"id": 1, "name": "Milk 500ml", "price": 30.0, "stock": 12}
                ],
                "total": 1,
                "page": 1,
                "per_page": 20,
                "pages": 1
            }"#,
        )
        .unwrap();
        assert_eq!(page.products.len(), 1);
        assert_eq!(page.pages, 1);
    }

    #[test]
    fn test_coupon_validation_flattens_coupon_fields() {
        let validation: CouponValidation = serde_json::from_str(
            r#"{
                "valid": true,
                "code": "SAVE20",
                "description": "20% off",
                "discount_type": "percentage",
                "discount_value": 20.0,
                "discount_amount": 50.0,
                "final_amount": 200.0
            }"#,
        )
        .unwrap();
        assert!(validation.valid);
        assert_eq!(validation.coupon.code, "SAVE20");
        assert_eq!(validation.coupon.discount_type, DiscountType::Percentage);
    }

    #[test]
    fn test_order_request_omits_absent_optionals() {
        let request = OrderRequest {
            address_id: AddressId::new(4),
            coupon_code: None,
            payment_method: None,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json, serde_json::json!({"address_id": 4}));
    }

    #[test]
    fn test_product_query_serializes_only_set_fields() {
        let query = ProductQuery {
            category_id: Some(2),
            page: Some(1),
            ..ProductQuery::default()
        };
        let encoded = serde_json::to_value(&query).unwrap();
        assert_eq!(encoded, serde_json::json!({"category_id": 2, "page": 1}));
        assert!(query.is_cacheable());
        assert!(
            !ProductQuery {
                search: Some("milk".to_string()),
                ..ProductQuery::default()
            }
            .is_cacheable()
        );
    }
}
