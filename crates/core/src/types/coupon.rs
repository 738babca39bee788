//! Coupon application results.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::money::Money;

/// How a coupon's `discount_value` is interpreted by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiscountType {
    /// `discount_value` percent of the cart total, possibly capped.
    Percentage,
    /// A flat `discount_value` off the cart total.
    Fixed,
}

/// A successfully validated coupon, as returned by the commerce API.
///
/// `discount_amount` is the backend-computed reduction for the subtotal the
/// validation was called with; it is not re-derived locally. The payable
/// computation clamps at zero regardless of what arrives here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppliedCoupon {
    pub code: String,
    #[serde(default)]
    pub description: Option<String>,
    pub discount_type: DiscountType,
    pub discount_value: Decimal,
    pub discount_amount: Money,
    pub final_amount: Money,
}
