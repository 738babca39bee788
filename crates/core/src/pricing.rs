//! Checkout pricing arithmetic.
//!
//! The store's flat-rate fee policy, applied to a cart subtotal and an
//! optional backend-computed discount. The backend remains the authority
//! for what an order finally costs; this quote is what the shopper sees
//! before placing it.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::Money;

/// Flat handling charge on any non-empty cart, in rupees.
pub const HANDLING_FEE: i64 = 10;

/// Delivery charge below the free-delivery threshold, in rupees.
pub const DELIVERY_FEE: i64 = 40;

/// Subtotal at or above which delivery is free, in rupees.
pub const FREE_DELIVERY_THRESHOLD: i64 = 150;

/// GST rate applied to the subtotal (5%).
fn gst_rate() -> Decimal {
    Decimal::new(5, 2)
}

/// The computed price breakdown for a cart at checkout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub subtotal: Money,
    pub handling_fee: Money,
    pub delivery_fee: Money,
    pub gst: Money,
    pub discount: Money,
    pub to_pay: Money,
}

impl Quote {
    /// Compute the breakdown for a subtotal and an optional discount.
    ///
    /// - handling: flat [`HANDLING_FEE`] unless the cart is empty;
    /// - delivery: [`DELIVERY_FEE`] below [`FREE_DELIVERY_THRESHOLD`], free
    ///   at or above it, and free for an empty cart;
    /// - gst: 5% of the subtotal, rounded to the unit (ties away from zero);
    /// - discount: rounded the same way;
    /// - `to_pay` is floored at zero — an over-discounting coupon can never
    ///   produce a negative payable.
    #[must_use]
    pub fn compute(subtotal: Money, discount: Option<Money>) -> Self {
        let handling_fee = if subtotal.is_zero() {
            Money::ZERO
        } else {
            Money::from_rupees(HANDLING_FEE)
        };

        let delivery_fee =
            if subtotal.is_zero() || subtotal >= Money::from_rupees(FREE_DELIVERY_THRESHOLD) {
                Money::ZERO
            } else {
                Money::from_rupees(DELIVERY_FEE)
            };

        let gst = Money::new(subtotal.amount() * gst_rate()).round_to_unit();
        let discount = discount.unwrap_or(Money::ZERO).round_to_unit();

        let to_pay =
            (subtotal + handling_fee + delivery_fee + gst - discount).clamp_non_negative();

        Self {
            subtotal,
            handling_fee,
            delivery_fee,
            gst,
            discount,
            to_pay,
        }
    }
}
