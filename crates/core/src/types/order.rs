//! Order read models and the placement receipt.
//!
//! All of these mirror commerce API responses. Timestamps arrive as naive
//! ISO 8601 strings (no offset), hence `NaiveDateTime`.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::id::{OrderId, ProductId};
use super::money::Money;
use super::status::{OrderStatus, PaymentMethod, PaymentStatus};

/// One row of the shopper's order history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderSummary {
    pub id: OrderId,
    pub total_amount: Money,
    pub discount_amount: Money,
    pub final_amount: Money,
    pub status: OrderStatus,
    pub payment_status: PaymentStatus,
    pub created_at: NaiveDateTime,
    pub items_count: u32,
}

impl OrderSummary {
    /// Whether the backend permits the shopper to delete this order.
    #[must_use]
    pub const fn is_deletable(&self) -> bool {
        self.status.is_terminal()
    }
}

/// A line within a placed order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub product_id: ProductId,
    pub product_name: String,
    pub quantity: u32,
    pub price: Money,
    pub total: Money,
}

/// The delivery address snapshot attached to an order.
///
/// Unlike a saved [`Address`](super::Address) this carries no id or default
/// flag; it is the denormalized copy the order was placed with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderAddress {
    pub address_line1: String,
    #[serde(default)]
    pub address_line2: Option<String>,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    #[serde(default)]
    pub country: Option<String>,
}

/// Full detail for one order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderDetail {
    pub id: OrderId,
    pub total_amount: Money,
    pub discount_amount: Money,
    pub final_amount: Money,
    #[serde(default)]
    pub coupon_code: Option<String>,
    pub status: OrderStatus,
    pub payment_status: PaymentStatus,
    pub created_at: NaiveDateTime,
    pub items: Vec<OrderItem>,
    #[serde(default)]
    pub address: Option<OrderAddress>,
}

/// The commerce API's response to a successful placement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderReceipt {
    pub message: String,
    pub order_id: OrderId,
    pub total_amount: Money,
    pub discount_amount: Money,
    pub final_amount: Money,
    pub payment_method: PaymentMethod,
}
