//! Core types for MinuteMart.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod address;
pub mod coupon;
pub mod email;
pub mod id;
pub mod money;
pub mod order;
pub mod product;
pub mod status;

pub use address::Address;
pub use coupon::{AppliedCoupon, DiscountType};
pub use email::{Email, EmailError};
pub use id::*;
pub use money::Money;
pub use order::{OrderAddress, OrderDetail, OrderItem, OrderReceipt, OrderSummary};
pub use product::{Category, Product};
pub use status::{OrderStatus, PaymentMethod, PaymentStatus};
