//! MinuteMart Core - Shared types library.
//!
//! This crate provides common types used across all MinuteMart components:
//! - `storefront` - Customer-facing cart/checkout service
//! - `admin` - Operations service for admin, vendor, and delivery dashboards
//!
//! # Architecture
//!
//! The core crate contains only types and arithmetic - no I/O, no HTTP
//! clients, no session machinery. Everything here is deterministic and
//! testable without a network.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, money, emails, and statuses
//! - [`cart`] - The in-memory cart data structure and its operations
//! - [`pricing`] - Checkout fee/tax/discount arithmetic

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod pricing;
pub mod types;

pub use cart::{Cart, CartLine};
pub use pricing::Quote;
pub use types::*;
