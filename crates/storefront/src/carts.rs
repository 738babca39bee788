//! Per-session cart registry.
//!
//! Carts live server-side, keyed by an opaque id stored in the session
//! cookie. Each cart is wrapped in a `Mutex` so concurrent requests
//! from the same session (double-clicked buttons, parallel tabs) apply
//! one at a time. Locks are only ever held for synchronous mutation,
//! never across an await.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use minutemart_core::{AppliedCoupon, Cart};
use moka::future::Cache;
use uuid::Uuid;

/// Idle time after which an untouched cart is dropped.
const CART_IDLE_TTL: Duration = Duration::from_secs(24 * 60 * 60);
/// Upper bound on live carts held in memory.
const MAX_LIVE_CARTS: u64 = 10_000;

/// Coupon state carried beside a cart.
#[derive(Debug, Clone, Default)]
pub struct CouponState {
    /// The currently applied coupon, if any.
    pub applied: Option<AppliedCoupon>,
    /// Message from the most recent failed validation.
    pub error: Option<String>,
    /// A validation request is in flight for this cart.
    pub validating: bool,
}

/// Everything checkout needs that lives with one shopper's cart.
#[derive(Debug, Default)]
pub struct CartState {
    pub cart: Cart,
    pub coupon: CouponState,
    /// Idempotency key for the in-flight checkout attempt. Created on
    /// first order submission, re-sent on retries, and discarded once
    /// an order lands.
    pub pending_order_key: Option<Uuid>,
}

/// Shared handle to one session's cart state.
pub type CartHandle = Arc<Mutex<CartState>>;

/// Registry of live carts.
///
/// Expiry behaves like a page reload in the SPA: the shopper comes
/// back to an empty cart, nothing errors.
#[derive(Clone)]
pub struct CartRegistry {
    carts: Cache<Uuid, CartHandle>,
}

impl CartRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self {
            carts: Cache::builder()
                .max_capacity(MAX_LIVE_CARTS)
                .time_to_idle(CART_IDLE_TTL)
                .build(),
        }
    }

    /// Fetch the cart for a key, creating an empty one if needed.
    pub async fn handle(&self, key: Uuid) -> CartHandle {
        self.carts.get_with(key, async { CartHandle::default() }).await
    }

    /// Look up a cart without creating one.
    pub async fn peek(&self, key: Uuid) -> Option<CartHandle> {
        self.carts.get(&key).await
    }

    /// Drop a session's cart state entirely.
    pub async fn discard(&self, key: Uuid) {
        self.carts.invalidate(&key).await;
    }
}

impl Default for CartRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for CartRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartRegistry")
            .field("live_carts", &self.carts.entry_count())
            .finish()
    }
}

/// Lock a cart handle, recovering the data from a poisoned mutex.
///
/// Cart state stays structurally valid even if a panic interrupted a
/// previous mutation, so continuing with the inner value is safe.
pub fn lock(handle: &CartHandle) -> MutexGuard<'_, CartState> {
    handle.lock().unwrap_or_else(PoisonError::into_inner)
}
