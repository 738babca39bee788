//! Checkout orchestration: coupon application, address resolution, and
//! order placement.
//!
//! These functions own the mutation rules around [`CartState`]; route
//! handlers stay thin. Cart locks are taken for synchronous snapshots
//! and updates only, never held across a commerce API call.

use minutemart_core::{Address, AddressId, AppliedCoupon, OrderReceipt, PaymentMethod, Quote};
use secrecy::SecretString;
use uuid::Uuid;

use crate::carts::{self, CartHandle, CartState, CouponState};
use crate::commerce::types::OrderRequest;
use crate::commerce::{ApiError, CommerceClient};
use crate::error::{AppError, Result};
use crate::models::session::keys;
use crate::store::KeyValueStore;

/// Quote for a cart state as it stands.
#[must_use]
pub fn quote_for(state: &CartState) -> Quote {
    let discount = state
        .coupon
        .applied
        .as_ref()
        .map(|coupon| coupon.discount_amount);
    Quote::compute(state.cart.subtotal(), discount)
}

/// Validate a coupon code and apply it to one cart.
///
/// Starting a validation clears the previous error. A rejected code
/// also revokes any previously applied coupon, so a stale discount can
/// never outlive the failure that should have removed it. The
/// `validating` flag blocks concurrent submissions for the same cart
/// and is cleared on every exit path, including cancellation.
///
/// # Errors
///
/// Returns the backend's rejection, or a conflict when a validation is
/// already running for this cart.
pub async fn apply_coupon(
    commerce: &CommerceClient,
    token: &SecretString,
    handle: &CartHandle,
    code: &str,
) -> Result<AppliedCoupon> {
    // Same rejection the backend would send, without the round trip.
    // Coupon state is untouched: no attempt ever started.
    let code = code.trim();
    if code.is_empty() {
        return Err(AppError::BadRequest("Coupon code is required".to_string()));
    }

    let subtotal = {
        let mut state = carts::lock(handle);
        if state.coupon.validating {
            return Err(AppError::Conflict(
                "Coupon validation already in progress".to_string(),
            ));
        }
        state.coupon.error = None;
        state.coupon.validating = true;
        state.cart.subtotal()
    };

    let mut guard = ValidatingGuard {
        handle,
        armed: true,
    };
    let outcome = commerce.validate_coupon(token, code, subtotal).await;

    let mut state = carts::lock(handle);
    guard.armed = false;
    state.coupon.validating = false;

    match outcome {
        Ok(coupon) => {
            state.coupon.applied = Some(coupon.clone());
            state.coupon.error = None;
            Ok(coupon)
        }
        Err(error) => {
            let error = AppError::from(error);
            state.coupon.applied = None;
            state.coupon.error = Some(error.client_message());
            Err(error)
        }
    }
}

/// Clears the in-flight flag if validation never completed.
struct ValidatingGuard<'a> {
    handle: &'a CartHandle,
    armed: bool,
}

impl Drop for ValidatingGuard<'_> {
    fn drop(&mut self) {
        if self.armed {
            carts::lock(self.handle).coupon.validating = false;
        }
    }
}

/// Where a resolved delivery address came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressSource {
    /// Fetched from the commerce API just now.
    Fresh,
    /// Served from the session cache because the fetch failed or came
    /// back empty.
    Cached,
}

/// A delivery address picked for checkout.
#[derive(Debug, Clone)]
pub struct ResolvedAddress {
    pub address: Address,
    pub source: AddressSource,
}

/// Resolve the delivery address for checkout.
///
/// Prefers the backend's default address, then the first saved one.
/// Every successful pick refreshes the session cache; when the fetch
/// fails or returns nothing, the cache is the fallback. `None` means
/// there is no address at all and checkout cannot proceed.
///
/// # Errors
///
/// Propagates auth failures, which end the session. Other fetch errors
/// degrade to the cached copy instead of erroring.
pub async fn resolve_address<K: KeyValueStore>(
    commerce: &CommerceClient,
    token: &SecretString,
    kv: &K,
) -> Result<Option<ResolvedAddress>> {
    match commerce.addresses(token).await {
        Ok(addresses) => {
            let chosen = addresses
                .iter()
                .find(|address| address.is_default)
                .or_else(|| addresses.first())
                .cloned();

            match chosen {
                Some(address) => {
                    if let Ok(value) = serde_json::to_value(&address) {
                        kv.set(keys::DEFAULT_ADDRESS, value).await;
                    }
                    Ok(Some(ResolvedAddress {
                        address,
                        source: AddressSource::Fresh,
                    }))
                }
                None => Ok(cached_address(kv).await),
            }
        }
        Err(error @ ApiError::AuthRequired { .. }) => Err(error.into()),
        Err(error) => {
            tracing::warn!(%error, "address fetch failed, falling back to cached copy");
            Ok(cached_address(kv).await)
        }
    }
}

async fn cached_address<K: KeyValueStore>(kv: &K) -> Option<ResolvedAddress> {
    let value = kv.get(keys::DEFAULT_ADDRESS).await?;
    let address = serde_json::from_value(value).ok()?;
    Some(ResolvedAddress {
        address,
        source: AddressSource::Cached,
    })
}

/// Submit the order for one cart.
///
/// The payable total is never sent; the backend recomputes pricing from
/// its own data. On success the cart, coupon, and idempotency key all
/// reset. On failure everything is preserved so the shopper can retry,
/// and the retry re-sends the same idempotency key.
///
/// # Errors
///
/// Returns the backend's rejection, or a bad request for an empty cart.
pub async fn place_order(
    commerce: &CommerceClient,
    token: &SecretString,
    handle: &CartHandle,
    address_id: AddressId,
    payment_method: Option<PaymentMethod>,
) -> Result<OrderReceipt> {
    let (coupon_code, idempotency_key) = {
        let mut state = carts::lock(handle);
        if state.cart.is_empty() {
            return Err(AppError::BadRequest("Cart is empty".to_string()));
        }
        let coupon_code = state
            .coupon
            .applied
            .as_ref()
            .map(|coupon| coupon.code.clone());
        let idempotency_key = *state.pending_order_key.get_or_insert_with(Uuid::new_v4);
        (coupon_code, idempotency_key)
    };

    let request = OrderRequest {
        address_id,
        coupon_code,
        payment_method,
    };
    let receipt = commerce.place_order(token, &request, idempotency_key).await?;

    let mut state = carts::lock(handle);
    state.cart.clear();
    state.coupon = CouponState::default();
    state.pending_order_key = None;

    Ok(receipt)
}
