//! Checkout summary route.

use axum::Json;
use axum::extract::State;
use minutemart_core::{Address, AppliedCoupon, Money, Quote};
use serde::Serialize;
use tower_sessions::Session;

use crate::carts;
use crate::checkout::{self, AddressSource};
use crate::error::Result;
use crate::middleware::RequireAuth;
use crate::state::AppState;

use super::cart::cart_key;

/// Everything the checkout page needs in one response.
#[derive(Debug, Serialize)]
pub struct CheckoutView {
    pub quote: Quote,
    pub coupon: Option<AppliedCoupon>,
    /// Resolved delivery address. `null` means the shopper has to add
    /// one before they can place an order.
    pub address: Option<Address>,
    /// "fresh" when the address came from the commerce API, "cached"
    /// when it came from the session fallback.
    pub address_source: Option<&'static str>,
}

/// GET /api/checkout
pub async fn summary(
    State(state): State<AppState>,
    session: Session,
    RequireAuth(auth): RequireAuth,
) -> Result<Json<CheckoutView>> {
    let resolved = checkout::resolve_address(state.commerce(), &auth.token, &session).await?;

    let (quote, coupon) = match cart_key(&session).await {
        Some(key) => match state.carts().peek(key).await {
            Some(handle) => {
                let cart_state = carts::lock(&handle);
                (
                    checkout::quote_for(&cart_state),
                    cart_state.coupon.applied.clone(),
                )
            }
            None => (Quote::compute(Money::ZERO, None), None),
        },
        None => (Quote::compute(Money::ZERO, None), None),
    };

    let (address, address_source) = match resolved {
        Some(resolved) => {
            let source = match resolved.source {
                AddressSource::Fresh => "fresh",
                AddressSource::Cached => "cached",
            };
            (Some(resolved.address), Some(source))
        }
        None => (None, None),
    };

    Ok(Json(CheckoutView {
        quote,
        coupon,
        address,
        address_source,
    }))
}
