//! Order routes: placement, history, detail.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use minutemart_core::{AddressId, OrderDetail, OrderId, OrderReceipt, OrderSummary, PaymentMethod};
use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::checkout;
use crate::commerce::types::Acknowledgement;
use crate::error::{AppError, Result, add_breadcrumb};
use crate::middleware::RequireAuth;
use crate::state::AppState;

use super::cart::ensure_cart_key;

/// Request body for placing an order. Everything is optional: the
/// delivery address defaults to the shopper's resolved default, and the
/// backend picks the payment method when none is given.
#[derive(Debug, Default, Deserialize)]
pub struct PlaceOrderRequest {
    #[serde(default)]
    pub address_id: Option<AddressId>,
    #[serde(default)]
    pub payment_method: Option<PaymentMethod>,
}

/// Order history envelope.
#[derive(Debug, Serialize)]
pub struct OrdersView {
    pub orders: Vec<OrderSummary>,
}

/// POST /api/orders
///
/// The applied coupon's code rides along; amounts never do. Without a
/// resolvable delivery address the order is refused before any money
/// could move.
pub async fn place_order(
    State(state): State<AppState>,
    session: Session,
    RequireAuth(auth): RequireAuth,
    Json(payload): Json<PlaceOrderRequest>,
) -> Result<(StatusCode, Json<OrderReceipt>)> {
    let address_id = match payload.address_id {
        Some(id) => id,
        None => checkout::resolve_address(state.commerce(), &auth.token, &session)
            .await?
            .map(|resolved| resolved.address.id)
            .ok_or_else(|| {
                AppError::Conflict("Add a delivery address to continue".to_string())
            })?,
    };

    let key = ensure_cart_key(&session).await?;
    let handle = state.carts().handle(key).await;
    add_breadcrumb("checkout", "place order");

    let receipt = checkout::place_order(
        state.commerce(),
        &auth.token,
        &handle,
        address_id,
        payload.payment_method,
    )
    .await?;

    tracing::info!(order_id = receipt.order_id.as_i32(), "order placed");
    Ok((StatusCode::CREATED, Json(receipt)))
}

/// GET /api/orders
pub async fn list_orders(
    State(state): State<AppState>,
    RequireAuth(auth): RequireAuth,
) -> Result<Json<OrdersView>> {
    let orders = state.commerce().orders(&auth.token).await?;
    Ok(Json(OrdersView { orders }))
}

/// GET /api/orders/{id}
pub async fn get_order(
    State(state): State<AppState>,
    RequireAuth(auth): RequireAuth,
    Path(id): Path<OrderId>,
) -> Result<Json<OrderDetail>> {
    Ok(Json(state.commerce().order(&auth.token, id).await?))
}

/// DELETE /api/orders/{id}
///
/// Removes a delivered or cancelled order from history; the backend
/// refuses anything still in flight.
pub async fn delete_order(
    State(state): State<AppState>,
    RequireAuth(auth): RequireAuth,
    Path(id): Path<OrderId>,
) -> Result<Json<Acknowledgement>> {
    Ok(Json(state.commerce().delete_order(&auth.token, id).await?))
}
