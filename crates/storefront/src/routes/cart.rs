//! Cart routes.
//!
//! The cart lives server-side, keyed by an id in the session cookie.
//! Every mutation answers with the full cart view so the client never
//! has to re-derive totals.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use minutemart_core::{AppliedCoupon, Money, Product, ProductId, Quote};
use serde::{Deserialize, Serialize};
use tower_sessions::Session;
use uuid::Uuid;

use crate::carts::{self, CartState, CouponState};
use crate::checkout;
use crate::error::{AppError, Result, add_breadcrumb};
use crate::middleware::RequireAuth;
use crate::models::session::keys;
use crate::state::AppState;

/// One cart line as shown to the client.
#[derive(Debug, Serialize)]
pub struct CartLineView {
    pub product: Product,
    pub quantity: u32,
    pub line_total: Money,
}

/// Full cart snapshot.
#[derive(Debug, Serialize)]
pub struct CartView {
    pub items: Vec<CartLineView>,
    pub count: u32,
    pub quote: Quote,
    pub coupon: Option<AppliedCoupon>,
    pub coupon_error: Option<String>,
    pub validating_coupon: bool,
}

impl CartView {
    pub(super) fn from_state(state: &CartState) -> Self {
        let items = state
            .cart
            .lines()
            .iter()
            .map(|line| CartLineView {
                product: line.product.clone(),
                quantity: line.quantity,
                line_total: line.total(),
            })
            .collect();

        Self {
            items,
            count: state.cart.count(),
            quote: checkout::quote_for(state),
            coupon: state.coupon.applied.clone(),
            coupon_error: state.coupon.error.clone(),
            validating_coupon: state.coupon.validating,
        }
    }

    pub(super) fn empty() -> Self {
        Self::from_state(&CartState::default())
    }
}

/// Read this session's cart key, if it has one.
pub(super) async fn cart_key(session: &Session) -> Option<Uuid> {
    session.get::<Uuid>(keys::CART_KEY).await.ok().flatten()
}

/// Read or mint this session's cart key.
pub(super) async fn ensure_cart_key(session: &Session) -> Result<Uuid> {
    if let Some(key) = cart_key(session).await {
        return Ok(key);
    }
    let key = Uuid::new_v4();
    session.insert(keys::CART_KEY, key).await?;
    Ok(key)
}

/// GET /api/cart
pub async fn show_cart(State(state): State<AppState>, session: Session) -> Result<Json<CartView>> {
    let view = match cart_key(&session).await {
        Some(key) => match state.carts().peek(key).await {
            Some(handle) => CartView::from_state(&carts::lock(&handle)),
            None => CartView::empty(),
        },
        None => CartView::empty(),
    };
    Ok(Json(view))
}

/// GET /api/cart/count
pub async fn count(State(state): State<AppState>, session: Session) -> Result<Json<CountView>> {
    let count = match cart_key(&session).await {
        Some(key) => match state.carts().peek(key).await {
            Some(handle) => carts::lock(&handle).cart.count(),
            None => 0,
        },
        None => 0,
    };
    Ok(Json(CountView { count }))
}

/// Badge count for the cart icon.
#[derive(Debug, Serialize)]
pub struct CountView {
    pub count: u32,
}

/// Request body for adding a product.
#[derive(Debug, Deserialize)]
pub struct AddItemRequest {
    pub product_id: ProductId,
}

/// POST /api/cart/items
///
/// The product is fetched and validated here; the cart never stores a
/// caller-supplied shape. Out-of-stock products are rejected before
/// they ever enter a cart.
pub async fn add_item(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<AddItemRequest>,
) -> Result<(StatusCode, Json<CartView>)> {
    let product = state.commerce().product(payload.product_id).await?;
    if !product.in_stock() {
        return Err(AppError::Conflict(format!("{} is out of stock", product.name)));
    }

    let key = ensure_cart_key(&session).await?;
    let handle = state.carts().handle(key).await;
    add_breadcrumb("cart", &format!("add product {}", product.id));

    let view = {
        let mut cart_state = carts::lock(&handle);
        cart_state.cart.add(product);
        CartView::from_state(&cart_state)
    };
    Ok((StatusCode::CREATED, Json(view)))
}

/// Request body for changing a line's quantity.
#[derive(Debug, Deserialize)]
pub struct UpdateItemRequest {
    pub quantity: i64,
}

/// PUT /api/cart/items/{product_id}
///
/// A quantity of zero or less removes the line. Updating a product that
/// is not in the cart is a no-op, not an error: the cart simply comes
/// back unchanged.
pub async fn update_item(
    State(state): State<AppState>,
    session: Session,
    Path(product_id): Path<ProductId>,
    Json(payload): Json<UpdateItemRequest>,
) -> Result<Json<CartView>> {
    let Some(key) = cart_key(&session).await else {
        return Ok(Json(CartView::empty()));
    };
    let Some(handle) = state.carts().peek(key).await else {
        return Ok(Json(CartView::empty()));
    };

    let quantity = u32::try_from(payload.quantity.max(0)).unwrap_or(u32::MAX);
    let view = {
        let mut cart_state = carts::lock(&handle);
        cart_state.cart.update_quantity(product_id, quantity);
        CartView::from_state(&cart_state)
    };
    Ok(Json(view))
}

/// DELETE /api/cart/items/{product_id}
pub async fn remove_item(
    State(state): State<AppState>,
    session: Session,
    Path(product_id): Path<ProductId>,
) -> Result<Json<CartView>> {
    let Some(key) = cart_key(&session).await else {
        return Ok(Json(CartView::empty()));
    };
    let Some(handle) = state.carts().peek(key).await else {
        return Ok(Json(CartView::empty()));
    };

    let view = {
        let mut cart_state = carts::lock(&handle);
        cart_state.cart.remove(product_id);
        CartView::from_state(&cart_state)
    };
    Ok(Json(view))
}

/// DELETE /api/cart
///
/// Empties the cart lines. Any applied coupon stays; the quote clamps
/// its discount against the now-zero subtotal.
pub async fn clear_cart(State(state): State<AppState>, session: Session) -> Result<Json<CartView>> {
    let Some(key) = cart_key(&session).await else {
        return Ok(Json(CartView::empty()));
    };
    let Some(handle) = state.carts().peek(key).await else {
        return Ok(Json(CartView::empty()));
    };

    let view = {
        let mut cart_state = carts::lock(&handle);
        cart_state.cart.clear();
        CartView::from_state(&cart_state)
    };
    Ok(Json(view))
}

/// Request body for applying a coupon.
#[derive(Debug, Deserialize)]
pub struct ApplyCouponRequest {
    pub code: String,
}

/// POST /api/cart/coupon
pub async fn apply_coupon(
    State(state): State<AppState>,
    session: Session,
    RequireAuth(auth): RequireAuth,
    Json(payload): Json<ApplyCouponRequest>,
) -> Result<Json<CartView>> {
    let key = ensure_cart_key(&session).await?;
    let handle = state.carts().handle(key).await;
    add_breadcrumb("cart", "apply coupon");

    checkout::apply_coupon(state.commerce(), &auth.token, &handle, &payload.code).await?;
    Ok(Json(CartView::from_state(&carts::lock(&handle))))
}

/// DELETE /api/cart/coupon
pub async fn remove_coupon(
    State(state): State<AppState>,
    session: Session,
) -> Result<Json<CartView>> {
    let Some(key) = cart_key(&session).await else {
        return Ok(Json(CartView::empty()));
    };
    let Some(handle) = state.carts().peek(key).await else {
        return Ok(Json(CartView::empty()));
    };

    let view = {
        let mut cart_state = carts::lock(&handle);
        cart_state.coupon = CouponState::default();
        CartView::from_state(&cart_state)
    };
    Ok(Json(view))
}
