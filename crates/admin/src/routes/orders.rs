//! Order oversight routes.
//!
//! Status transitions are validated by the backend (it knows which
//! moves are legal for an order in a given state); this service only
//! relays the verdict.

use axum::Json;
use axum::extract::{Path, Query, State};

use minutemart_core::OrderId;

use crate::commerce::types::OrderListQuery;
use crate::error::Result;
use crate::middleware::RequireAdmin;
use crate::state::AppState;

/// GET /api/admin/orders
pub async fn list_orders(
    State(state): State<AppState>,
    RequireAdmin(auth): RequireAdmin,
    Query(query): Query<OrderListQuery>,
) -> Result<Json<serde_json::Value>> {
    Ok(Json(state.commerce().all_orders(&auth.token, &query).await?))
}

/// GET /api/admin/orders/{id}
pub async fn get_order(
    State(state): State<AppState>,
    RequireAdmin(auth): RequireAdmin,
    Path(id): Path<OrderId>,
) -> Result<Json<serde_json::Value>> {
    Ok(Json(state.commerce().order_detail(&auth.token, id).await?))
}

/// PUT /api/admin/orders/{id}/status
pub async fn update_order_status(
    State(state): State<AppState>,
    RequireAdmin(auth): RequireAdmin,
    Path(id): Path<OrderId>,
    Json(payload): Json<serde_json::Value>,
) -> Result<Json<serde_json::Value>> {
    Ok(Json(
        state
            .commerce()
            .update_order_status(&auth.token, id, &payload)
            .await?,
    ))
}
