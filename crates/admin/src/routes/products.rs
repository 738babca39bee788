//! Product routes.
//!
//! Reads are open (the dashboards need the catalog for pick lists and
//! edit forms; the backend serves it without a token). Mutations and
//! the approval queue require an administrator session.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;

use minutemart_core::ProductId;

use crate::commerce::types::{PendingProductQuery, ProductListQuery};
use crate::error::Result;
use crate::middleware::RequireAdmin;
use crate::state::AppState;

/// GET /api/products
pub async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<ProductListQuery>,
) -> Result<Json<serde_json::Value>> {
    Ok(Json(state.commerce().products(&query).await?))
}

/// GET /api/products/{id}
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
) -> Result<Json<serde_json::Value>> {
    Ok(Json(state.commerce().product(id).await?))
}

/// POST /api/admin/products
pub async fn create_product(
    State(state): State<AppState>,
    RequireAdmin(auth): RequireAdmin,
    Json(payload): Json<serde_json::Value>,
) -> Result<(StatusCode, Json<serde_json::Value>)> {
    let created = state.commerce().create_product(&auth.token, &payload).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /api/admin/products/{id}
pub async fn update_product(
    State(state): State<AppState>,
    RequireAdmin(auth): RequireAdmin,
    Path(id): Path<ProductId>,
    Json(payload): Json<serde_json::Value>,
) -> Result<Json<serde_json::Value>> {
    Ok(Json(
        state
            .commerce()
            .update_product(&auth.token, id, &payload)
            .await?,
    ))
}

/// DELETE /api/admin/products/{id}
pub async fn delete_product(
    State(state): State<AppState>,
    RequireAdmin(auth): RequireAdmin,
    Path(id): Path<ProductId>,
) -> Result<Json<serde_json::Value>> {
    Ok(Json(state.commerce().delete_product(&auth.token, id).await?))
}

/// GET /api/admin/products/pending
pub async fn pending_products(
    State(state): State<AppState>,
    RequireAdmin(auth): RequireAdmin,
    Query(query): Query<PendingProductQuery>,
) -> Result<Json<serde_json::Value>> {
    Ok(Json(
        state.commerce().pending_products(&auth.token, &query).await?,
    ))
}

/// PUT /api/admin/products/{id}/approve
pub async fn approve_product(
    State(state): State<AppState>,
    RequireAdmin(auth): RequireAdmin,
    Path(id): Path<ProductId>,
    Json(payload): Json<serde_json::Value>,
) -> Result<Json<serde_json::Value>> {
    Ok(Json(
        state
            .commerce()
            .approve_product(&auth.token, id, &payload)
            .await?,
    ))
}
