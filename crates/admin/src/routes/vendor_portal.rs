//! Vendor portal routes.
//!
//! The seller-facing side of this service. A freshly registered vendor
//! sits in the approval queue; until an administrator approves them the
//! backend answers their login with 403, which surfaces here as an
//! authentication error.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use serde::Serialize;
use serde_json::json;
use tower_sessions::Session;

use minutemart_core::{OrderId, ProductId};

use crate::commerce::types::{LoginRequest, StatusQuery, VendorProductQuery};
use crate::error::{Result, clear_sentry_user, set_sentry_user};
use crate::middleware::{RequireVendor, clear_vendor, establish_vendor};
use crate::models::VendorIdentity;
use crate::state::AppState;

/// Response to a successful vendor login.
#[derive(Debug, Serialize)]
pub struct VendorLoginView {
    pub message: String,
    pub vendor: VendorIdentity,
}

/// POST /api/vendor/register
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<serde_json::Value>,
) -> Result<(StatusCode, Json<serde_json::Value>)> {
    let registered = state.commerce().vendor_register(&payload).await?;
    Ok((StatusCode::CREATED, Json(registered)))
}

/// POST /api/vendor/login
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<VendorLoginView>> {
    let response = state.commerce().vendor_login(&payload).await?;
    let vendor = response.vendor;

    establish_vendor(&session, response.access_token, &vendor).await?;
    set_sentry_user(vendor.user_id.as_i32(), vendor.email.as_str());
    tracing::info!(vendor_id = vendor.id.as_i32(), "vendor logged in");

    Ok(Json(VendorLoginView {
        message: "Logged in successfully".to_string(),
        vendor,
    }))
}

/// POST /api/vendor/logout
pub async fn logout(session: Session) -> Result<Json<serde_json::Value>> {
    clear_vendor(&session).await?;
    clear_sentry_user();

    Ok(Json(json!({ "message": "Logged out" })))
}

/// GET /api/vendor/me
pub async fn me(RequireVendor(auth): RequireVendor) -> Json<VendorIdentity> {
    Json(auth.vendor)
}

/// GET /api/vendor/profile
pub async fn profile(
    State(state): State<AppState>,
    RequireVendor(auth): RequireVendor,
) -> Result<Json<serde_json::Value>> {
    Ok(Json(state.commerce().vendor_profile(&auth.token).await?))
}

/// PUT /api/vendor/profile
pub async fn update_profile(
    State(state): State<AppState>,
    RequireVendor(auth): RequireVendor,
    Json(payload): Json<serde_json::Value>,
) -> Result<Json<serde_json::Value>> {
    Ok(Json(
        state
            .commerce()
            .update_vendor_profile(&auth.token, &payload)
            .await?,
    ))
}

/// GET /api/vendor/products
pub async fn list_products(
    State(state): State<AppState>,
    RequireVendor(auth): RequireVendor,
    Query(query): Query<VendorProductQuery>,
) -> Result<Json<serde_json::Value>> {
    Ok(Json(
        state.commerce().vendor_products(&auth.token, &query).await?,
    ))
}

/// POST /api/vendor/products
///
/// New products land unapproved and invisible to shoppers until an
/// administrator clears them.
pub async fn create_product(
    State(state): State<AppState>,
    RequireVendor(auth): RequireVendor,
    Json(payload): Json<serde_json::Value>,
) -> Result<(StatusCode, Json<serde_json::Value>)> {
    let created = state
        .commerce()
        .vendor_create_product(&auth.token, &payload)
        .await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /api/vendor/products/{id}
pub async fn update_product(
    State(state): State<AppState>,
    RequireVendor(auth): RequireVendor,
    Path(id): Path<ProductId>,
    Json(payload): Json<serde_json::Value>,
) -> Result<Json<serde_json::Value>> {
    Ok(Json(
        state
            .commerce()
            .vendor_update_product(&auth.token, id, &payload)
            .await?,
    ))
}

/// DELETE /api/vendor/products/{id}
pub async fn delete_product(
    State(state): State<AppState>,
    RequireVendor(auth): RequireVendor,
    Path(id): Path<ProductId>,
) -> Result<Json<serde_json::Value>> {
    Ok(Json(
        state.commerce().vendor_delete_product(&auth.token, id).await?,
    ))
}

/// GET /api/vendor/dashboard/stats
pub async fn stats(
    State(state): State<AppState>,
    RequireVendor(auth): RequireVendor,
) -> Result<Json<serde_json::Value>> {
    Ok(Json(state.commerce().vendor_stats(&auth.token).await?))
}

/// GET /api/vendor/orders
pub async fn list_orders(
    State(state): State<AppState>,
    RequireVendor(auth): RequireVendor,
    Query(query): Query<StatusQuery>,
) -> Result<Json<serde_json::Value>> {
    Ok(Json(state.commerce().vendor_orders(&auth.token, &query).await?))
}

/// GET /api/vendor/orders/{id}
pub async fn get_order(
    State(state): State<AppState>,
    RequireVendor(auth): RequireVendor,
    Path(id): Path<OrderId>,
) -> Result<Json<serde_json::Value>> {
    Ok(Json(state.commerce().vendor_order(&auth.token, id).await?))
}

/// PUT /api/vendor/orders/{id}/status
pub async fn update_order_status(
    State(state): State<AppState>,
    RequireVendor(auth): RequireVendor,
    Path(id): Path<OrderId>,
    Json(payload): Json<serde_json::Value>,
) -> Result<Json<serde_json::Value>> {
    Ok(Json(
        state
            .commerce()
            .vendor_update_order_status(&auth.token, id, &payload)
            .await?,
    ))
}

/// DELETE /api/vendor/orders/{id}
pub async fn delete_order(
    State(state): State<AppState>,
    RequireVendor(auth): RequireVendor,
    Path(id): Path<OrderId>,
) -> Result<Json<serde_json::Value>> {
    Ok(Json(
        state.commerce().vendor_delete_order(&auth.token, id).await?,
    ))
}
