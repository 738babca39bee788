//! Vendor administration routes.
//!
//! These manage vendor accounts from the admin side. The vendor-facing
//! portal (registration, own products, own orders) lives in
//! [`crate::routes::vendor_portal`].

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;

use minutemart_core::VendorId;

use crate::commerce::types::VendorListQuery;
use crate::error::Result;
use crate::middleware::RequireAdmin;
use crate::state::AppState;

/// GET /api/admin/vendors
pub async fn list_vendors(
    State(state): State<AppState>,
    RequireAdmin(auth): RequireAdmin,
    Query(query): Query<VendorListQuery>,
) -> Result<Json<serde_json::Value>> {
    Ok(Json(state.commerce().vendors(&auth.token, &query).await?))
}

/// GET /api/admin/vendors/{id}
pub async fn get_vendor(
    State(state): State<AppState>,
    RequireAdmin(auth): RequireAdmin,
    Path(id): Path<VendorId>,
) -> Result<Json<serde_json::Value>> {
    Ok(Json(state.commerce().vendor(&auth.token, id).await?))
}

/// POST /api/admin/vendors/create
///
/// Creates an approved vendor directly, skipping the self-registration
/// queue.
pub async fn create_vendor(
    State(state): State<AppState>,
    RequireAdmin(auth): RequireAdmin,
    Json(payload): Json<serde_json::Value>,
) -> Result<(StatusCode, Json<serde_json::Value>)> {
    let created = state.commerce().create_vendor(&auth.token, &payload).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /api/admin/vendors/{id}
///
/// Approval happens here: the dashboard sends `{"status": "approved"}`
/// and the backend flips the flag that lets the vendor log in.
pub async fn update_vendor(
    State(state): State<AppState>,
    RequireAdmin(auth): RequireAdmin,
    Path(id): Path<VendorId>,
    Json(payload): Json<serde_json::Value>,
) -> Result<Json<serde_json::Value>> {
    Ok(Json(
        state
            .commerce()
            .update_vendor(&auth.token, id, &payload)
            .await?,
    ))
}

/// DELETE /api/admin/vendors/{id}
pub async fn delete_vendor(
    State(state): State<AppState>,
    RequireAdmin(auth): RequireAdmin,
    Path(id): Path<VendorId>,
) -> Result<Json<serde_json::Value>> {
    Ok(Json(state.commerce().delete_vendor(&auth.token, id).await?))
}

/// POST /api/admin/vendors/{id}/categories
pub async fn assign_categories(
    State(state): State<AppState>,
    RequireAdmin(auth): RequireAdmin,
    Path(id): Path<VendorId>,
    Json(payload): Json<serde_json::Value>,
) -> Result<Json<serde_json::Value>> {
    Ok(Json(
        state
            .commerce()
            .assign_vendor_categories(&auth.token, id, &payload)
            .await?,
    ))
}
