//! Delivery partner administration routes.
//!
//! Verification mirrors vendor approval: partners self-register through
//! the delivery portal and an administrator flips them to `verified`
//! here before they can sign in.

use axum::Json;
use axum::extract::{Path, Query, State};

use minutemart_core::PartnerId;

use crate::commerce::types::PartnerListQuery;
use crate::error::Result;
use crate::middleware::RequireAdmin;
use crate::state::AppState;

/// GET /api/admin/delivery-partners
pub async fn list_partners(
    State(state): State<AppState>,
    RequireAdmin(auth): RequireAdmin,
    Query(query): Query<PartnerListQuery>,
) -> Result<Json<serde_json::Value>> {
    Ok(Json(
        state.commerce().delivery_partners(&auth.token, &query).await?,
    ))
}

/// GET /api/admin/delivery-partners/{id}
pub async fn get_partner(
    State(state): State<AppState>,
    RequireAdmin(auth): RequireAdmin,
    Path(id): Path<PartnerId>,
) -> Result<Json<serde_json::Value>> {
    Ok(Json(state.commerce().delivery_partner(&auth.token, id).await?))
}

/// PUT /api/admin/delivery-partners/{id}
pub async fn update_partner(
    State(state): State<AppState>,
    RequireAdmin(auth): RequireAdmin,
    Path(id): Path<PartnerId>,
    Json(payload): Json<serde_json::Value>,
) -> Result<Json<serde_json::Value>> {
    Ok(Json(
        state
            .commerce()
            .update_delivery_partner(&auth.token, id, &payload)
            .await?,
    ))
}

/// DELETE /api/admin/delivery-partners/{id}
pub async fn delete_partner(
    State(state): State<AppState>,
    RequireAdmin(auth): RequireAdmin,
    Path(id): Path<PartnerId>,
) -> Result<Json<serde_json::Value>> {
    Ok(Json(
        state.commerce().delete_delivery_partner(&auth.token, id).await?,
    ))
}
