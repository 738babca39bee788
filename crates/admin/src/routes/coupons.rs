//! Coupon management routes (admin-only; the backend hides inactive
//! coupons from everyone else).

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use minutemart_core::CouponId;

use crate::error::Result;
use crate::middleware::RequireAdmin;
use crate::state::AppState;

/// GET /api/admin/coupons
pub async fn list_coupons(
    State(state): State<AppState>,
    RequireAdmin(auth): RequireAdmin,
) -> Result<Json<serde_json::Value>> {
    Ok(Json(state.commerce().coupons(&auth.token).await?))
}

/// POST /api/admin/coupons
pub async fn create_coupon(
    State(state): State<AppState>,
    RequireAdmin(auth): RequireAdmin,
    Json(payload): Json<serde_json::Value>,
) -> Result<(StatusCode, Json<serde_json::Value>)> {
    let created = state.commerce().create_coupon(&auth.token, &payload).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /api/admin/coupons/{id}
pub async fn update_coupon(
    State(state): State<AppState>,
    RequireAdmin(auth): RequireAdmin,
    Path(id): Path<CouponId>,
    Json(payload): Json<serde_json::Value>,
) -> Result<Json<serde_json::Value>> {
    Ok(Json(
        state
            .commerce()
            .update_coupon(&auth.token, id, &payload)
            .await?,
    ))
}

/// DELETE /api/admin/coupons/{id}
pub async fn delete_coupon(
    State(state): State<AppState>,
    RequireAdmin(auth): RequireAdmin,
    Path(id): Path<CouponId>,
) -> Result<Json<serde_json::Value>> {
    Ok(Json(state.commerce().delete_coupon(&auth.token, id).await?))
}
