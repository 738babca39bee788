//! Category routes. The list is open; mutations are admin-only.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use minutemart_core::CategoryId;

use crate::error::Result;
use crate::middleware::RequireAdmin;
use crate::state::AppState;

/// GET /api/categories
pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<serde_json::Value>> {
    Ok(Json(state.commerce().categories().await?))
}

/// POST /api/admin/categories
pub async fn create_category(
    State(state): State<AppState>,
    RequireAdmin(auth): RequireAdmin,
    Json(payload): Json<serde_json::Value>,
) -> Result<(StatusCode, Json<serde_json::Value>)> {
    let created = state.commerce().create_category(&auth.token, &payload).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /api/admin/categories/{id}
pub async fn update_category(
    State(state): State<AppState>,
    RequireAdmin(auth): RequireAdmin,
    Path(id): Path<CategoryId>,
    Json(payload): Json<serde_json::Value>,
) -> Result<Json<serde_json::Value>> {
    Ok(Json(
        state
            .commerce()
            .update_category(&auth.token, id, &payload)
            .await?,
    ))
}

/// DELETE /api/admin/categories/{id}
pub async fn delete_category(
    State(state): State<AppState>,
    RequireAdmin(auth): RequireAdmin,
    Path(id): Path<CategoryId>,
) -> Result<Json<serde_json::Value>> {
    Ok(Json(state.commerce().delete_category(&auth.token, id).await?))
}
