//! Store settings routes.

use axum::Json;
use axum::extract::State;

use crate::error::Result;
use crate::middleware::RequireAdmin;
use crate::state::AppState;

/// GET /api/admin/settings
pub async fn get_settings(
    State(state): State<AppState>,
    RequireAdmin(auth): RequireAdmin,
) -> Result<Json<serde_json::Value>> {
    Ok(Json(state.commerce().settings(&auth.token).await?))
}

/// PUT /api/admin/settings
pub async fn update_settings(
    State(state): State<AppState>,
    RequireAdmin(auth): RequireAdmin,
    Json(payload): Json<serde_json::Value>,
) -> Result<Json<serde_json::Value>> {
    Ok(Json(
        state.commerce().update_settings(&auth.token, &payload).await?,
    ))
}
