//! Admin dashboard routes.

use axum::Json;
use axum::extract::State;

use crate::error::Result;
use crate::middleware::RequireAdmin;
use crate::state::AppState;

/// GET /api/admin/dashboard/stats
pub async fn stats(
    State(state): State<AppState>,
    RequireAdmin(auth): RequireAdmin,
) -> Result<Json<serde_json::Value>> {
    Ok(Json(state.commerce().dashboard_stats(&auth.token).await?))
}
