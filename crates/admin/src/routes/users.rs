//! Customer management routes.

use axum::Json;
use axum::extract::{Path, Query, State};

use minutemart_core::UserId;

use crate::commerce::types::UserListQuery;
use crate::error::Result;
use crate::middleware::RequireAdmin;
use crate::state::AppState;

/// GET /api/admin/users
pub async fn list_users(
    State(state): State<AppState>,
    RequireAdmin(auth): RequireAdmin,
    Query(query): Query<UserListQuery>,
) -> Result<Json<serde_json::Value>> {
    Ok(Json(state.commerce().users(&auth.token, &query).await?))
}

/// GET /api/admin/users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    RequireAdmin(auth): RequireAdmin,
    Path(id): Path<UserId>,
) -> Result<Json<serde_json::Value>> {
    Ok(Json(state.commerce().user(&auth.token, id).await?))
}

/// PUT /api/admin/users/{id}
pub async fn update_user(
    State(state): State<AppState>,
    RequireAdmin(auth): RequireAdmin,
    Path(id): Path<UserId>,
    Json(payload): Json<serde_json::Value>,
) -> Result<Json<serde_json::Value>> {
    Ok(Json(
        state.commerce().update_user(&auth.token, id, &payload).await?,
    ))
}

/// DELETE /api/admin/users/{id}
pub async fn delete_user(
    State(state): State<AppState>,
    RequireAdmin(auth): RequireAdmin,
    Path(id): Path<UserId>,
) -> Result<Json<serde_json::Value>> {
    Ok(Json(state.commerce().delete_user(&auth.token, id).await?))
}
