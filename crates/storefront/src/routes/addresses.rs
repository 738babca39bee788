//! Address book routes.
//!
//! Thin proxies over the commerce API. Every mutation drops the
//! session's cached default address; the next checkout resolution
//! rebuilds it from fresh data.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use minutemart_core::{Address, AddressId};
use serde::Serialize;
use tower_sessions::Session;

use crate::commerce::types::{Acknowledgement, AddressCreated, AddressPayload};
use crate::error::Result;
use crate::middleware::RequireAuth;
use crate::models::session::keys;
use crate::state::AppState;

/// Address book envelope.
#[derive(Debug, Serialize)]
pub struct AddressesView {
    pub addresses: Vec<Address>,
}

async fn drop_cached_default(session: &Session) -> Result<()> {
    session
        .remove::<serde_json::Value>(keys::DEFAULT_ADDRESS)
        .await?;
    Ok(())
}

/// GET /api/addresses
pub async fn list_addresses(
    State(state): State<AppState>,
    RequireAuth(auth): RequireAuth,
) -> Result<Json<AddressesView>> {
    let addresses = state.commerce().addresses(&auth.token).await?;
    Ok(Json(AddressesView { addresses }))
}

/// POST /api/addresses
pub async fn create_address(
    State(state): State<AppState>,
    session: Session,
    RequireAuth(auth): RequireAuth,
    Json(payload): Json<AddressPayload>,
) -> Result<(StatusCode, Json<AddressCreated>)> {
    let created = state.commerce().create_address(&auth.token, &payload).await?;
    drop_cached_default(&session).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /api/addresses/{id}
pub async fn update_address(
    State(state): State<AppState>,
    session: Session,
    RequireAuth(auth): RequireAuth,
    Path(id): Path<AddressId>,
    Json(payload): Json<AddressPayload>,
) -> Result<Json<AddressCreated>> {
    let updated = state
        .commerce()
        .update_address(&auth.token, id, &payload)
        .await?;
    drop_cached_default(&session).await?;
    Ok(Json(updated))
}

/// DELETE /api/addresses/{id}
pub async fn delete_address(
    State(state): State<AppState>,
    session: Session,
    RequireAuth(auth): RequireAuth,
    Path(id): Path<AddressId>,
) -> Result<Json<Acknowledgement>> {
    let acknowledgement = state.commerce().delete_address(&auth.token, id).await?;
    drop_cached_default(&session).await?;
    Ok(Json(acknowledgement))
}

/// PATCH /api/addresses/{id}/default
pub async fn set_default_address(
    State(state): State<AppState>,
    session: Session,
    RequireAuth(auth): RequireAuth,
    Path(id): Path<AddressId>,
) -> Result<Json<Acknowledgement>> {
    let acknowledgement = state.commerce().set_default_address(&auth.token, id).await?;
    drop_cached_default(&session).await?;
    Ok(Json(acknowledgement))
}
