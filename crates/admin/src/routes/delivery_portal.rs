//! Delivery partner portal routes.
//!
//! Couriers register, wait for an administrator to verify them, then
//! work a simple queue: list available assignments, accept one,
//! complete it. The backend owns assignment rules (who may accept what,
//! which transitions are legal); this service relays them.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use serde::Serialize;
use serde_json::json;
use tower_sessions::Session;

use minutemart_core::OrderId;

use crate::commerce::types::{LoginRequest, StatusQuery};
use crate::error::Result;
use crate::middleware::{RequirePartner, clear_partner, establish_partner};
use crate::models::PartnerIdentity;
use crate::state::AppState;

/// Response to a successful delivery partner login.
#[derive(Debug, Serialize)]
pub struct PartnerLoginView {
    pub message: String,
    pub partner: PartnerIdentity,
}

/// POST /api/delivery/register
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<serde_json::Value>,
) -> Result<(StatusCode, Json<serde_json::Value>)> {
    let registered = state.commerce().delivery_register(&payload).await?;
    Ok((StatusCode::CREATED, Json(registered)))
}

/// POST /api/delivery/login
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<PartnerLoginView>> {
    let response = state.commerce().delivery_login(&payload).await?;
    let partner = response.partner;

    establish_partner(&session, response.access_token, &partner).await?;
    tracing::info!(partner_id = partner.id.as_i32(), "delivery partner logged in");

    Ok(Json(PartnerLoginView {
        message: "Logged in successfully".to_string(),
        partner,
    }))
}

/// POST /api/delivery/logout
pub async fn logout(session: Session) -> Result<Json<serde_json::Value>> {
    clear_partner(&session).await?;

    Ok(Json(json!({ "message": "Logged out" })))
}

/// GET /api/delivery/me
pub async fn me(RequirePartner(auth): RequirePartner) -> Json<PartnerIdentity> {
    Json(auth.partner)
}

/// GET /api/delivery/profile
pub async fn profile(
    State(state): State<AppState>,
    RequirePartner(auth): RequirePartner,
) -> Result<Json<serde_json::Value>> {
    Ok(Json(state.commerce().delivery_profile(&auth.token).await?))
}

/// GET /api/delivery/orders
///
/// `status=available` lists unclaimed assignments; anything else lists
/// the partner's own.
pub async fn list_assignments(
    State(state): State<AppState>,
    RequirePartner(auth): RequirePartner,
    Query(query): Query<StatusQuery>,
) -> Result<Json<serde_json::Value>> {
    Ok(Json(
        state
            .commerce()
            .delivery_assignments(&auth.token, &query)
            .await?,
    ))
}

/// PUT /api/delivery/orders/{id}/accept
pub async fn accept_assignment(
    State(state): State<AppState>,
    RequirePartner(auth): RequirePartner,
    Path(id): Path<OrderId>,
) -> Result<Json<serde_json::Value>> {
    Ok(Json(state.commerce().accept_assignment(&auth.token, id).await?))
}

/// PUT /api/delivery/orders/{id}/complete
pub async fn complete_assignment(
    State(state): State<AppState>,
    RequirePartner(auth): RequirePartner,
    Path(id): Path<OrderId>,
) -> Result<Json<serde_json::Value>> {
    Ok(Json(
        state.commerce().complete_assignment(&auth.token, id).await?,
    ))
}
