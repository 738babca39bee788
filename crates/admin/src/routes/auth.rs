//! Administrator sign-in.
//!
//! The commerce API issues the same token shape to every user; this
//! service additionally checks `is_admin` on the returned profile, so a
//! regular shopper's credentials never open an operator session even
//! though the backend would happily log them in.

use axum::Json;
use axum::extract::State;
use serde::Serialize;
use serde_json::json;
use tower_sessions::Session;

use crate::commerce::types::LoginRequest;
use crate::error::{AppError, Result, clear_sentry_user, set_sentry_user};
use crate::middleware::{RequireAdmin, clear_admin, establish_admin};
use crate::models::AdminUser;
use crate::state::AppState;

/// Response to a successful administrator login.
#[derive(Debug, Serialize)]
pub struct AdminLoginView {
    pub message: String,
    pub user: AdminUser,
}

/// POST /api/admin/login
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<AdminLoginView>> {
    let response = state.commerce().login(&payload).await?;

    if !response.user.is_admin {
        return Err(AppError::Forbidden(
            "Administrator account required".to_string(),
        ));
    }

    let user = AdminUser::from(response.user);
    establish_admin(&session, response.access_token, &user).await?;
    set_sentry_user(user.id.as_i32(), user.email.as_str());
    tracing::info!(user_id = user.id.as_i32(), "administrator logged in");

    Ok(Json(AdminLoginView {
        message: "Logged in successfully".to_string(),
        user,
    }))
}

/// POST /api/admin/logout
pub async fn logout(session: Session) -> Result<Json<serde_json::Value>> {
    clear_admin(&session).await?;
    clear_sentry_user();

    Ok(Json(json!({ "message": "Logged out" })))
}

/// GET /api/admin/me
///
/// The session's own snapshot, not a backend round trip. The dashboard
/// calls this on every page load to decide whether to show the login
/// screen.
pub async fn me(RequireAdmin(auth): RequireAdmin) -> Json<AdminUser> {
    Json(auth.user)
}
