//! Account routes.
//!
//! These proxy the commerce API's auth endpoints, with one difference:
//! the bearer token never reaches the browser. Login stores it in the
//! server-side session; every later call reads it from there.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Serialize;
use tower_sessions::Session;
use uuid::Uuid;

use crate::commerce::types::{
    Acknowledgement, EmailRequest, LoginRequest, ProfileResponse, ProfileUpdate, RegisterRequest,
    Registered, ResetPasswordRequest, VerifyOtpRequest,
};
use crate::error::{Result, add_breadcrumb, clear_sentry_user, set_sentry_user};
use crate::middleware::{RequireAuth, clear_auth, establish_session};
use crate::models::CurrentUser;
use crate::models::session::keys;
use crate::state::AppState;

/// Response to a successful login.
#[derive(Debug, Serialize)]
pub struct LoginView {
    pub message: String,
    pub user: CurrentUser,
}

/// POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<Registered>)> {
    let registered = state.commerce().register(&payload).await?;
    Ok((StatusCode::CREATED, Json(registered)))
}

/// POST /api/auth/verify-otp
pub async fn verify_otp(
    State(state): State<AppState>,
    Json(payload): Json<VerifyOtpRequest>,
) -> Result<Json<Acknowledgement>> {
    Ok(Json(state.commerce().verify_otp(&payload).await?))
}

/// POST /api/auth/resend-otp
pub async fn resend_otp(
    State(state): State<AppState>,
    Json(payload): Json<EmailRequest>,
) -> Result<Json<Acknowledgement>> {
    Ok(Json(state.commerce().resend_otp(&payload).await?))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginView>> {
    let response = state.commerce().login(&payload).await?;
    let user = CurrentUser::from(response.user);

    establish_session(&session, response.access_token, &user).await?;
    set_sentry_user(user.id.as_i32(), user.email.as_str());
    add_breadcrumb("auth", "login");
    tracing::info!(user_id = user.id.as_i32(), "shopper logged in");

    Ok(Json(LoginView {
        message: "Logged in successfully".to_string(),
        user,
    }))
}

/// POST /api/auth/logout
pub async fn logout(session: Session) -> Result<Json<Acknowledgement>> {
    clear_auth(&session).await?;
    clear_sentry_user();
    add_breadcrumb("auth", "logout");

    Ok(Json(Acknowledgement {
        message: "Logged out".to_string(),
    }))
}

/// POST /api/auth/forgot-password
pub async fn forgot_password(
    State(state): State<AppState>,
    Json(payload): Json<EmailRequest>,
) -> Result<Json<Acknowledgement>> {
    Ok(Json(state.commerce().forgot_password(&payload).await?))
}

/// POST /api/auth/reset-password
pub async fn reset_password(
    State(state): State<AppState>,
    Json(payload): Json<ResetPasswordRequest>,
) -> Result<Json<Acknowledgement>> {
    Ok(Json(state.commerce().reset_password(&payload).await?))
}

/// GET /api/auth/profile
pub async fn profile(
    State(state): State<AppState>,
    RequireAuth(auth): RequireAuth,
) -> Result<Json<ProfileResponse>> {
    Ok(Json(state.commerce().profile(&auth.token).await?))
}

/// PUT /api/auth/profile
///
/// Also refreshes the session's user snapshot so a renamed shopper is
/// not greeted with their old name.
pub async fn update_profile(
    State(state): State<AppState>,
    session: Session,
    RequireAuth(auth): RequireAuth,
    Json(payload): Json<ProfileUpdate>,
) -> Result<Json<ProfileResponse>> {
    let response = state.commerce().update_profile(&auth.token, &payload).await?;
    let user = CurrentUser::from(response.user.clone());
    session.insert(keys::CURRENT_USER, &user).await?;

    Ok(Json(response))
}

/// DELETE /api/auth/delete-account
pub async fn delete_account(
    State(state): State<AppState>,
    session: Session,
    RequireAuth(auth): RequireAuth,
) -> Result<Json<Acknowledgement>> {
    let acknowledgement = state.commerce().delete_account(&auth.token).await?;

    // account is gone, so the cart is too
    if let Ok(Some(key)) = session.get::<Uuid>(keys::CART_KEY).await {
        state.carts().discard(key).await;
    }
    session.flush().await?;
    clear_sentry_user();

    Ok(Json(acknowledgement))
}
