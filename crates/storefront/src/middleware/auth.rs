//! Authentication extractors.
//!
//! The storefront holds the commerce API bearer token in the server-side
//! session; browsers only ever see the session cookie. Handlers declare
//! what they need: [`RequireAuth`] rejects anonymous requests with a
//! 401, [`OptionalAuth`] lets them through.

use axum::Json;
use axum::extract::FromRequestParts;
use axum::http::StatusCode;
use axum::http::request::Parts;
use axum::response::{IntoResponse, Response};
use secrecy::SecretString;
use serde_json::json;
use tower_sessions::Session;

use crate::error::AppError;
use crate::models::CurrentUser;
use crate::models::session::keys;

/// A signed-in shopper's credentials for this request.
#[derive(Debug, Clone)]
pub struct AuthSession {
    /// Bearer token forwarded to the commerce API.
    pub token: SecretString,
    /// The shopper, as recorded at login.
    pub user: CurrentUser,
}

/// Extractor that rejects anonymous requests.
#[derive(Debug, Clone)]
pub struct RequireAuth(pub AuthSession);

/// Extractor that admits anonymous requests.
#[derive(Debug, Clone)]
pub struct OptionalAuth(pub Option<AuthSession>);

/// Rejection for [`RequireAuth`].
#[derive(Debug)]
pub struct AuthRejection;

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "error": "Login required" })),
        )
            .into_response()
    }
}

/// Read the auth session out of the request's session, if present.
async fn load_auth_session(parts: &mut Parts) -> Option<AuthSession> {
    let session = parts.extensions.get::<Session>()?.clone();

    let token: String = session.get(keys::ACCESS_TOKEN).await.ok()??;
    let user: CurrentUser = session.get(keys::CURRENT_USER).await.ok()??;

    Some(AuthSession {
        token: SecretString::from(token),
        user,
    })
}

impl<S> FromRequestParts<S> for RequireAuth
where
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        load_auth_session(parts).await.map(Self).ok_or(AuthRejection)
    }
}

impl<S> FromRequestParts<S> for OptionalAuth
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self(load_auth_session(parts).await))
    }
}

/// Record a successful login in the session.
///
/// # Errors
///
/// Returns an error if the session store rejects the write.
pub async fn establish_session(
    session: &Session,
    access_token: String,
    user: &CurrentUser,
) -> Result<(), AppError> {
    session.insert(keys::ACCESS_TOKEN, access_token).await?;
    session.insert(keys::CURRENT_USER, user).await?;
    Ok(())
}

/// Remove all authenticated state from the session.
///
/// The cart key survives: a shopper who logs back in finds their cart
/// where they left it.
///
/// # Errors
///
/// Returns an error if the session store rejects the removal.
pub async fn clear_auth(session: &Session) -> Result<(), AppError> {
    session.remove::<String>(keys::ACCESS_TOKEN).await?;
    session.remove::<CurrentUser>(keys::CURRENT_USER).await?;
    session
        .remove::<serde_json::Value>(keys::DEFAULT_ADDRESS)
        .await?;
    Ok(())
}
