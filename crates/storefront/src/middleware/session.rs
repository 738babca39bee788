//! Session management configuration.

use axum::extract::Request;
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::Response;
use tower_sessions::cookie::SameSite;
use tower_sessions::cookie::time::Duration;
use tower_sessions::{Expiry, MemoryStore, Session, SessionManagerLayer};

use super::auth::clear_auth;

/// Session cookie name.
pub const SESSION_COOKIE_NAME: &str = "mm_session";

/// Session lifetime, extended on each request.
const SESSION_TTL_DAYS: i64 = 7;

/// Create the session layer.
///
/// Sessions are server-side and in-memory: losing them on restart only
/// signs shoppers out, it loses no money data. `secure` should be true
/// everywhere except local development over plain HTTP.
pub fn create_session_layer(secure: bool) -> SessionManagerLayer<MemoryStore> {
    let store = MemoryStore::default();

    SessionManagerLayer::new(store)
        .with_name(SESSION_COOKIE_NAME)
        .with_expiry(Expiry::OnInactivity(Duration::days(SESSION_TTL_DAYS)))
        .with_secure(secure)
        .with_same_site(SameSite::Lax)
        .with_http_only(true)
        .with_path("/".to_string())
}

/// Drop authenticated session state whenever a response goes out as 401.
///
/// This mirrors the commerce API's own session rules: once it says a
/// token is dead, keeping it around would make every later request fail
/// the same way. The shopper's cart survives.
pub async fn expire_auth_on_unauthorized(
    session: Session,
    request: Request,
    next: Next,
) -> Response {
    let response = next.run(request).await;

    if response.status() == StatusCode::UNAUTHORIZED {
        if let Err(error) = clear_auth(&session).await {
            tracing::warn!(%error, "failed to clear auth state after 401");
        }
    }

    response
}
