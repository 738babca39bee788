//! Session management configuration.

use axum::extract::Request;
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::Response;
use tower_sessions::cookie::SameSite;
use tower_sessions::cookie::time::Duration;
use tower_sessions::{Expiry, MemoryStore, Session, SessionManagerLayer};

use super::auth::{clear_admin, clear_partner, clear_vendor};

/// Session cookie name. Distinct from the storefront's so the two
/// services can share a dev hostname without evicting each other.
pub const SESSION_COOKIE_NAME: &str = "mm_ops_session";

/// Session lifetime, extended on each request.
const SESSION_TTL_DAYS: i64 = 1;

/// Create the session layer.
///
/// Sessions are server-side and in-memory; a restart signs operators
/// out and nothing else. Stricter than the storefront's layer
/// (SameSite=Strict, one-day expiry): these are privileged sessions.
pub fn create_session_layer(secure: bool) -> SessionManagerLayer<MemoryStore> {
    let store = MemoryStore::default();

    SessionManagerLayer::new(store)
        .with_name(SESSION_COOKIE_NAME)
        .with_expiry(Expiry::OnInactivity(Duration::days(SESSION_TTL_DAYS)))
        .with_secure(secure)
        .with_same_site(SameSite::Strict)
        .with_http_only(true)
        .with_path("/".to_string())
}

/// Drop one persona's signed-in state whenever its surface answers 401.
///
/// Once the commerce API declares a token dead, every later request
/// with it would fail the same way; wiping it routes that dashboard
/// straight back to its login screen. The persona is picked by path
/// prefix so a vendor probing an admin route loses nothing: only the
/// admin identity (which they never had) would be cleared.
pub async fn expire_auth_on_unauthorized(
    session: Session,
    request: Request,
    next: Next,
) -> Response {
    let path = request.uri().path().to_string();
    let response = next.run(request).await;

    if response.status() == StatusCode::UNAUTHORIZED {
        let cleared = if path.starts_with("/api/admin") {
            clear_admin(&session).await
        } else if path.starts_with("/api/vendor") {
            clear_vendor(&session).await
        } else if path.starts_with("/api/delivery") {
            clear_partner(&session).await
        } else {
            Ok(())
        };

        if let Err(error) = cleared {
            tracing::warn!(%error, "failed to clear auth state after 401");
        }
    }

    response
}
