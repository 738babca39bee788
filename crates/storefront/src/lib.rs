//! MinuteMart Storefront - customer-facing shopping service.
//!
//! This crate fronts the commerce API for browsers: it owns the
//! server-side cart, applies coupons, computes checkout quotes, and
//! places orders. Browsers authenticate with a session cookie; the
//! commerce API bearer token never leaves the server.
//!
//! The binary serves on port 3000. Integration tests drive the same
//! router through [`app`].

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod carts;
pub mod checkout;
pub mod commerce;
pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod state;
pub mod store;

use axum::Router;
use axum::extract::State;
use axum::http::{HeaderValue, Method, StatusCode, header};
use axum::routing::get;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

pub use state::AppState;

/// Build the complete storefront application.
///
/// Everything except the Sentry tower layers, which only make sense in
/// the binary with a live Sentry client.
pub fn app(state: AppState) -> Router {
    let session_layer = middleware::create_session_layer(state.config().secure_cookies());
    let cors = cors_layer(&state.config().allowed_origins);

    let router = Router::new()
        .route("/health", get(health))
        .route("/health/ready", get(readiness))
        .merge(routes::routes())
        .layer(axum::middleware::from_fn(
            middleware::expire_auth_on_unauthorized,
        ))
        .layer(session_layer);

    let router = match cors {
        Some(cors) => router.layer(cors),
        None => router,
    };

    router.layer(TraceLayer::new_for_http()).with_state(state)
}

/// CORS for browser clients on other origins. `None` when no origins
/// are configured, which skips the layer entirely.
fn cors_layer(origins: &[String]) -> Option<CorsLayer> {
    if origins.is_empty() {
        return None;
    }

    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    Some(
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods([
                Method::GET,
                Method::POST,
                Method::PUT,
                Method::PATCH,
                Method::DELETE,
            ])
            .allow_headers([header::CONTENT_TYPE])
            .allow_credentials(true),
    )
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
async fn health() -> &'static str {
    "ok"
}

/// Readiness health check endpoint.
///
/// Verifies the commerce API answers its own health probe. Returns 503
/// Service Unavailable when it does not.
async fn readiness(State(state): State<AppState>) -> StatusCode {
    match state.commerce().health().await {
        Ok(()) => StatusCode::OK,
        Err(error) => {
            tracing::warn!(%error, "commerce API not ready");
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}
