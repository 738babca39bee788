//! Commerce API client for the operations dashboards.
//!
//! Every handler in this service is a thin proxy: attach the right
//! bearer token, forward the call, normalize the failure. This module
//! owns the shared plumbing; the submodules group endpoints by surface.
//! Unlike the storefront there is no response cache here: operators
//! expect to see the write they just made.

pub mod admin;
pub mod auth;
pub mod catalog;
pub mod coupons;
pub mod delivery;
pub mod types;
pub mod vendor;

use std::sync::Arc;

use reqwest::{Method, RequestBuilder, Response, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;

use crate::config::CommerceConfig;

/// Errors from commerce API calls, normalized to one shape.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (connect failure or the
    /// fixed timeout elapsed).
    #[error("commerce API unreachable: {0}")]
    Transport(#[source] reqwest::Error),

    /// A 2xx response whose body did not match the expected shape.
    #[error("unexpected commerce API payload: {0}")]
    Payload(#[source] serde_json::Error),

    /// The backend answered 401 or 403: the token is missing, expired,
    /// or lacks the needed role.
    #[error("{message}")]
    AuthRequired { message: String },

    /// Any other non-2xx response. `message` comes from the backend's
    /// `{"error": ...}` body when present.
    #[error("{message}")]
    Rejected { status: u16, message: String },
}

impl ApiError {
    /// Whether this error should be reported to Sentry rather than
    /// treated as a routine client-facing rejection.
    #[must_use]
    pub const fn is_server_fault(&self) -> bool {
        match self {
            Self::Transport(_) | Self::Payload(_) => true,
            Self::Rejected { status, .. } => *status >= 500,
            Self::AuthRequired { .. } => false,
        }
    }
}

/// HTTP client for the commerce API's management surfaces.
///
/// Cheap to clone. All clones share one connection pool.
#[derive(Clone)]
pub struct CommerceClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    http: reqwest::Client,
    base_url: String,
}

impl CommerceClient {
    /// Build a client for the given commerce API settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be
    /// constructed.
    pub fn new(config: &CommerceConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            inner: Arc::new(ClientInner {
                http,
                base_url: config.base_url.as_str().trim_end_matches('/').to_string(),
            }),
        })
    }

    /// Liveness probe against the backend's `/health` endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend is unreachable or unhealthy.
    pub async fn health(&self) -> Result<(), ApiError> {
        let builder = self.request(Method::GET, "/health", None);
        self.execute(builder).await.map(drop)
    }

    /// Start a request against the given API path, attaching the
    /// caller's bearer token when one is supplied.
    fn request(&self, method: Method, path: &str, token: Option<&SecretString>) -> RequestBuilder {
        let url = format!("{}{path}", self.inner.base_url);
        let mut builder = self.inner.http.request(method, url);
        if let Some(token) = token {
            builder = builder.bearer_auth(token.expose_secret());
        }
        builder
    }

    /// Send a request and normalize the response status.
    async fn execute(&self, builder: RequestBuilder) -> Result<Response, ApiError> {
        let response = builder.send().await.map_err(ApiError::Transport)?;
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            let message = error_message(response).await.unwrap_or_else(|| {
                "Session expired. Please log in again.".to_string()
            });
            return Err(ApiError::AuthRequired { message });
        }

        let message = error_message(response)
            .await
            .unwrap_or_else(|| format!("Request failed with status {status}"));
        Err(ApiError::Rejected {
            status: status.as_u16(),
            message,
        })
    }

    /// Send a request and decode its JSON body.
    async fn fetch_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T, ApiError> {
        let response = self.execute(builder).await?;
        let bytes = response.bytes().await.map_err(ApiError::Transport)?;
        serde_json::from_slice(&bytes).map_err(ApiError::Payload)
    }

    /// Send a request and hand the JSON body back untouched.
    ///
    /// The dashboards render whatever the backend returns; the proxy
    /// has no reason to name those fields.
    async fn forward(&self, builder: RequestBuilder) -> Result<serde_json::Value, ApiError> {
        self.fetch_json(builder).await
    }
}

impl std::fmt::Debug for CommerceClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommerceClient")
            .field("base_url", &self.inner.base_url)
            .finish_non_exhaustive()
    }
}

/// Pull the backend's error message out of a failed response.
///
/// The backend reports `{"error": ...}`; its JWT layer uses
/// `{"msg": ...}`. Anything else yields `None`.
async fn error_message(response: Response) -> Option<String> {
    let value: serde_json::Value = response.json().await.ok()?;
    let message = value.get("error").or_else(|| value.get("msg"))?.as_str()?;
    Some(message.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::time::Duration;

    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    async fn test_client(server: &MockServer) -> CommerceClient {
        let config = CommerceConfig {
            base_url: server.uri().parse().unwrap(),
            timeout: Duration::from_secs(2),
        };
        CommerceClient::new(&config).unwrap()
    }

    #[tokio::test]
    async fn test_forbidden_maps_to_auth_required() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/health"))
            .respond_with(ResponseTemplate::new(403).set_body_json(serde_json::json!({
                "error": "Admin access required"
            })))
            .mount(&server)
            .await;

        let client = test_client(&server).await;
        let error = client.health().await.unwrap_err();
        match error {
            ApiError::AuthRequired { message } => assert_eq!(message, "Admin access required"),
            other => panic!("expected AuthRequired, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_error_without_body_gets_status_message() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/health"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = test_client(&server).await;
        let error = client.health().await.unwrap_err();
        assert!(error.is_server_fault());
        match error {
            ApiError::Rejected { status, message } => {
                assert_eq!(status, 500);
                assert!(message.contains("500"));
            }
            other => panic!("expected Rejected, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_transport_error() {
        let config = CommerceConfig {
            base_url: "http://127.0.0.1:1".parse().unwrap(),
            timeout: Duration::from_millis(200),
        };
        let client = CommerceClient::new(&config).unwrap();
        let error = client.health().await.unwrap_err();
        assert!(matches!(error, ApiError::Transport(_)));
    }
}
