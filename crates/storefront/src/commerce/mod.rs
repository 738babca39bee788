//! Commerce API client.
//!
//! Every remote call the storefront makes goes through [`CommerceClient`]:
//! one base URL, a fixed per-request timeout, bearer auth supplied per
//! call, and one normalized error shape ([`ApiError`]) regardless of
//! which endpoint failed. Public catalog reads are cached briefly since
//! they are identical across shoppers.

pub mod addresses;
pub mod auth;
pub mod catalog;
pub mod coupons;
pub mod orders;
pub mod types;

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;

use crate::config::CommerceConfig;

/// How long shared catalog payloads stay fresh.
const CATALOG_CACHE_TTL: Duration = Duration::from_secs(300);
/// Upper bound on distinct cached catalog payloads.
const CATALOG_CACHE_CAPACITY: u64 = 1_000;

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

/// HTTP client for the commerce API.
///
/// Cheap to clone. All clones share one connection pool and one
/// catalog cache.
#[derive(Clone)]
pub struct CommerceClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    http: reqwest::Client,
    base_url: String,
    catalog_cache: Cache<String, Arc<serde_json::Value>>,
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
                catalog_cache: Cache::builder()
                    .max_capacity(CATALOG_CACHE_CAPACITY)
                    .time_to_live(CATALOG_CACHE_TTL)
                    .build(),
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

    /// Fetch a catalog payload through the shared response cache.
    ///
    /// Cached entries hold the raw JSON value so one cache serves every
    /// payload shape. A hit that no longer decodes is evicted and
    /// refetched rather than surfaced as an error.
    async fn fetch_catalog<T: DeserializeOwned>(
        &self,
        cache_key: String,
        fetch: RequestBuilder,
    ) -> Result<T, ApiError> {
        if let Some(hit) = self.inner.catalog_cache.get(&cache_key).await {
            if let Ok(decoded) = serde_json::from_value(serde_json::Value::clone(&hit)) {
                return Ok(decoded);
            }
            self.inner.catalog_cache.invalidate(&cache_key).await;
        }

        let response = self.execute(fetch).await?;
        let bytes = response.bytes().await.map_err(ApiError::Transport)?;
        let value: serde_json::Value = serde_json::from_slice(&bytes).map_err(ApiError::Payload)?;
        let decoded = serde_json::from_value(value.clone()).map_err(ApiError::Payload)?;

        self.inner.catalog_cache.insert(cache_key, Arc::new(value)).await;
        Ok(decoded)
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
