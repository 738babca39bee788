//! Shared application state.

use std::sync::Arc;

use crate::commerce::CommerceClient;
use crate::config::AdminConfig;

/// Shared state for all admin routes.
///
/// Cheap to clone; the inner data lives behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: AdminConfig,
    commerce: CommerceClient,
}

impl AppState {
    /// Build state from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the commerce HTTP client cannot be built.
    pub fn new(config: AdminConfig) -> Result<Self, reqwest::Error> {
        let commerce = CommerceClient::new(&config.commerce)?;
        Ok(Self {
            inner: Arc::new(AppStateInner { config, commerce }),
        })
    }

    /// Application configuration.
    #[must_use]
    pub fn config(&self) -> &AdminConfig {
        &self.inner.config
    }

    /// Commerce API client.
    #[must_use]
    pub fn commerce(&self) -> &CommerceClient {
        &self.inner.commerce
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("environment", &self.inner.config.environment)
            .finish_non_exhaustive()
    }
}
