//! Shared application state.

use std::sync::Arc;

use crate::carts::CartRegistry;
use crate::commerce::CommerceClient;
use crate::config::StorefrontConfig;

/// Shared state for all storefront routes.
///
/// Cheap to clone; the inner data lives behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    commerce: CommerceClient,
    carts: CartRegistry,
}

impl AppState {
    /// Build state from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the commerce HTTP client cannot be built.
    pub fn new(config: StorefrontConfig) -> Result<Self, reqwest::Error> {
        let commerce = CommerceClient::new(&config.commerce)?;
        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                commerce,
                carts: CartRegistry::new(),
            }),
        })
    }

    /// Application configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Commerce API client.
    #[must_use]
    pub fn commerce(&self) -> &CommerceClient {
        &self.inner.commerce
    }

    /// Live cart registry.
    #[must_use]
    pub fn carts(&self) -> &CartRegistry {
        &self.inner.carts
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("environment", &self.inner.config.environment)
            .finish_non_exhaustive()
    }
}
