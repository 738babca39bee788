//! Admin service configuration from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `COMMERCE_API_URL` - Base URL of the commerce API
//!
//! ## Optional
//! - `ADMIN_HOST` - Bind address (default: 127.0.0.1; this service is internal)
//! - `ADMIN_PORT` - Listen port (default: 3001)
//! - `ENVIRONMENT` - Deployment environment name (default: development)
//! - `COMMERCE_API_TIMEOUT_SECS` - Request timeout (default: 15)
//! - `CORS_ALLOWED_ORIGINS` - Comma-separated dashboard origins
//! - `SENTRY_DSN` - Sentry error tracking DSN

use std::net::SocketAddr;
use std::time::Duration;

use url::Url;

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {name}: {reason}")]
    InvalidEnvVar { name: String, reason: String },
}

/// Connection settings for the commerce API.
#[derive(Debug, Clone)]
pub struct CommerceConfig {
    /// Base URL of the commerce API, e.g. `http://localhost:5000`.
    pub base_url: Url,
    /// Fixed timeout applied to every request.
    pub timeout: Duration,
}

/// Admin service configuration.
#[derive(Debug, Clone)]
pub struct AdminConfig {
    /// Host to bind to. Defaults to loopback: the dashboards are
    /// internal and reach this service through a private network.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Deployment environment name (development, staging, production).
    pub environment: String,
    /// Commerce API connection settings.
    pub commerce: CommerceConfig,
    /// Origins allowed to call this service from a browser. Empty
    /// disables CORS entirely (same-origin deployments).
    pub allowed_origins: Vec<String>,
    /// Sentry DSN for error tracking (optional).
    pub sentry_dsn: Option<String>,
}

impl AdminConfig {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a required variable is missing or a value
    /// fails to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = get_env_or_default("ADMIN_HOST", "127.0.0.1");
        let port = parse_env("ADMIN_PORT", "3001")?;
        let environment = get_env_or_default("ENVIRONMENT", "development");

        let base_url = get_required_env("COMMERCE_API_URL")?;
        let base_url = Url::parse(&base_url).map_err(|e| ConfigError::InvalidEnvVar {
            name: "COMMERCE_API_URL".to_string(),
            reason: e.to_string(),
        })?;
        let timeout_secs: u64 = parse_env("COMMERCE_API_TIMEOUT_SECS", "15")?;

        let allowed_origins = get_optional_env("CORS_ALLOWED_ORIGINS")
            .map(|origins| parse_origins(&origins))
            .unwrap_or_default();

        let sentry_dsn = get_optional_env("SENTRY_DSN");

        Ok(Self {
            host,
            port,
            environment,
            commerce: CommerceConfig {
                base_url,
                timeout: Duration::from_secs(timeout_secs),
            },
            allowed_origins,
            sentry_dsn,
        })
    }

    /// Socket address to bind the server to.
    ///
    /// # Errors
    ///
    /// Returns an error if host/port do not form a valid socket address.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e: std::net::AddrParseError| ConfigError::InvalidEnvVar {
                name: "ADMIN_HOST".to_string(),
                reason: e.to_string(),
            })
    }

    /// Whether session cookies should carry the `Secure` attribute.
    #[must_use]
    pub fn secure_cookies(&self) -> bool {
        !matches!(self.environment.as_str(), "development" | "test")
    }
}

/// Get a required environment variable.
fn get_required_env(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

/// Get an optional environment variable. Empty values count as unset.
fn get_optional_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

/// Get an environment variable with a default fallback.
fn get_env_or_default(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

/// Get and parse an environment variable with a default fallback.
fn parse_env<T>(name: &str, default: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    get_env_or_default(name, default)
        .parse()
        .map_err(|e: T::Err| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            reason: e.to_string(),
        })
}

/// Split a comma-separated origin list, dropping empty entries.
fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(String::from)
        .collect()
}
