//! Webapp configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `LIFEGUARD_GATEWAY_URL` - Base URL of the gateway (routes live under `/api`)
//!
//! ## Optional
//! - `LIFEGUARD_HOST` - Bind address (default: 127.0.0.1)
//! - `LIFEGUARD_PORT` - Listen port (default: 3000)
//! - `LIFEGUARD_CACHE_TTL_SECS` - Query cache time-to-live (default: 300)
//! - `LIFEGUARD_CACHE_CAPACITY` - Query cache entry limit (default: 1000)
//! - `LIFEGUARD_INIT_DATA` - Telegram init data; presence means running inside the host
//! - `LIFEGUARD_COLOR_SCHEME` - `light` or `dark` (default: light)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name

use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use lifeguard_core::platform::PlatformContext;
use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;
use url::Url;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Gateway connection settings, shared by the webapp and the CLI.
///
/// Implements `Debug` manually to redact the init data.
#[derive(Clone)]
pub struct GatewayConfig {
    /// Gateway base URL
    pub base_url: Url,
    /// Telegram init data forwarded on every request
    pub init_data: Option<SecretString>,
    /// How long a cached query result stays fresh
    pub cache_ttl: Duration,
    /// Maximum number of cached query results
    pub cache_capacity: u64,
}

impl std::fmt::Debug for GatewayConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GatewayConfig")
            .field("base_url", &self.base_url.as_str())
            .field("init_data", &self.init_data.as_ref().map(|_| "[REDACTED]"))
            .field("cache_ttl", &self.cache_ttl)
            .field("cache_capacity", &self.cache_capacity)
            .finish()
    }
}

impl GatewayConfig {
    /// Load the gateway settings from the environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the gateway URL is missing or any value is invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        let base_url = parse_env("LIFEGUARD_GATEWAY_URL", &get_required_env("LIFEGUARD_GATEWAY_URL")?)?;
        let cache_ttl_secs: u64 = parse_env(
            "LIFEGUARD_CACHE_TTL_SECS",
            &get_env_or_default("LIFEGUARD_CACHE_TTL_SECS", "300"),
        )?;
        let cache_capacity = parse_env(
            "LIFEGUARD_CACHE_CAPACITY",
            &get_env_or_default("LIFEGUARD_CACHE_CAPACITY", "1000"),
        )?;
        let init_data = get_optional_env("LIFEGUARD_INIT_DATA").map(SecretString::from);

        Ok(Self {
            base_url,
            init_data,
            cache_ttl: Duration::from_secs(cache_ttl_secs),
            cache_capacity,
        })
    }

    /// Gateway settings with default cache parameters.
    #[must_use]
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            init_data: None,
            cache_ttl: Duration::from_secs(300),
            cache_capacity: 1000,
        }
    }
}

/// Webapp configuration.
#[derive(Debug, Clone)]
pub struct WebappConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Gateway connection settings
    pub gateway: GatewayConfig,
    /// Theme reported by the host, if any
    pub color_scheme: Option<String>,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment name
    pub sentry_environment: Option<String>,
}

impl WebappConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = parse_env("LIFEGUARD_HOST", &get_env_or_default("LIFEGUARD_HOST", "127.0.0.1"))?;
        let port = parse_env("LIFEGUARD_PORT", &get_env_or_default("LIFEGUARD_PORT", "3000"))?;

        Ok(Self {
            host,
            port,
            gateway: GatewayConfig::from_env()?,
            color_scheme: get_optional_env("LIFEGUARD_COLOR_SCHEME"),
            sentry_dsn: get_optional_env("SENTRY_DSN"),
            sentry_environment: get_optional_env("SENTRY_ENVIRONMENT"),
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Freeze the host context from the configured init data and theme.
    #[must_use]
    pub fn platform(&self) -> PlatformContext {
        PlatformContext::detect(
            self.gateway
                .init_data
                .as_ref()
                .map(|secret| secret.expose_secret()),
            self.color_scheme.as_deref(),
        )
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get an optional environment variable. Blank values count as unset.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Parse a raw value, naming the variable in the error.
fn parse_env<T>(key: &str, raw: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}
