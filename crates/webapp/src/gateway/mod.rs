//! REST client for the Lifeguard gateway.
//!
//! # Architecture
//!
//! - The gateway is the source of truth; nothing is persisted locally
//! - Reads are cached in-memory via `moka`, keyed by [`QueryKey`]
//! - A successful mutation drops every cached key in the categories its
//!   [`MutationTarget`] names; a failed one drops nothing
//!
//! # Example
//!
//! ```rust,ignore
//! use lifeguard_webapp::gateway::GatewayClient;
//!
//! let client = GatewayClient::new(&config.gateway, platform.init_data());
//!
//! let items = client.list_shopping_items().await?;
//! client.toggle_shopping_item(items[0].id).await?;
//! // the shopping list and summary are fetched again on next read
//! ```
//!
//! [`QueryKey`]: lifeguard_core::query::QueryKey
//! [`MutationTarget`]: lifeguard_core::query::MutationTarget

mod cache;
mod client;

pub use client::GatewayClient;

use thiserror::Error;

/// Header carrying the raw Telegram init data to the gateway.
pub const INIT_DATA_HEADER: &str = "X-Telegram-Init-Data";

/// Errors that can occur when talking to the gateway.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Gateway answered with a non-success status.
    #[error("Gateway returned {status}: {body}")]
    Status { status: u16, body: String },

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The gateway rejected or did not receive the init data.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Rate limited by the gateway.
    #[error("Rate limited, retry after {0} seconds")]
    RateLimited(u64),

    /// Gateway URL could not be joined with a route.
    #[error("Invalid gateway URL: {0}")]
    Url(#[from] url::ParseError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gateway_error_display() {
        let err = GatewayError::NotFound("workout 3".to_string());
        assert_eq!(err.to_string(), "Not found: workout 3");

        let err = GatewayError::Status {
            status: 422,
            body: "name: field required".to_string(),
        };
        assert_eq!(err.to_string(), "Gateway returned 422: name: field required");
    }

    #[test]
    fn test_rate_limited_error() {
        let err = GatewayError::RateLimited(60);
        assert_eq!(err.to_string(), "Rate limited, retry after 60 seconds");
    }
}
