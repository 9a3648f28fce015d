//! Lifeguard webapp library.
//!
//! The server-rendered mini-app as a library, so the binary, the CLI and
//! the integration tests share the gateway client and the router.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod filters;
pub mod gateway;
pub mod middleware;
pub mod routes;
pub mod state;

pub use config::{ConfigError, GatewayConfig, WebappConfig};
pub use gateway::{GatewayClient, GatewayError};
pub use routes::app;
pub use state::AppState;
