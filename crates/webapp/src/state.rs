//! Application state shared across handlers.

use std::sync::Arc;

use lifeguard_core::platform::PlatformContext;

use crate::config::WebappConfig;
use crate::gateway::GatewayClient;

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`. The platform context is frozen when the state
/// is built and never changes afterwards.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: WebappConfig,
    platform: PlatformContext,
    gateway: GatewayClient,
}

impl AppState {
    /// Build the state: freeze the platform context and create the gateway
    /// client that forwards its init data.
    #[must_use]
    pub fn new(config: WebappConfig) -> Self {
        let platform = config.platform();
        let gateway = GatewayClient::new(&config.gateway, platform.init_data());

        Self {
            inner: Arc::new(AppStateInner {
                config,
                platform,
                gateway,
            }),
        }
    }

    /// Get a reference to the webapp configuration.
    #[must_use]
    pub fn config(&self) -> &WebappConfig {
        &self.inner.config
    }

    /// Get a reference to the frozen host context.
    #[must_use]
    pub fn platform(&self) -> &PlatformContext {
        &self.inner.platform
    }

    /// Get a reference to the gateway client.
    #[must_use]
    pub fn gateway(&self) -> &GatewayClient {
        &self.inner.gateway
    }
}
