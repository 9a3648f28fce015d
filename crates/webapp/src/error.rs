//! Unified error handling with Sentry integration.
//!
//! Provides a unified `AppError` type that captures errors to Sentry before
//! responding to the client. Route handlers return `Result<T, AppError>`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use lifeguard_core::forms::DraftError;
use thiserror::Error;

use crate::gateway::GatewayError;

/// Application-level error type for the webapp.
#[derive(Debug, Error)]
pub enum AppError {
    /// Gateway operation failed.
    #[error("Gateway error: {0}")]
    Gateway(#[from] GatewayError),

    /// A submitted form could not become a request.
    #[error("Invalid form: {0}")]
    Draft(#[from] DraftError),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            Self::Gateway(err) => match err {
                GatewayError::NotFound(_) => StatusCode::NOT_FOUND,
                GatewayError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
                GatewayError::RateLimited(_) => StatusCode::TOO_MANY_REQUESTS,
                _ => StatusCode::BAD_GATEWAY,
            },
            Self::Draft(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        // Capture server errors to Sentry
        if status.is_server_error() {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        // Don't expose internal error details to clients
        let message = match &self {
            Self::Gateway(GatewayError::NotFound(_)) => "Not found".to_string(),
            Self::Gateway(GatewayError::Unauthorized(_)) => {
                "Open Lifeguard from Telegram to continue".to_string()
            }
            Self::Gateway(GatewayError::RateLimited(seconds)) => {
                format!("Too many requests, try again in {seconds} seconds")
            }
            Self::Gateway(_) => "The Lifeguard service is unavailable".to_string(),
            _ => self.to_string(),
        };

        (status, message).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

/// Add a breadcrumb for user actions.
///
/// Breadcrumbs appear in Sentry error reports to show the trail of user actions
/// leading up to an error.
pub fn add_breadcrumb(category: &str, message: &str) {
    sentry::add_breadcrumb(sentry::Breadcrumb {
        category: Some(category.to_string()),
        message: Some(message.to_string()),
        level: sentry::Level::Info,
        ..Default::default()
    });
}
