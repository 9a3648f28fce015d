//! HTTP route handlers for the webapp.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                          - Home page (summaries, quick actions)
//! POST /water                     - Log one glass of water for today
//! GET  /health                    - Liveness check
//! GET  /health/ready              - Readiness check (gateway reachable)
//!
//! # Workouts
//! GET  /workouts                  - Weekly summary and workout history
//! GET  /workouts/new              - New workout form
//! POST /workouts/new              - Edit exercises or save the workout
//! GET  /workouts/{id}/delete      - Delete confirmation
//! POST /workouts/{id}/delete      - Delete the workout
//!
//! # Nutrition
//! GET  /nutrition                 - Today's progress and meals by type
//! GET  /nutrition/new             - New meal form
//! POST /nutrition/new             - Save the meal
//! GET  /nutrition/meals/{id}/delete - Delete confirmation
//! POST /nutrition/meals/{id}/delete - Delete the meal
//!
//! # Shopping
//! GET  /shopping                  - Pending items by category, purchased items
//! POST /shopping                  - Add an item
//! POST /shopping/{id}/toggle      - Toggle purchased
//! POST /shopping/{id}/delete      - Delete an item
//! POST /shopping/clear            - Clear purchased items
//!
//! # Settings
//! GET  /settings                  - Profile and daily goals
//! POST /settings                  - Save daily goals
//! ```

pub mod home;
pub mod nutrition;
pub mod settings;
pub mod shopping;
pub mod workouts;

use std::time::Duration;

use axum::{
    Router,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};
use chrono::NaiveDate;
use serde::Deserialize;
use tower_http::services::ServeDir;
use tower_http::trace::{DefaultOnResponse, OnResponse, TraceLayer};
use tracing::Span;

use crate::middleware::{request_id_middleware, security_headers_middleware};
use crate::state::AppState;

// =============================================================================
// Shared Page Data
// =============================================================================

/// Data every page layout needs.
#[derive(Debug, Clone, Copy)]
pub struct PageMeta {
    /// `light` or `dark`, applied as a class on `<html>`.
    pub theme: &'static str,
    /// Which navigation tab is highlighted.
    pub active: &'static str,
}

impl PageMeta {
    #[must_use]
    pub fn new(state: &AppState, active: &'static str) -> Self {
        Self {
            theme: state.platform().color_scheme().as_str(),
            active,
        }
    }
}

/// One `<option>` of a kind selector (workout type, meal type, category).
#[derive(Debug, Clone, Copy)]
pub struct KindOption {
    pub value: &'static str,
    pub label: &'static str,
    pub emoji: &'static str,
    pub selected: bool,
}

/// Build selector options in display order, marking `selected`.
macro_rules! kind_options {
    ($kind:ty, $selected:expr) => {{
        let selected: $kind = $selected;
        <$kind>::ALL
            .iter()
            .map(|kind| $crate::routes::KindOption {
                value: kind.as_str(),
                label: kind.label(),
                emoji: kind.emoji(),
                selected: *kind == selected,
            })
            .collect::<Vec<_>>()
    }};
}
pub(crate) use kind_options;

/// Body of a destructive action's confirmation form.
#[derive(Debug, Deserialize)]
pub struct ConfirmForm {
    #[serde(default)]
    pub confirm: Option<String>,
}

impl ConfirmForm {
    /// Whether the user pressed the confirming button.
    #[must_use]
    pub fn is_confirmed(&self) -> bool {
        self.confirm.as_deref() == Some("yes")
    }
}

/// Today's date in the server's local time zone.
#[must_use]
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

// =============================================================================
// Routers
// =============================================================================

/// Create the workout routes router.
pub fn workout_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(workouts::index))
        .route("/new", get(workouts::new_page).post(workouts::submit))
        .route(
            "/{id}/delete",
            get(workouts::confirm_delete).post(workouts::delete),
        )
}

/// Create the nutrition routes router.
pub fn nutrition_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(nutrition::index))
        .route("/new", get(nutrition::new_page).post(nutrition::submit))
        .route(
            "/meals/{id}/delete",
            get(nutrition::confirm_delete).post(nutrition::delete),
        )
}

/// Create the shopping routes router.
pub fn shopping_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(shopping::index).post(shopping::add))
        .route("/clear", post(shopping::clear_purchased))
        .route("/{id}/toggle", post(shopping::toggle))
        .route("/{id}/delete", post(shopping::delete))
}

/// Create all page routes for the webapp.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .route("/water", post(home::log_water))
        .nest("/workouts", workout_routes())
        .nest("/nutrition", nutrition_routes())
        .nest("/shopping", shopping_routes())
        .route("/settings", get(settings::show).post(settings::save))
}

/// Build the complete application: pages, health checks, static files and
/// the middleware stack.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/health/ready", get(readiness))
        .merge(routes())
        .nest_service("/static", ServeDir::new("crates/webapp/static"))
        .layer(axum::middleware::from_fn(security_headers_middleware))
        .layer(axum::middleware::from_fn(request_id_middleware))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        uri = %request.uri(),
                        request_id = tracing::field::Empty,
                        status = tracing::field::Empty,
                        latency_ms = tracing::field::Empty,
                    )
                })
                .on_response(
                    |response: &axum::http::Response<_>, latency: Duration, span: &Span| {
                        span.record("status", response.status().as_u16());
                        span.record(
                            "latency_ms",
                            u64::try_from(latency.as_millis()).unwrap_or(u64::MAX),
                        );
                        DefaultOnResponse::default().on_response(response, latency, span);
                    },
                ),
        )
        .with_state(state)
        // Sentry layers (outermost for full request coverage)
        .layer(sentry_tower::NewSentryLayer::new_from_top())
        .layer(sentry_tower::SentryHttpLayer::new().enable_transaction())
}

// =============================================================================
// Health Checks
// =============================================================================

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
async fn health() -> &'static str {
    "ok"
}

/// Readiness health check endpoint.
///
/// Returns 503 Service Unavailable if the gateway is not reachable.
async fn readiness(State(state): State<AppState>) -> StatusCode {
    match state.gateway().ping().await {
        Ok(()) => StatusCode::OK,
        Err(e) => {
            tracing::warn!("Gateway readiness check failed: {e}");
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}
