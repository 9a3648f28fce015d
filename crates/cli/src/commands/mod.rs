//! Command implementations.
//!
//! Every command talks to the gateway through the same client and drafts the
//! webapp uses, so validation and the omission rule behave identically.

pub mod goals;
pub mod nutrition;
pub mod shopping;
pub mod summary;
pub mod workouts;

use chrono::NaiveDate;
use lifeguard_core::forms::DraftError;
use lifeguard_webapp::{ConfigError, GatewayClient, GatewayConfig, GatewayError};
use secrecy::ExposeSecret;
use thiserror::Error;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// Gateway settings are missing or invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The gateway request failed.
    #[error(transparent)]
    Gateway(#[from] GatewayError),

    /// The arguments cannot become a request.
    #[error("Invalid input: {0}")]
    Draft(#[from] DraftError),

    /// A destructive command was run without `--yes`.
    #[error("Refusing to delete {0} without --yes")]
    ConfirmationRequired(String),
}

/// Build a gateway client from the environment (`.env` is read if present).
///
/// # Errors
///
/// Returns `CommandError::Config` if `LIFEGUARD_GATEWAY_URL` is missing or a
/// setting is invalid.
pub fn connect() -> Result<GatewayClient, CommandError> {
    let _ = dotenvy::dotenv();
    let config = GatewayConfig::from_env()?;
    tracing::debug!(gateway = ?config, "Connecting");
    let init_data = config.init_data.as_ref().map(ExposeSecret::expose_secret);
    Ok(GatewayClient::new(&config, init_data))
}

/// The given date, or today in local time.
#[must_use]
pub fn date_or_today(date: Option<NaiveDate>) -> NaiveDate {
    date.unwrap_or_else(|| chrono::Local::now().date_naive())
}

/// Format a date the way the mini-app does, e.g. "Oct 18, 2026".
#[must_use]
pub fn format_day(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Format grams without a trailing `.0`.
#[must_use]
pub fn format_grams(grams: f64) -> String {
    let formatted = format!("{grams:.1}");
    formatted
        .strip_suffix(".0")
        .map_or_else(|| formatted.clone(), str::to_string)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_format_day() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
        assert_eq!(format_day(date), "Oct 18, 2026");
        assert_eq!(date_or_today(Some(date)), date);
    }

    #[test]
    fn test_format_grams() {
        assert_eq!(format_grams(80.0), "80");
        assert_eq!(format_grams(80.5), "80.5");
    }
}
