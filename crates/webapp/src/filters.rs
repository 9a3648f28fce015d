//! Custom Askama template filters.

#![allow(clippy::unnecessary_wraps)]

use std::fmt::Display;

use chrono::NaiveDate;

/// Short date, e.g. "Oct 18, 2026".
///
/// Usage in templates: `{{ workout.date|day }}`
#[askama::filter_fn]
pub fn day(value: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    Ok(format_date(&value.to_string(), "%b %-d, %Y"))
}

/// Weekday and date without year, e.g. "Sunday, October 18".
///
/// Usage in templates: `{{ today|long_day }}`
#[askama::filter_fn]
pub fn long_day(value: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    Ok(format_date(&value.to_string(), "%A, %B %-d"))
}

/// A gram amount without a trailing `.0`, e.g. "80.5" or "80".
///
/// Usage in templates: `{{ total_protein|grams }}g`
#[askama::filter_fn]
pub fn grams(value: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    Ok(format_grams(&value.to_string()))
}

fn format_date(raw: &str, pattern: &str) -> String {
    raw.parse::<NaiveDate>()
        .map_or_else(|_| raw.to_string(), |date| date.format(pattern).to_string())
}

fn format_grams(raw: &str) -> String {
    raw.parse::<f64>().map_or_else(
        |_| raw.to_string(),
        |amount| {
            let rounded = format!("{amount:.1}");
            rounded
                .strip_suffix(".0")
                .map_or_else(|| rounded.clone(), str::to_string)
        },
    )
}
