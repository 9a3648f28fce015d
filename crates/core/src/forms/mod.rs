//! Draft records and their conversion into gateway requests.
//!
//! A draft holds the raw text of a form exactly as typed. Conversion happens
//! once, at submission, and applies the omission rule: a blank or
//! unparseable optional field is left out of the request entirely instead of
//! being sent as zero or null.
//!
//! Drafts are plain data. The webapp fills them from form posts and the CLI
//! fills them from arguments; both go through the same conversion.

mod goals;
mod meal;
mod shopping;
mod workout;

pub use goals::GoalsDraft;
pub use meal::MealDraft;
pub use shopping::ShoppingItemDraft;
pub use workout::{ExerciseDraft, WorkoutDraft};

use thiserror::Error;

use crate::types::ParseKindError;

/// A draft that cannot become a request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("name is required")]
    MissingName,

    #[error("exercise {index} needs a name")]
    MissingExerciseName { index: usize },

    #[error(transparent)]
    InvalidKind(#[from] ParseKindError),
}

// =============================================================================
// Field parsing
// =============================================================================

/// Parse an optional integer field.
///
/// Accepts whole numbers and truncates decimal input (`"45.9"` is 45).
/// Blank, non-numeric and out-of-range input is `None`.
#[must_use]
pub fn parse_optional_int(raw: &str) -> Option<i32> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(value) = raw.parse::<i32>() {
        return Some(value);
    }

    let value = raw.parse::<f64>().ok().filter(|v| v.is_finite())?.trunc();
    if value < f64::from(i32::MIN) || value > f64::from(i32::MAX) {
        return None;
    }
    #[allow(clippy::cast_possible_truncation)]
    Some(value as i32)
}

/// Parse an optional decimal field. Blank and non-finite input is `None`.
#[must_use]
pub fn parse_optional_float(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse a required integer field, treating anything unparseable as zero.
#[must_use]
pub fn parse_int_or_zero(raw: &str) -> i32 {
    parse_optional_int(raw).unwrap_or(0)
}

/// Optional free text: blank after trimming is `None`.
#[must_use]
pub fn optional_text(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

/// Required name: trimmed, and refused when blank.
pub(crate) fn required_name(raw: &str) -> Result<String, DraftError> {
    optional_text(raw).ok_or(DraftError::MissingName)
}
