//! Closed enumerations used to classify gateway records.
//!
//! Each enumeration carries its display tables (emoji and label) as
//! exhaustive `match` expressions, so adding a variant without a label is a
//! compile error rather than a missing key at render time.
//!
//! Variant declaration order is the canonical display order. `Ord` is
//! derived from it, which lets `BTreeMap` buckets iterate in that order.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A string did not name a variant of one of the closed enumerations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {kind}: {value}")]
pub struct ParseKindError {
    /// Which enumeration was being parsed.
    pub kind: &'static str,
    /// The rejected input.
    pub value: String,
}

impl ParseKindError {
    fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_owned(),
        }
    }
}

// =============================================================================
// Workout Type
// =============================================================================

/// Kind of workout session.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutType {
    #[default]
    Strength,
    Cardio,
    Flexibility,
    Hiit,
    Sports,
    Other,
}

impl WorkoutType {
    /// Every variant in canonical display order.
    pub const ALL: [Self; 6] = [
        Self::Strength,
        Self::Cardio,
        Self::Flexibility,
        Self::Hiit,
        Self::Sports,
        Self::Other,
    ];

    /// Wire value sent to and received from the gateway.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Strength => "strength",
            Self::Cardio => "cardio",
            Self::Flexibility => "flexibility",
            Self::Hiit => "hiit",
            Self::Sports => "sports",
            Self::Other => "other",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Strength => "Strength",
            Self::Cardio => "Cardio",
            Self::Flexibility => "Flexibility",
            Self::Hiit => "HIIT",
            Self::Sports => "Sports",
            Self::Other => "Other",
        }
    }

    /// Emoji shown next to the label.
    #[must_use]
    pub const fn emoji(self) -> &'static str {
        match self {
            Self::Strength => "💪",
            Self::Cardio => "🏃",
            Self::Flexibility => "🧘",
            Self::Hiit => "⚡",
            Self::Sports => "⚽",
            Self::Other => "🏋️",
        }
    }
}

impl std::fmt::Display for WorkoutType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for WorkoutType {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ParseKindError::new("workout type", s))
    }
}

// =============================================================================
// Meal Type
// =============================================================================

/// Which meal of the day a record belongs to.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "snake_case")]
pub enum MealType {
    Breakfast,
    #[default]
    Lunch,
    Dinner,
    Snack,
}

impl MealType {
    /// Every variant in canonical display order.
    pub const ALL: [Self; 4] = [Self::Breakfast, Self::Lunch, Self::Dinner, Self::Snack];

    /// Wire value sent to and received from the gateway.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Breakfast => "breakfast",
            Self::Lunch => "lunch",
            Self::Dinner => "dinner",
            Self::Snack => "snack",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Breakfast => "Breakfast",
            Self::Lunch => "Lunch",
            Self::Dinner => "Dinner",
            Self::Snack => "Snack",
        }
    }

    /// Emoji shown next to the label.
    #[must_use]
    pub const fn emoji(self) -> &'static str {
        match self {
            Self::Breakfast => "🌅",
            Self::Lunch => "☀️",
            Self::Dinner => "🌙",
            Self::Snack => "🍎",
        }
    }
}

impl std::fmt::Display for MealType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for MealType {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ParseKindError::new("meal type", s))
    }
}

// =============================================================================
// Shopping Category
// =============================================================================

/// Aisle a shopping item is filed under.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "snake_case")]
pub enum ShoppingCategory {
    Produce,
    Dairy,
    Meat,
    Seafood,
    Bakery,
    Frozen,
    Pantry,
    Beverages,
    Snacks,
    Supplements,
    #[default]
    Other,
}

impl ShoppingCategory {
    /// Every variant in canonical display order.
    pub const ALL: [Self; 11] = [
        Self::Produce,
        Self::Dairy,
        Self::Meat,
        Self::Seafood,
        Self::Bakery,
        Self::Frozen,
        Self::Pantry,
        Self::Beverages,
        Self::Snacks,
        Self::Supplements,
        Self::Other,
    ];

    /// Wire value sent to and received from the gateway.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Produce => "produce",
            Self::Dairy => "dairy",
            Self::Meat => "meat",
            Self::Seafood => "seafood",
            Self::Bakery => "bakery",
            Self::Frozen => "frozen",
            Self::Pantry => "pantry",
            Self::Beverages => "beverages",
            Self::Snacks => "snacks",
            Self::Supplements => "supplements",
            Self::Other => "other",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Produce => "Produce",
            Self::Dairy => "Dairy",
            Self::Meat => "Meat",
            Self::Seafood => "Seafood",
            Self::Bakery => "Bakery",
            Self::Frozen => "Frozen",
            Self::Pantry => "Pantry",
            Self::Beverages => "Beverages",
            Self::Snacks => "Snacks",
            Self::Supplements => "Supplements",
            Self::Other => "Other",
        }
    }

    /// Emoji shown next to the label.
    #[must_use]
    pub const fn emoji(self) -> &'static str {
        match self {
            Self::Produce => "🥬",
            Self::Dairy => "🥛",
            Self::Meat => "🥩",
            Self::Seafood => "🐟",
            Self::Bakery => "🍞",
            Self::Frozen => "🧊",
            Self::Pantry => "🥫",
            Self::Beverages => "🥤",
            Self::Snacks => "🍿",
            Self::Supplements => "💊",
            Self::Other => "📦",
        }
    }
}

impl std::fmt::Display for ShoppingCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ShoppingCategory {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ParseKindError::new("shopping category", s))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_workout_type_tables_cover_every_variant() {
        let labels: HashSet<_> = WorkoutType::ALL.iter().map(|t| t.label()).collect();
        let emoji: HashSet<_> = WorkoutType::ALL.iter().map(|t| t.emoji()).collect();
        assert_eq!(labels.len(), WorkoutType::ALL.len());
        assert_eq!(emoji.len(), WorkoutType::ALL.len());
    }

    #[test]
    fn test_meal_type_tables_cover_every_variant() {
        for meal_type in MealType::ALL {
            assert!(!meal_type.label().is_empty());
            assert!(!meal_type.emoji().is_empty());
        }
        assert_eq!(MealType::Breakfast.emoji(), "🌅");
        assert_eq!(MealType::Snack.label(), "Snack");
    }

    #[test]
    fn test_shopping_category_tables_cover_every_variant() {
        let labels: HashSet<_> = ShoppingCategory::ALL.iter().map(|c| c.label()).collect();
        assert_eq!(labels.len(), 11);
        assert_eq!(ShoppingCategory::Supplements.emoji(), "💊");
    }

    #[test]
    fn test_wire_values_round_trip_through_serde() {
        for kind in WorkoutType::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.as_str()));
        }
        for kind in ShoppingCategory::ALL {
            let parsed: ShoppingCategory =
                serde_json::from_str(&format!("\"{kind}\"")).unwrap();
            assert_eq!(parsed, kind);
        }
    }

    #[test]
    fn test_from_str() {
        assert_eq!("hiit".parse::<WorkoutType>().unwrap(), WorkoutType::Hiit);
        assert_eq!("dinner".parse::<MealType>().unwrap(), MealType::Dinner);
        assert_eq!(
            "frozen".parse::<ShoppingCategory>().unwrap(),
            ShoppingCategory::Frozen
        );

        let err = "brunch".parse::<MealType>().unwrap_err();
        assert_eq!(err.to_string(), "invalid meal type: brunch");
    }

    #[test]
    fn test_canonical_order_matches_all() {
        let mut sorted = MealType::ALL;
        sorted.sort();
        assert_eq!(sorted, MealType::ALL);

        let mut sorted = ShoppingCategory::ALL;
        sorted.sort();
        assert_eq!(sorted, ShoppingCategory::ALL);
    }

    #[test]
    fn test_defaults_match_form_defaults() {
        assert_eq!(WorkoutType::default(), WorkoutType::Strength);
        assert_eq!(MealType::default(), MealType::Lunch);
        assert_eq!(ShoppingCategory::default(), ShoppingCategory::Other);
    }
}
