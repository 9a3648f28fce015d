//! Query keys and the mutation invalidation map.
//!
//! Every cached read is stored under a [`QueryKey`]. Keys belong to a coarse
//! [`QueryCategory`]; a successful mutation names its [`MutationTarget`], and
//! every cached key in one of the target's categories is dropped so the next
//! read goes back to the gateway.

use chrono::NaiveDate;

/// Family of cached queries that is invalidated as a unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum QueryCategory {
    Workouts,
    WorkoutSummary,
    Meals,
    NutritionSummary,
    Shopping,
    User,
}

impl QueryCategory {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Workouts => "workouts",
            Self::WorkoutSummary => "workout-summary",
            Self::Meals => "meals",
            Self::NutritionSummary => "nutrition-summary",
            Self::Shopping => "shopping",
            Self::User => "user",
        }
    }
}

impl std::fmt::Display for QueryCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifier of one cached read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryKey {
    Workouts,
    WorkoutSummary,
    Meals(NaiveDate),
    NutritionSummary(NaiveDate),
    ShoppingItems,
    ShoppingSummary,
    CurrentUser,
}

impl QueryKey {
    /// Category this key is invalidated with.
    #[must_use]
    pub const fn category(self) -> QueryCategory {
        match self {
            Self::Workouts => QueryCategory::Workouts,
            Self::WorkoutSummary => QueryCategory::WorkoutSummary,
            Self::Meals(_) => QueryCategory::Meals,
            Self::NutritionSummary(_) => QueryCategory::NutritionSummary,
            Self::ShoppingItems | Self::ShoppingSummary => QueryCategory::Shopping,
            Self::CurrentUser => QueryCategory::User,
        }
    }
}

impl std::fmt::Display for QueryKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Meals(date) | Self::NutritionSummary(date) => {
                write!(f, "{}/{date}", self.category())
            }
            Self::ShoppingSummary => f.write_str("shopping/summary"),
            _ => write!(f, "{}", self.category()),
        }
    }
}

/// What a mutation changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationTarget {
    Meals,
    Water,
    Workouts,
    ShoppingItems,
    Goals,
}

impl MutationTarget {
    /// Categories made stale by a successful mutation of this target.
    #[must_use]
    pub const fn invalidates(self) -> &'static [QueryCategory] {
        match self {
            Self::Meals => &[QueryCategory::Meals, QueryCategory::NutritionSummary],
            Self::Water => &[QueryCategory::NutritionSummary],
            Self::Workouts => &[QueryCategory::Workouts, QueryCategory::WorkoutSummary],
            Self::ShoppingItems => &[QueryCategory::Shopping],
            Self::Goals => &[QueryCategory::User, QueryCategory::NutritionSummary],
        }
    }

    /// Whether a successful mutation of this target makes `key` stale.
    #[must_use]
    pub fn affects(self, key: QueryKey) -> bool {
        self.invalidates().contains(&key.category())
    }
}
