//! Cache value types for gateway reads.

use std::sync::atomic::{AtomicU64, Ordering};

use lifeguard_core::models::{
    DailyNutritionSummary, Meal, ShoppingItem, ShoppingSummary, User, WeeklyWorkoutSummary,
    Workout,
};
use lifeguard_core::query::QueryCategory;

/// Cached value types, one per query key shape.
#[derive(Debug, Clone)]
pub enum CacheValue {
    Workouts(Vec<Workout>),
    WorkoutSummary(WeeklyWorkoutSummary),
    Meals(Vec<Meal>),
    NutritionSummary(Box<DailyNutritionSummary>),
    ShoppingItems(Vec<ShoppingItem>),
    ShoppingSummary(ShoppingSummary),
    User(Box<User>),
}

/// Conversion between a response type and its cache slot.
pub trait Cached: Sized {
    fn into_cache(self) -> CacheValue;
    fn from_cache(value: CacheValue) -> Option<Self>;
}

macro_rules! cached {
    ($ty:ty => $variant:ident) => {
        impl Cached for $ty {
            fn into_cache(self) -> CacheValue {
                CacheValue::$variant(self)
            }

            fn from_cache(value: CacheValue) -> Option<Self> {
                match value {
                    CacheValue::$variant(inner) => Some(inner),
                    _ => None,
                }
            }
        }
    };
    (box $ty:ty => $variant:ident) => {
        impl Cached for $ty {
            fn into_cache(self) -> CacheValue {
                CacheValue::$variant(Box::new(self))
            }

            fn from_cache(value: CacheValue) -> Option<Self> {
                match value {
                    CacheValue::$variant(inner) => Some(*inner),
                    _ => None,
                }
            }
        }
    };
}

cached!(Vec<Workout> => Workouts);
cached!(WeeklyWorkoutSummary => WorkoutSummary);
cached!(Vec<Meal> => Meals);
cached!(box DailyNutritionSummary => NutritionSummary);
cached!(Vec<ShoppingItem> => ShoppingItems);
cached!(ShoppingSummary => ShoppingSummary);
cached!(box User => User);

/// Invalidation counters, one per query category.
///
/// A read records its category's generation before it is sent and only
/// stores its result while the generation is unchanged, so a read that
/// overlapped an invalidation is never cached.
#[derive(Debug, Default)]
pub struct Generations {
    workouts: AtomicU64,
    workout_summary: AtomicU64,
    meals: AtomicU64,
    nutrition_summary: AtomicU64,
    shopping: AtomicU64,
    user: AtomicU64,
}

impl Generations {
    const fn counter(&self, category: QueryCategory) -> &AtomicU64 {
        match category {
            QueryCategory::Workouts => &self.workouts,
            QueryCategory::WorkoutSummary => &self.workout_summary,
            QueryCategory::Meals => &self.meals,
            QueryCategory::NutritionSummary => &self.nutrition_summary,
            QueryCategory::Shopping => &self.shopping,
            QueryCategory::User => &self.user,
        }
    }

    #[must_use]
    pub fn current(&self, category: QueryCategory) -> u64 {
        self.counter(category).load(Ordering::SeqCst)
    }

    pub fn bump(&self, category: QueryCategory) {
        self.counter(category).fetch_add(1, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generations_are_per_category() {
        let generations = Generations::default();
        generations.bump(QueryCategory::Shopping);
        generations.bump(QueryCategory::Shopping);

        assert_eq!(generations.current(QueryCategory::Shopping), 2);
        assert_eq!(generations.current(QueryCategory::Meals), 0);
    }
}
