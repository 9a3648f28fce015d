//! Gateway records, creation requests and summaries.
//!
//! Responses are transient, read-mostly copies of what the gateway owns.
//! Fields the gateway adds for its own bookkeeping (`user_id`,
//! `created_at`, ...) are ignored on deserialization.
//!
//! Creation requests skip `None` fields when serialized: an absent value is
//! left out of the JSON body entirely rather than sent as `null` or `0`.

pub mod nutrition;
pub mod shopping;
pub mod user;
pub mod workout;

pub use nutrition::{DailyNutritionSummary, Meal, NewMeal, NewWaterLog, WaterLog};
pub use shopping::{NewShoppingItem, ShoppingItem, ShoppingSummary};
pub use user::{User, UserGoals};
pub use workout::{Exercise, NewExercise, NewWorkout, WeeklyWorkoutSummary, Workout};
