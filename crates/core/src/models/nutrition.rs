//! Meal, water and daily nutrition records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::{MealId, MealType, WaterLogId};

/// A logged meal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    pub id: MealId,
    pub name: String,
    pub meal_type: MealType,
    pub meal_date: NaiveDate,
    pub calories: Option<i32>,
    pub protein: Option<f64>,
    pub carbs: Option<f64>,
    pub fat: Option<f64>,
    #[serde(default)]
    pub fiber: Option<f64>,
    pub serving_size: Option<String>,
    pub notes: Option<String>,
}

/// Request body for logging a meal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewMeal {
    pub name: String,
    pub meal_type: MealType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calories: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protein: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carbs: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fat: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fiber: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serving_size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub meal_date: NaiveDate,
}

/// Request body for logging water; `glasses` is a delta, not a total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewWaterLog {
    pub glasses: i32,
    pub log_date: NaiveDate,
}

/// A water log entry as stored by the gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaterLog {
    pub id: WaterLogId,
    pub glasses: i32,
    pub log_date: NaiveDate,
}

/// Pre-aggregated nutrition totals for one day, computed by the gateway.
///
/// The `*_progress` fields are percentages of the matching goal. They are
/// consumed as-is; nothing in this crate recomputes them from the totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyNutritionSummary {
    pub date: NaiveDate,
    pub total_calories: i64,
    pub total_protein: f64,
    pub total_carbs: f64,
    pub total_fat: f64,
    #[serde(default)]
    pub total_fiber: f64,
    pub water_glasses: i32,
    pub meals_count: u32,

    pub calorie_goal: i32,
    pub protein_goal: i32,
    pub carbs_goal: i32,
    pub fat_goal: i32,
    pub water_goal: i32,

    pub calorie_progress: f64,
    pub protein_progress: f64,
    pub carbs_progress: f64,
    pub fat_progress: f64,
    pub water_progress: f64,
}
