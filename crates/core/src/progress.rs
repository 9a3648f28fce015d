//! Progress bars read from the daily nutrition summary.
//!
//! The percentages come from the gateway and are trusted as-is. Nothing here
//! divides a total by its goal.

use crate::models::DailyNutritionSummary;

/// One labelled progress bar.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressBar {
    pub label: &'static str,
    pub current: f64,
    pub goal: i32,
    pub unit: &'static str,
    percent: f64,
}

impl ProgressBar {
    #[must_use]
    pub const fn new(
        label: &'static str,
        current: f64,
        goal: i32,
        unit: &'static str,
        percent: f64,
    ) -> Self {
        Self {
            label,
            current,
            goal,
            unit,
            percent,
        }
    }

    /// Percentage exactly as the gateway reported it. May exceed 100.
    #[must_use]
    pub const fn percent(&self) -> f64 {
        self.percent
    }

    /// The percentage as a `0.0..` fraction.
    #[must_use]
    pub fn fraction(&self) -> f64 {
        self.percent / 100.0
    }

    /// Whether the gateway reports the goal as reached.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.percent >= 100.0
    }
}

/// Bars for the five daily goals, in display order.
#[must_use]
pub fn nutrition_bars(summary: &DailyNutritionSummary) -> [ProgressBar; 5] {
    #[allow(clippy::cast_precision_loss)]
    let calories = summary.total_calories as f64;

    [
        ProgressBar::new(
            "Calories",
            calories,
            summary.calorie_goal,
            "kcal",
            summary.calorie_progress,
        ),
        ProgressBar::new(
            "Protein",
            summary.total_protein,
            summary.protein_goal,
            "g",
            summary.protein_progress,
        ),
        ProgressBar::new(
            "Carbs",
            summary.total_carbs,
            summary.carbs_goal,
            "g",
            summary.carbs_progress,
        ),
        ProgressBar::new(
            "Fat",
            summary.total_fat,
            summary.fat_goal,
            "g",
            summary.fat_progress,
        ),
        water_bar(summary),
    ]
}

/// The water bar on its own, for the home page card.
#[must_use]
pub fn water_bar(summary: &DailyNutritionSummary) -> ProgressBar {
    ProgressBar::new(
        "Water",
        f64::from(summary.water_glasses),
        summary.water_goal,
        "glasses",
        summary.water_progress,
    )
}
