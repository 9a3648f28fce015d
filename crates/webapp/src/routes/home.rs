//! Home page route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{Form, extract::State, response::Redirect};
use chrono::NaiveDate;
use lifeguard_core::models::{DailyNutritionSummary, ShoppingSummary, WeeklyWorkoutSummary};
use lifeguard_core::progress::{self, ProgressBar};
use serde::Deserialize;
use tracing::instrument;

use super::{PageMeta, today};
use crate::error::{Result, add_breadcrumb};
use crate::filters;
use crate::state::AppState;

// =============================================================================
// Views
// =============================================================================

/// A progress bar prepared for display.
#[derive(Clone)]
pub struct BarView {
    pub label: &'static str,
    pub current: f64,
    pub goal: i32,
    pub unit: &'static str,
    /// Percent as reported, for the `<progress>` element.
    pub percent: f64,
    /// "54%"
    pub percent_label: String,
    pub complete: bool,
}

impl From<&ProgressBar> for BarView {
    fn from(bar: &ProgressBar) -> Self {
        Self {
            label: bar.label,
            current: bar.current,
            goal: bar.goal,
            unit: bar.unit,
            percent: bar.percent(),
            percent_label: format!("{:.0}%", bar.percent()),
            complete: bar.is_complete(),
        }
    }
}

/// Today's nutrition card: calories first, then macros, then water.
#[derive(Clone)]
pub struct NutritionCard {
    pub bars: Vec<BarView>,
    pub meals_count: u32,
}

impl From<&DailyNutritionSummary> for NutritionCard {
    fn from(summary: &DailyNutritionSummary) -> Self {
        Self {
            bars: progress::nutrition_bars(summary)
                .iter()
                .map(BarView::from)
                .collect(),
            meals_count: summary.meals_count,
        }
    }
}

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub page: PageMeta,
    pub greeting_name: String,
    pub today: NaiveDate,
    /// `None` while the gateway is unavailable.
    pub nutrition: Option<NutritionCard>,
    pub workouts: Option<WeeklyWorkoutSummary>,
    pub shopping: Option<ShoppingSummary>,
}

// =============================================================================
// Handlers
// =============================================================================

/// Display the home page.
///
/// The three summaries are fetched concurrently. A failed fetch leaves its
/// card in the placeholder state instead of failing the page.
#[instrument(skip(state))]
pub async fn home(State(state): State<AppState>) -> HomeTemplate {
    let today = today();
    let gateway = state.gateway();

    let (nutrition, workouts, shopping) = tokio::join!(
        gateway.daily_nutrition_summary(today),
        gateway.weekly_workout_summary(),
        gateway.shopping_summary(),
    );

    let nutrition = nutrition
        .inspect_err(|e| tracing::warn!("Failed to fetch nutrition summary: {e}"))
        .ok();
    let workouts = workouts
        .inspect_err(|e| tracing::warn!("Failed to fetch workout summary: {e}"))
        .ok();
    let shopping = shopping
        .inspect_err(|e| tracing::warn!("Failed to fetch shopping summary: {e}"))
        .ok();

    HomeTemplate {
        page: PageMeta::new(&state, "home"),
        greeting_name: state.platform().greeting_name().to_string(),
        today,
        nutrition: nutrition.as_ref().map(NutritionCard::from),
        workouts,
        shopping,
    }
}

/// Water button form data.
#[derive(Debug, Deserialize)]
pub struct WaterForm {
    /// Page to return to; only known pages are honoured.
    #[serde(default)]
    pub next: Option<String>,
}

impl WaterForm {
    fn redirect_target(&self) -> &'static str {
        match self.next.as_deref() {
            Some("/nutrition") => "/nutrition",
            _ => "/",
        }
    }
}

/// Log one glass of water for today and return to the page it came from.
#[instrument(skip(state))]
pub async fn log_water(
    State(state): State<AppState>,
    Form(form): Form<WaterForm>,
) -> Result<Redirect> {
    add_breadcrumb("nutrition", "Logged a glass of water");
    state.gateway().log_water(1, today()).await?;
    Ok(Redirect::to(form.redirect_target()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_view_labels() {
        let bar = ProgressBar::new("Protein", 80.5, 150, "g", 53.66);
        let view = BarView::from(&bar);
        assert_eq!(view.goal, 150);
        assert_eq!(view.percent_label, "54%");
        assert!(!view.complete);

        let bar = ProgressBar::new("Calories", 2100.0, 2000, "kcal", 105.0);
        let view = BarView::from(&bar);
        assert_eq!(view.unit, "kcal");
        assert_eq!(view.percent_label, "105%");
        assert!(view.complete);
    }

    #[test]
    fn test_water_redirect_only_to_known_pages() {
        let form = WaterForm {
            next: Some("/nutrition".to_string()),
        };
        assert_eq!(form.redirect_target(), "/nutrition");

        let form = WaterForm {
            next: Some("https://evil.example".to_string()),
        };
        assert_eq!(form.redirect_target(), "/");
        assert_eq!(WaterForm { next: None }.redirect_target(), "/");
    }
}
