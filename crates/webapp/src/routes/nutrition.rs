//! Nutrition route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use chrono::NaiveDate;
use lifeguard_core::forms::{DraftError, MealDraft};
use lifeguard_core::models::Meal;
use lifeguard_core::view::group_meals_by_type;
use lifeguard_core::{MealId, MealType};
use serde::Deserialize;
use tracing::instrument;

use super::home::NutritionCard;
use super::{ConfirmForm, KindOption, PageMeta, kind_options, today};
use crate::error::{AppError, Result, add_breadcrumb};
use crate::filters;
use crate::state::AppState;

// =============================================================================
// Views
// =============================================================================

/// A meal row.
#[derive(Clone)]
pub struct MealView {
    pub id: MealId,
    pub name: String,
    pub calories: Option<i32>,
    /// "P 30g · C 45g · F 12g", only the macros that were recorded.
    pub macros: String,
    pub serving_size: Option<String>,
}

impl From<&Meal> for MealView {
    fn from(meal: &Meal) -> Self {
        let macros = [("P", meal.protein), ("C", meal.carbs), ("F", meal.fat)]
            .into_iter()
            .filter_map(|(letter, grams)| grams.map(|g| format!("{letter} {}g", trim_grams(g))))
            .collect::<Vec<_>>()
            .join(" · ");

        Self {
            id: meal.id,
            name: meal.name.clone(),
            calories: meal.calories,
            macros,
            serving_size: meal.serving_size.clone(),
        }
    }
}

/// One meal-type section; only types with at least one meal get one.
#[derive(Clone)]
pub struct MealSection {
    pub emoji: &'static str,
    pub label: &'static str,
    pub meals: Vec<MealView>,
}

fn meal_sections(meals: &[Meal]) -> Vec<MealSection> {
    group_meals_by_type(meals)
        .into_iter()
        .map(|(meal_type, meals)| MealSection {
            emoji: meal_type.emoji(),
            label: meal_type.label(),
            meals: meals.into_iter().map(MealView::from).collect(),
        })
        .collect()
}

fn trim_grams(grams: f64) -> String {
    let formatted = format!("{grams:.1}");
    formatted
        .strip_suffix(".0")
        .map_or_else(|| formatted.clone(), str::to_string)
}

// =============================================================================
// Templates
// =============================================================================

/// Nutrition page template.
#[derive(Template, WebTemplate)]
#[template(path = "nutrition/index.html")]
pub struct NutritionTemplate {
    pub page: PageMeta,
    pub today: NaiveDate,
    pub progress: Option<NutritionCard>,
    pub sections: Vec<MealSection>,
}

/// New meal form template.
#[derive(Template, WebTemplate)]
#[template(path = "nutrition/new.html")]
pub struct NewMealTemplate {
    pub page: PageMeta,
    pub draft: MealDraft,
    pub meal_types: Vec<KindOption>,
    pub error: Option<String>,
}

impl NewMealTemplate {
    fn new(state: &AppState, draft: MealDraft, error: Option<String>) -> Self {
        Self {
            page: PageMeta::new(state, "nutrition"),
            meal_types: kind_options!(MealType, draft.meal_type),
            draft,
            error,
        }
    }
}

/// Delete confirmation template.
#[derive(Template, WebTemplate)]
#[template(path = "nutrition/delete.html")]
pub struct DeleteMealTemplate {
    pub page: PageMeta,
    pub meal: MealView,
}

// =============================================================================
// Form Data
// =============================================================================

/// New meal form data. Numeric fields stay text until submission.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct MealForm {
    pub name: String,
    pub meal_type: String,
    pub calories: String,
    pub protein: String,
    pub carbs: String,
    pub fat: String,
    pub fiber: String,
    pub serving_size: String,
    pub notes: String,
}

impl TryFrom<MealForm> for MealDraft {
    type Error = AppError;

    fn try_from(form: MealForm) -> Result<Self> {
        let meal_type = if form.meal_type.trim().is_empty() {
            MealType::default()
        } else {
            form.meal_type.parse().map_err(DraftError::from)?
        };

        Ok(Self {
            name: form.name,
            meal_type,
            calories: form.calories,
            protein: form.protein,
            carbs: form.carbs,
            fat: form.fat,
            fiber: form.fiber,
            serving_size: form.serving_size,
            notes: form.notes,
        })
    }
}

// =============================================================================
// Handlers
// =============================================================================

/// Display today's progress and meals grouped by type.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Result<NutritionTemplate> {
    let today = today();
    let gateway = state.gateway();
    let (summary, meals) = tokio::join!(
        gateway.daily_nutrition_summary(today),
        gateway.list_meals(today)
    );

    let progress = summary
        .inspect_err(|e| tracing::warn!("Failed to fetch nutrition summary: {e}"))
        .ok();
    let meals = meals?;

    Ok(NutritionTemplate {
        page: PageMeta::new(&state, "nutrition"),
        today,
        progress: progress.as_ref().map(NutritionCard::from),
        sections: meal_sections(&meals),
    })
}

/// Display an empty new-meal form.
#[instrument(skip(state))]
pub async fn new_page(State(state): State<AppState>) -> NewMealTemplate {
    NewMealTemplate::new(&state, MealDraft::default(), None)
}

/// Create a meal for today.
#[instrument(skip(state, form))]
pub async fn submit(State(state): State<AppState>, Form(form): Form<MealForm>) -> Result<Response> {
    let draft = MealDraft::try_from(form)?;

    match draft.to_request(today()) {
        Ok(request) => {
            add_breadcrumb("nutrition", "Created meal");
            state.gateway().create_meal(&request).await?;
            Ok(Redirect::to("/nutrition").into_response())
        }
        Err(e) => Ok((
            StatusCode::UNPROCESSABLE_ENTITY,
            NewMealTemplate::new(&state, draft, Some(format!("Meal {e}"))),
        )
            .into_response()),
    }
}

/// Display the delete confirmation for one of today's meals.
#[instrument(skip(state), fields(meal_id = %id))]
pub async fn confirm_delete(
    State(state): State<AppState>,
    Path(id): Path<MealId>,
) -> Result<DeleteMealTemplate> {
    let meal = state
        .gateway()
        .list_meals(today())
        .await?
        .into_iter()
        .find(|meal| meal.id == id)
        .ok_or_else(|| AppError::NotFound(format!("meal {id}")))?;

    Ok(DeleteMealTemplate {
        page: PageMeta::new(&state, "nutrition"),
        meal: MealView::from(&meal),
    })
}

/// Delete a meal once confirmed.
#[instrument(skip(state, form), fields(meal_id = %id))]
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<MealId>,
    Form(form): Form<ConfirmForm>,
) -> Result<Redirect> {
    if !form.is_confirmed() {
        return Ok(Redirect::to(&format!("/nutrition/meals/{id}/delete")));
    }

    add_breadcrumb("nutrition", &format!("Deleted meal {id}"));
    state.gateway().delete_meal(id).await?;
    Ok(Redirect::to("/nutrition"))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    fn meal(id: i64, meal_type: MealType, protein: Option<f64>) -> Meal {
        Meal {
            id: MealId::new(id),
            name: format!("Meal {id}"),
            meal_type,
            meal_date: NaiveDate::from_ymd_opt(2026, 10, 18).unwrap(),
            calories: Some(400),
            protein,
            carbs: None,
            fat: Some(12.0),
            fiber: None,
            serving_size: None,
            notes: None,
        }
    }

    #[test]
    fn test_meal_view_lists_recorded_macros() {
        let view = MealView::from(&meal(1, MealType::Lunch, Some(30.5)));
        assert_eq!(view.macros, "P 30.5g · F 12g");

        let view = MealView::from(&meal(2, MealType::Lunch, None));
        assert_eq!(view.macros, "F 12g");
    }

    #[test]
    fn test_meal_sections_follow_display_order() {
        let meals = vec![
            meal(1, MealType::Snack, None),
            meal(2, MealType::Breakfast, None),
            meal(3, MealType::Snack, None),
        ];

        let sections = meal_sections(&meals);
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].label, MealType::Breakfast.label());
        assert_eq!(sections[1].label, MealType::Snack.label());
        let ids: Vec<_> = sections[1].meals.iter().map(|m| m.id.as_i64()).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_meal_form_into_draft() {
        let form = MealForm {
            name: "Oatmeal".to_string(),
            meal_type: "breakfast".to_string(),
            calories: "400".to_string(),
            ..MealForm::default()
        };
        let draft = MealDraft::try_from(form).unwrap();
        assert_eq!(draft.meal_type, MealType::Breakfast);

        let form = MealForm {
            meal_type: "brunch".to_string(),
            ..MealForm::default()
        };
        assert!(MealDraft::try_from(form).is_err());
    }
}
