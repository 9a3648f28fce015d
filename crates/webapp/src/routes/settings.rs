//! Settings route handlers: profile and daily goals.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Query, State},
    response::Redirect,
};
use lifeguard_core::forms::GoalsDraft;
use serde::Deserialize;
use tracing::instrument;

use super::PageMeta;
use crate::error::{Result, add_breadcrumb};
use crate::state::AppState;

/// Who the page is showing, read from the host context.
#[derive(Clone)]
pub struct ProfileView {
    pub avatar: String,
    pub full_name: Option<String>,
    pub username: Option<String>,
}

/// Settings page template.
#[derive(Template, WebTemplate)]
#[template(path = "settings.html")]
pub struct SettingsTemplate {
    pub page: PageMeta,
    pub profile: ProfileView,
    pub goals: GoalsDraft,
    /// The goals shown are defaults because the user could not be loaded.
    pub goals_unavailable: bool,
    pub saved: bool,
}

#[derive(Debug, Default, Deserialize)]
pub struct SettingsQuery {
    #[serde(default)]
    pub saved: Option<String>,
}

/// Goals form data. Submitted as a whole.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct GoalsForm {
    pub calories: String,
    pub protein: String,
    pub carbs: String,
    pub fat: String,
    pub water: String,
}

impl From<GoalsForm> for GoalsDraft {
    fn from(form: GoalsForm) -> Self {
        Self {
            calories: form.calories,
            protein: form.protein,
            carbs: form.carbs,
            fat: form.fat,
            water: form.water,
        }
    }
}

/// Display the profile and the goals form prefilled from the current user.
#[instrument(skip(state, query))]
pub async fn show(
    State(state): State<AppState>,
    Query(query): Query<SettingsQuery>,
) -> SettingsTemplate {
    let platform = state.platform();
    let user = platform.user();

    let profile = ProfileView {
        avatar: platform.avatar_initial(),
        full_name: user.map(|u| u.full_name()),
        username: user.and_then(|u| u.username.clone()),
    };

    let (goals, goals_unavailable) = match state.gateway().current_user().await {
        Ok(user) => (GoalsDraft::from(user.goals()), false),
        Err(e) => {
            tracing::warn!("Failed to fetch current user: {e}");
            (GoalsDraft::default(), true)
        }
    };

    SettingsTemplate {
        page: PageMeta::new(&state, "settings"),
        profile,
        goals,
        goals_unavailable,
        saved: query.saved.is_some(),
    }
}

/// Replace the daily goals wholesale.
#[instrument(skip(state, form))]
pub async fn save(State(state): State<AppState>, Form(form): Form<GoalsForm>) -> Result<Redirect> {
    let goals = GoalsDraft::from(form).to_request();

    add_breadcrumb("settings", "Updated goals");
    let saved = state.gateway().update_goals(&goals).await?;
    tracing::info!(
        calories = saved.daily_calorie_goal,
        water = saved.daily_water_goal,
        "Goals updated"
    );

    Ok(Redirect::to("/settings?saved=1"))
}
