//! Workout route handlers.
//!
//! The new-workout page is a server-side draft: every button posts the whole
//! form back with an `action` field. Adding or removing an exercise row
//! re-renders the form; only `save` sends a request to the gateway.

use std::collections::BTreeMap;

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use chrono::NaiveDate;
use lifeguard_core::forms::{DraftError, ExerciseDraft, WorkoutDraft};
use lifeguard_core::models::{WeeklyWorkoutSummary, Workout};
use lifeguard_core::{WorkoutId, WorkoutType};
use tracing::instrument;

use super::{ConfirmForm, KindOption, PageMeta, kind_options, today};
use crate::error::{AppError, Result, add_breadcrumb};
use crate::filters;
use crate::state::AppState;

// =============================================================================
// Views
// =============================================================================

/// A workout row in the history list.
#[derive(Clone)]
pub struct WorkoutView {
    pub id: WorkoutId,
    pub emoji: &'static str,
    pub label: &'static str,
    pub name: String,
    pub date: NaiveDate,
    pub duration_minutes: i32,
    pub calories_burned: Option<i32>,
    pub exercise_count: usize,
}

impl From<&Workout> for WorkoutView {
    fn from(workout: &Workout) -> Self {
        Self {
            id: workout.id,
            emoji: workout.workout_type.emoji(),
            label: workout.workout_type.label(),
            name: workout.name.clone(),
            date: workout.workout_date,
            duration_minutes: workout.duration_minutes,
            calories_burned: workout.calories_burned,
            exercise_count: workout.exercises.len(),
        }
    }
}

/// Count of workouts of one type this week.
#[derive(Clone)]
pub struct TypeCountView {
    pub emoji: &'static str,
    pub label: &'static str,
    pub count: u32,
}

/// This week's totals.
#[derive(Clone)]
pub struct WeekView {
    pub total_workouts: u32,
    pub total_duration_minutes: i64,
    pub total_calories_burned: i64,
    pub by_type: Vec<TypeCountView>,
}

impl From<&WeeklyWorkoutSummary> for WeekView {
    fn from(summary: &WeeklyWorkoutSummary) -> Self {
        Self {
            total_workouts: summary.total_workouts,
            total_duration_minutes: summary.total_duration_minutes,
            total_calories_burned: summary.total_calories_burned,
            by_type: summary
                .workouts_by_type
                .iter()
                .map(|(kind, count)| TypeCountView {
                    emoji: kind.emoji(),
                    label: kind.label(),
                    count: *count,
                })
                .collect(),
        }
    }
}

// =============================================================================
// Templates
// =============================================================================

/// Workout history page template.
#[derive(Template, WebTemplate)]
#[template(path = "workouts/list.html")]
pub struct WorkoutsTemplate {
    pub page: PageMeta,
    pub week: Option<WeekView>,
    pub workouts: Vec<WorkoutView>,
}

/// New workout form template.
#[derive(Template, WebTemplate)]
#[template(path = "workouts/new.html")]
pub struct NewWorkoutTemplate {
    pub page: PageMeta,
    pub draft: WorkoutDraft,
    pub workout_types: Vec<KindOption>,
    pub can_submit: bool,
    pub error: Option<String>,
}

impl NewWorkoutTemplate {
    fn new(state: &AppState, draft: WorkoutDraft, error: Option<String>) -> Self {
        Self {
            page: PageMeta::new(state, "workouts"),
            workout_types: kind_options!(WorkoutType, draft.workout_type),
            can_submit: draft.can_submit(),
            draft,
            error,
        }
    }
}

/// Delete confirmation template.
#[derive(Template, WebTemplate)]
#[template(path = "workouts/delete.html")]
pub struct DeleteWorkoutTemplate {
    pub page: PageMeta,
    pub workout: WorkoutView,
}

// =============================================================================
// Draft Form Parsing
// =============================================================================

/// What the submit button of the new-workout form asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftAction {
    AddExercise,
    RemoveExercise(usize),
    Save,
}

impl DraftAction {
    fn parse(raw: &str) -> Self {
        match raw {
            "add_exercise" => Self::AddExercise,
            other => other
                .strip_prefix("remove_exercise:")
                .and_then(|index| index.parse().ok())
                .map_or(Self::Save, Self::RemoveExercise),
        }
    }
}

/// Rebuild the draft from posted fields.
///
/// Exercise fields are named `exercise-{index}-{field}`. Rows are re-added in
/// index order, so their order indices stay dense even if the browser sent a
/// gap.
fn parse_draft(
    fields: &[(String, String)],
) -> std::result::Result<(WorkoutDraft, DraftAction), DraftError> {
    let mut draft = WorkoutDraft::default();
    let mut rows: BTreeMap<usize, ExerciseDraft> = BTreeMap::new();
    let mut action = DraftAction::Save;

    for (key, value) in fields {
        match key.as_str() {
            "name" => draft.name.clone_from(value),
            "workout_type" => draft.workout_type = value.parse()?,
            "duration" => draft.duration.clone_from(value),
            "calories" => draft.calories.clone_from(value),
            "notes" => draft.notes.clone_from(value),
            "action" => action = DraftAction::parse(value),
            other => {
                let Some((index, field)) = other
                    .strip_prefix("exercise-")
                    .and_then(|rest| rest.split_once('-'))
                else {
                    continue;
                };
                let Ok(index) = index.parse::<usize>() else {
                    continue;
                };
                let row = rows.entry(index).or_default();
                match field {
                    "name" => row.name.clone_from(value),
                    "sets" => row.sets.clone_from(value),
                    "reps" => row.reps.clone_from(value),
                    "weight" => row.weight.clone_from(value),
                    _ => {}
                }
            }
        }
    }

    for posted in rows.into_values() {
        draft.add_exercise(posted);
    }

    Ok((draft, action))
}

// =============================================================================
// Handlers
// =============================================================================

/// Display this week's summary and the workout history.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Result<WorkoutsTemplate> {
    let gateway = state.gateway();
    let (summary, workouts) = tokio::join!(
        gateway.weekly_workout_summary(),
        gateway.list_workouts()
    );

    let week = summary
        .inspect_err(|e| tracing::warn!("Failed to fetch weekly summary: {e}"))
        .ok();
    let workouts = workouts?;

    Ok(WorkoutsTemplate {
        page: PageMeta::new(&state, "workouts"),
        week: week.as_ref().map(WeekView::from),
        workouts: workouts.iter().map(WorkoutView::from).collect(),
    })
}

/// Display an empty new-workout form.
#[instrument(skip(state))]
pub async fn new_page(State(state): State<AppState>) -> NewWorkoutTemplate {
    NewWorkoutTemplate::new(&state, WorkoutDraft::default(), None)
}

/// Apply a draft action, or save the workout with all its exercises.
#[instrument(skip(state, fields))]
pub async fn submit(
    State(state): State<AppState>,
    Form(fields): Form<Vec<(String, String)>>,
) -> Result<Response> {
    let (mut draft, action) = parse_draft(&fields)?;

    match action {
        DraftAction::AddExercise => {
            draft.add_exercise(ExerciseDraft::default());
            Ok(NewWorkoutTemplate::new(&state, draft, None).into_response())
        }
        DraftAction::RemoveExercise(index) => {
            draft.remove_exercise(index);
            Ok(NewWorkoutTemplate::new(&state, draft, None).into_response())
        }
        DraftAction::Save => match draft.to_request(today()) {
            Ok(request) => {
                add_breadcrumb("workouts", "Created workout");
                state.gateway().create_workout(&request).await?;
                Ok(Redirect::to("/workouts").into_response())
            }
            Err(e) => {
                let message = capitalize(&e.to_string());
                Ok((
                    StatusCode::UNPROCESSABLE_ENTITY,
                    NewWorkoutTemplate::new(&state, draft, Some(message)),
                )
                    .into_response())
            }
        },
    }
}

/// Display the delete confirmation for one workout.
#[instrument(skip(state), fields(workout_id = %id))]
pub async fn confirm_delete(
    State(state): State<AppState>,
    Path(id): Path<WorkoutId>,
) -> Result<DeleteWorkoutTemplate> {
    let workout = find_workout(&state, id).await?;

    Ok(DeleteWorkoutTemplate {
        page: PageMeta::new(&state, "workouts"),
        workout: WorkoutView::from(&workout),
    })
}

/// Delete a workout once confirmed. Without confirmation, go back to the
/// confirmation page.
#[instrument(skip(state, form), fields(workout_id = %id))]
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<WorkoutId>,
    Form(form): Form<ConfirmForm>,
) -> Result<Redirect> {
    if !form.is_confirmed() {
        return Ok(Redirect::to(&format!("/workouts/{id}/delete")));
    }

    add_breadcrumb("workouts", &format!("Deleted workout {id}"));
    state.gateway().delete_workout(id).await?;
    Ok(Redirect::to("/workouts"))
}

// =============================================================================
// Helpers
// =============================================================================

async fn find_workout(state: &AppState, id: WorkoutId) -> Result<Workout> {
    state
        .gateway()
        .list_workouts()
        .await?
        .into_iter()
        .find(|workout| workout.id == id)
        .ok_or_else(|| AppError::NotFound(format!("workout {id}")))
}

fn capitalize(message: &str) -> String {
    let mut chars = message.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}
