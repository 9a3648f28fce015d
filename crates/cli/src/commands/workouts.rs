//! Workout commands.

use lifeguard_core::WorkoutId;
use lifeguard_core::forms::{DraftError, ExerciseDraft, WorkoutDraft};
use lifeguard_core::models::Workout;
use lifeguard_webapp::GatewayClient;

use super::{CommandError, date_or_today, format_day};

/// Build a workout draft from command arguments.
///
/// Each exercise is `name:sets:reps:weight`; trailing parts may be left off.
///
/// # Errors
///
/// Returns `CommandError::Draft` if the workout type is unknown.
pub fn draft(
    name: String,
    workout_type: &str,
    duration: String,
    calories: String,
    notes: String,
    exercises: &[String],
) -> Result<WorkoutDraft, CommandError> {
    let workout_type = workout_type.parse().map_err(DraftError::from)?;
    let mut draft = WorkoutDraft::default();
    draft.name = name;
    draft.workout_type = workout_type;
    draft.duration = duration;
    draft.calories = calories;
    draft.notes = notes;

    for arg in exercises {
        let mut parts = arg.splitn(4, ':').map(str::to_owned);
        draft.add_exercise(ExerciseDraft {
            name: parts.next().unwrap_or_default(),
            sets: parts.next().unwrap_or_default(),
            reps: parts.next().unwrap_or_default(),
            weight: parts.next().unwrap_or_default(),
            order: 0,
        });
    }

    Ok(draft)
}

/// Print every workout, newest first.
///
/// # Errors
///
/// Returns `CommandError::Gateway` if the list cannot be read.
pub async fn list(gateway: &GatewayClient) -> Result<(), CommandError> {
    let workouts = gateway.list_workouts().await?;

    if workouts.is_empty() {
        println!("No workouts yet.");
        return Ok(());
    }

    for workout in &workouts {
        println!("{}", workout_line(workout));
    }
    Ok(())
}

fn workout_line(workout: &Workout) -> String {
    let mut line = format!(
        "#{} {} {} ({}) · {} · {} min",
        workout.id,
        workout.workout_type.emoji(),
        workout.name,
        workout.workout_type.label(),
        format_day(workout.workout_date),
        workout.duration_minutes
    );
    if let Some(calories) = workout.calories_burned {
        line.push_str(&format!(" · {calories} kcal"));
    }
    if !workout.exercises.is_empty() {
        line.push_str(&format!(" · {} exercises", workout.exercises.len()));
    }
    line
}

/// Create a workout dated today.
///
/// # Errors
///
/// Returns `CommandError::Draft` for a blank workout or exercise name, and
/// `CommandError::Gateway` if the gateway rejects the request.
pub async fn add(gateway: &GatewayClient, draft: &WorkoutDraft) -> Result<(), CommandError> {
    let request = draft.to_request(date_or_today(None))?;
    let workout = gateway.create_workout(&request).await?;
    tracing::info!(workout_id = %workout.id, "Workout created");
    println!("Logged {}", workout_line(&workout));
    Ok(())
}

/// Delete a workout. Requires confirmation.
///
/// # Errors
///
/// Returns `CommandError::ConfirmationRequired` without `--yes`.
pub async fn delete(gateway: &GatewayClient, id: i64, confirmed: bool) -> Result<(), CommandError> {
    let id = WorkoutId::new(id);
    if !confirmed {
        return Err(CommandError::ConfirmationRequired(format!("workout {id}")));
    }

    gateway.delete_workout(id).await?;
    println!("Deleted workout {id}");
    Ok(())
}
