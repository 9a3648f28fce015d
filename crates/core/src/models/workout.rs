//! Workout and exercise records.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::{ExerciseId, WorkoutId, WorkoutType};

/// A logged workout session with its exercises.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    pub id: WorkoutId,
    pub name: String,
    pub workout_type: WorkoutType,
    pub workout_date: NaiveDate,
    pub duration_minutes: i32,
    pub calories_burned: Option<i32>,
    pub notes: Option<String>,
    /// Exercises in their recorded order.
    #[serde(default)]
    pub exercises: Vec<Exercise>,
}

/// One exercise inside a workout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    pub id: ExerciseId,
    pub workout_id: WorkoutId,
    pub name: String,
    pub sets: Option<i32>,
    pub reps: Option<i32>,
    pub weight: Option<f64>,
    pub duration_seconds: Option<i32>,
    pub distance_meters: Option<f64>,
    pub notes: Option<String>,
    #[serde(default)]
    pub order: i32,
}

/// Request body for creating a workout together with all of its exercises.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewWorkout {
    pub name: String,
    pub workout_type: WorkoutType,
    pub duration_minutes: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calories_burned: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub workout_date: NaiveDate,
    #[serde(default)]
    pub exercises: Vec<NewExercise>,
}

/// Exercise row submitted as part of a [`NewWorkout`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewExercise {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sets: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reps: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_seconds: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_meters: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub order: i32,
}

/// Pre-aggregated totals for the current week, computed by the gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyWorkoutSummary {
    pub total_workouts: u32,
    pub total_duration_minutes: i64,
    pub total_calories_burned: i64,
    #[serde(default)]
    pub workouts_by_type: BTreeMap<WorkoutType, u32>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_workout_deserializes_gateway_payload() {
        let json = r#"{
            "id": 3,
            "user_id": 1,
            "name": "Leg Day",
            "workout_type": "strength",
            "workout_date": "2026-10-18",
            "duration_minutes": 45,
            "calories_burned": null,
            "notes": null,
            "created_at": "2026-10-18T08:00:00",
            "updated_at": "2026-10-18T08:00:00",
            "exercises": [{
                "id": 9,
                "workout_id": 3,
                "name": "Squat",
                "sets": 5,
                "reps": 5,
                "weight": 100.0,
                "duration_seconds": null,
                "distance_meters": null,
                "notes": null,
                "order": 0,
                "created_at": "2026-10-18T08:00:00"
            }]
        }"#;

        let workout: Workout = serde_json::from_str(json).unwrap();
        assert_eq!(workout.id, WorkoutId::new(3));
        assert_eq!(workout.workout_type, WorkoutType::Strength);
        assert_eq!(workout.calories_burned, None);
        assert_eq!(workout.exercises.len(), 1);
        assert_eq!(workout.exercises[0].weight, Some(100.0));
    }

    #[test]
    fn test_weekly_summary_type_keys() {
        let json = r#"{
            "total_workouts": 3,
            "total_duration_minutes": 120,
            "total_calories_burned": 900,
            "workouts_by_type": {"cardio": 2, "hiit": 1}
        }"#;

        let summary: WeeklyWorkoutSummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.workouts_by_type.get(&WorkoutType::Cardio), Some(&2));
        assert_eq!(summary.workouts_by_type.get(&WorkoutType::Hiit), Some(&1));
    }
}
