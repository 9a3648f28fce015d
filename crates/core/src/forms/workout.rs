use chrono::NaiveDate;

use super::{
    DraftError, optional_text, parse_int_or_zero, parse_optional_float, parse_optional_int,
    required_name,
};
use crate::models::{NewExercise, NewWorkout};
use crate::types::WorkoutType;

/// One exercise row of a workout draft. Exists only client-side until the
/// parent workout is submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExerciseDraft {
    pub name: String,
    pub sets: String,
    pub reps: String,
    pub weight: String,
    pub order: i32,
}

impl ExerciseDraft {
    fn to_request(&self, index: usize) -> Result<NewExercise, DraftError> {
        let name =
            required_name(&self.name).map_err(|_| DraftError::MissingExerciseName { index })?;

        Ok(NewExercise {
            name,
            sets: parse_optional_int(&self.sets),
            reps: parse_optional_int(&self.reps),
            weight: parse_optional_float(&self.weight),
            duration_seconds: None,
            distance_meters: None,
            notes: None,
            order: self.order,
        })
    }
}

/// The new-workout form together with its exercise rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkoutDraft {
    pub name: String,
    pub workout_type: WorkoutType,
    pub duration: String,
    pub calories: String,
    pub notes: String,
    exercises: Vec<ExerciseDraft>,
}

impl WorkoutDraft {
    #[must_use]
    pub fn exercises(&self) -> &[ExerciseDraft] {
        &self.exercises
    }

    /// Mutable access to a row's fields. The order index is reassigned by
    /// the draft and must not be edited through this.
    pub fn exercise_mut(&mut self, index: usize) -> Option<&mut ExerciseDraft> {
        self.exercises.get_mut(index)
    }

    /// Append a row. Its order index is set to the current row count,
    /// whatever the row carried.
    pub fn add_exercise(&mut self, row: ExerciseDraft) {
        let order = i32::try_from(self.exercises.len()).unwrap_or(i32::MAX);
        self.exercises.push(ExerciseDraft { order, ..row });
    }

    /// Remove a row and renumber the remaining ones densely from zero.
    /// Returns the removed row, or `None` if `index` is out of range.
    pub fn remove_exercise(&mut self, index: usize) -> Option<ExerciseDraft> {
        if index >= self.exercises.len() {
            return None;
        }
        let removed = self.exercises.remove(index);
        for (order, row) in (0..).zip(self.exercises.iter_mut()) {
            row.order = order;
        }
        Some(removed)
    }

    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.name.trim().is_empty()
    }

    /// Convert into one atomic creation request carrying every exercise row.
    ///
    /// # Errors
    ///
    /// Returns [`DraftError::MissingName`] for a blank workout name and
    /// [`DraftError::MissingExerciseName`] for a row with a blank name.
    pub fn to_request(&self, workout_date: NaiveDate) -> Result<NewWorkout, DraftError> {
        let name = required_name(&self.name)?;
        let exercises = self
            .exercises
            .iter()
            .enumerate()
            .map(|(index, row)| row.to_request(index))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(NewWorkout {
            name,
            workout_type: self.workout_type,
            duration_minutes: parse_int_or_zero(&self.duration),
            calories_burned: parse_optional_int(&self.calories),
            notes: optional_text(&self.notes),
            workout_date,
            exercises,
        })
    }
}
