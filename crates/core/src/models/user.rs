//! The current user and their daily goals.

use serde::{Deserialize, Serialize};

use crate::types::UserId;

/// The user the gateway resolved from the platform init data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub telegram_id: i64,
    pub username: Option<String>,
    pub first_name: String,
    pub last_name: Option<String>,
    pub daily_calorie_goal: i32,
    pub daily_protein_goal: i32,
    pub daily_carbs_goal: i32,
    pub daily_fat_goal: i32,
    pub daily_water_goal: i32,
}

impl User {
    /// The user's current goals.
    #[must_use]
    pub const fn goals(&self) -> UserGoals {
        UserGoals {
            daily_calorie_goal: self.daily_calorie_goal,
            daily_protein_goal: self.daily_protein_goal,
            daily_carbs_goal: self.daily_carbs_goal,
            daily_fat_goal: self.daily_fat_goal,
            daily_water_goal: self.daily_water_goal,
        }
    }
}

/// Daily targets. Always replaced as a whole, never patched field by field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserGoals {
    pub daily_calorie_goal: i32,
    pub daily_protein_goal: i32,
    pub daily_carbs_goal: i32,
    pub daily_fat_goal: i32,
    /// Glasses of water (250 ml each).
    pub daily_water_goal: i32,
}

impl Default for UserGoals {
    fn default() -> Self {
        Self {
            daily_calorie_goal: 2000,
            daily_protein_goal: 150,
            daily_carbs_goal: 250,
            daily_fat_goal: 65,
            daily_water_goal: 8,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_goals_from_user() {
        let json = r#"{
            "id": 1,
            "telegram_id": 555,
            "username": "runner",
            "first_name": "Sam",
            "last_name": null,
            "daily_calorie_goal": 2200,
            "daily_protein_goal": 160,
            "daily_carbs_goal": 240,
            "daily_fat_goal": 70,
            "daily_water_goal": 10,
            "created_at": "2026-01-01T00:00:00",
            "updated_at": "2026-01-01T00:00:00"
        }"#;

        let user: User = serde_json::from_str(json).unwrap();
        let goals = user.goals();
        assert_eq!(goals.daily_calorie_goal, 2200);
        assert_eq!(goals.daily_water_goal, 10);
    }

    #[test]
    fn test_default_goals() {
        let goals = UserGoals::default();
        assert_eq!(goals.daily_calorie_goal, 2000);
        assert_eq!(goals.daily_protein_goal, 150);
        assert_eq!(goals.daily_carbs_goal, 250);
        assert_eq!(goals.daily_fat_goal, 65);
        assert_eq!(goals.daily_water_goal, 8);
    }
}
