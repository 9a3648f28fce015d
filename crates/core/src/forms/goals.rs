use super::parse_int_or_zero;
use crate::models::UserGoals;

/// The goals form on the settings page. Submitted wholesale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoalsDraft {
    pub calories: String,
    pub protein: String,
    pub carbs: String,
    pub fat: String,
    pub water: String,
}

impl GoalsDraft {
    /// Every field parsed as an integer; anything unparseable becomes zero.
    #[must_use]
    pub fn to_request(&self) -> UserGoals {
        UserGoals {
            daily_calorie_goal: parse_int_or_zero(&self.calories),
            daily_protein_goal: parse_int_or_zero(&self.protein),
            daily_carbs_goal: parse_int_or_zero(&self.carbs),
            daily_fat_goal: parse_int_or_zero(&self.fat),
            daily_water_goal: parse_int_or_zero(&self.water),
        }
    }
}

impl From<UserGoals> for GoalsDraft {
    fn from(goals: UserGoals) -> Self {
        Self {
            calories: goals.daily_calorie_goal.to_string(),
            protein: goals.daily_protein_goal.to_string(),
            carbs: goals.daily_carbs_goal.to_string(),
            fat: goals.daily_fat_goal.to_string(),
            water: goals.daily_water_goal.to_string(),
        }
    }
}

impl Default for GoalsDraft {
    fn default() -> Self {
        UserGoals::default().into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_draft_prefills_defaults() {
        let draft = GoalsDraft::default();
        assert_eq!(draft.calories, "2000");
        assert_eq!(draft.to_request(), UserGoals::default());
    }

    #[test]
    fn test_unparseable_fields_become_zero() {
        let draft = GoalsDraft {
            calories: "2200".to_string(),
            protein: String::new(),
            carbs: "lots".to_string(),
            fat: "70".to_string(),
            water: "10".to_string(),
        };

        let goals = draft.to_request();
        assert_eq!(goals.daily_calorie_goal, 2200);
        assert_eq!(goals.daily_protein_goal, 0);
        assert_eq!(goals.daily_carbs_goal, 0);
        assert_eq!(goals.daily_fat_goal, 70);
        assert_eq!(goals.daily_water_goal, 10);
    }
}
