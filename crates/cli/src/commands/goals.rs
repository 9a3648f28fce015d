//! Daily goal commands.

use lifeguard_core::forms::GoalsDraft;
use lifeguard_core::models::UserGoals;
use lifeguard_webapp::GatewayClient;

use super::CommandError;

/// Goal values given on the command line. `None` keeps the current value.
#[derive(Debug, Default)]
pub struct GoalChanges {
    pub calories: Option<String>,
    pub protein: Option<String>,
    pub carbs: Option<String>,
    pub fat: Option<String>,
    pub water: Option<String>,
}

impl GoalChanges {
    fn apply(self, draft: &mut GoalsDraft) {
        let fields = [
            (self.calories, &mut draft.calories),
            (self.protein, &mut draft.protein),
            (self.carbs, &mut draft.carbs),
            (self.fat, &mut draft.fat),
            (self.water, &mut draft.water),
        ];
        for (change, field) in fields {
            if let Some(value) = change {
                *field = value;
            }
        }
    }
}

fn print_goals(goals: &UserGoals) {
    println!("Calories  {} kcal", goals.daily_calorie_goal);
    println!("Protein   {} g", goals.daily_protein_goal);
    println!("Carbs     {} g", goals.daily_carbs_goal);
    println!("Fat       {} g", goals.daily_fat_goal);
    println!("Water     {} glasses", goals.daily_water_goal);
}

/// Print the current goals.
///
/// # Errors
///
/// Returns `CommandError::Gateway` if the user cannot be read.
pub async fn show(gateway: &GatewayClient) -> Result<(), CommandError> {
    let user = gateway.current_user().await?;
    print_goals(&user.goals());
    Ok(())
}

/// Replace the goals wholesale, starting from the current ones.
///
/// # Errors
///
/// Returns `CommandError::Gateway` if the user cannot be read or the update
/// is rejected.
pub async fn set(gateway: &GatewayClient, changes: GoalChanges) -> Result<(), CommandError> {
    let user = gateway.current_user().await?;
    let mut draft = GoalsDraft::from(user.goals());
    changes.apply(&mut draft);

    let saved = gateway.update_goals(&draft.to_request()).await?;
    tracing::info!(calories = saved.daily_calorie_goal, "Goals updated");
    print_goals(&saved);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_changes_keep_unset_goals() {
        let mut draft = GoalsDraft::from(UserGoals::default());
        GoalChanges {
            calories: Some("2200".to_string()),
            water: Some("ten".to_string()),
            ..GoalChanges::default()
        }
        .apply(&mut draft);

        let goals = draft.to_request();
        assert_eq!(goals.daily_calorie_goal, 2200);
        assert_eq!(goals.daily_protein_goal, 150);
        assert_eq!(goals.daily_water_goal, 0);
    }
}
