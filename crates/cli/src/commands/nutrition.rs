//! Meal and water commands.

use chrono::NaiveDate;
use lifeguard_core::MealId;
use lifeguard_core::forms::MealDraft;
use lifeguard_core::models::Meal;
use lifeguard_core::view::group_meals_by_type;
use lifeguard_webapp::GatewayClient;

use super::{CommandError, date_or_today, format_day, format_grams};

/// Print the meals of `date` grouped by meal type.
///
/// # Errors
///
/// Returns `CommandError::Gateway` if the meals cannot be read.
pub async fn list(gateway: &GatewayClient, date: NaiveDate) -> Result<(), CommandError> {
    let meals = gateway.list_meals(date).await?;

    println!("Meals for {}", format_day(date));
    if meals.is_empty() {
        println!("  No meals logged.");
        return Ok(());
    }

    for (meal_type, meals) in group_meals_by_type(&meals) {
        println!("{} {}", meal_type.emoji(), meal_type.label());
        for meal in meals {
            println!("  {}", meal_line(meal));
        }
    }
    Ok(())
}

fn meal_line(meal: &Meal) -> String {
    let mut line = format!("#{} {}", meal.id, meal.name);
    if let Some(calories) = meal.calories {
        line.push_str(&format!(" · {calories} kcal"));
    }
    for (letter, grams) in [("P", meal.protein), ("C", meal.carbs), ("F", meal.fat)] {
        if let Some(grams) = grams {
            line.push_str(&format!(" · {letter} {}g", format_grams(grams)));
        }
    }
    line
}

/// Create a meal dated today.
///
/// # Errors
///
/// Returns `CommandError::Draft` for a blank name and `CommandError::Gateway`
/// if the gateway rejects the request.
pub async fn add(gateway: &GatewayClient, draft: &MealDraft) -> Result<(), CommandError> {
    let request = draft.to_request(date_or_today(None))?;
    let meal = gateway.create_meal(&request).await?;
    tracing::info!(meal_id = %meal.id, "Meal created");
    println!("Logged {}", meal_line(&meal));
    Ok(())
}

/// Delete a meal. Requires confirmation.
///
/// # Errors
///
/// Returns `CommandError::ConfirmationRequired` without `--yes`.
pub async fn delete(gateway: &GatewayClient, id: i64, confirmed: bool) -> Result<(), CommandError> {
    let id = MealId::new(id);
    if !confirmed {
        return Err(CommandError::ConfirmationRequired(format!("meal {id}")));
    }

    gateway.delete_meal(id).await?;
    println!("Deleted meal {id}");
    Ok(())
}

/// Log glasses of water for today and print the new water progress.
///
/// # Errors
///
/// Returns `CommandError::Gateway` if the log is rejected.
pub async fn log_water(gateway: &GatewayClient, glasses: i32) -> Result<(), CommandError> {
    let today = date_or_today(None);
    gateway.log_water(glasses, today).await?;

    match gateway.daily_nutrition_summary(today).await {
        Ok(summary) => println!(
            "Water: {} / {} glasses",
            summary.water_glasses, summary.water_goal
        ),
        Err(e) => {
            tracing::warn!("Failed to fetch nutrition summary: {e}");
            println!("Logged {glasses} glasses of water");
        }
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use lifeguard_core::MealType;

    use super::*;

    #[test]
    fn test_meal_line_lists_recorded_values() {
        let meal = Meal {
            id: MealId::new(4),
            name: "Chicken Salad".to_string(),
            meal_type: MealType::Lunch,
            meal_date: NaiveDate::from_ymd_opt(2026, 10, 18).unwrap(),
            calories: Some(520),
            protein: Some(42.0),
            carbs: None,
            fat: Some(18.5),
            fiber: None,
            serving_size: None,
            notes: None,
        };

        assert_eq!(
            meal_line(&meal),
            "#4 Chicken Salad · 520 kcal · P 42g · F 18.5g"
        );
    }
}
