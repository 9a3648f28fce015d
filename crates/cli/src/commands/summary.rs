//! Daily summary command.

use chrono::NaiveDate;
use lifeguard_core::progress::{ProgressBar, nutrition_bars};
use lifeguard_webapp::GatewayClient;

use super::{CommandError, format_day, format_grams};

/// Print nutrition progress for `date` and this week's workout totals.
///
/// A failed workout summary is reported but does not fail the command.
///
/// # Errors
///
/// Returns `CommandError::Gateway` if the nutrition summary cannot be read.
pub async fn show(gateway: &GatewayClient, date: NaiveDate) -> Result<(), CommandError> {
    let (nutrition, week) = tokio::join!(
        gateway.daily_nutrition_summary(date),
        gateway.weekly_workout_summary()
    );
    let nutrition = nutrition?;

    println!("Nutrition for {}", format_day(date));
    for bar in nutrition_bars(&nutrition) {
        println!("  {}", bar_line(&bar));
    }
    println!("  {} meals logged", nutrition.meals_count);

    match week {
        Ok(week) => {
            println!();
            println!("This week");
            println!(
                "  {} workouts · {} min · {} kcal",
                week.total_workouts, week.total_duration_minutes, week.total_calories_burned
            );
            for (kind, count) in &week.workouts_by_type {
                println!("  {} {}: {count}", kind.emoji(), kind.label());
            }
        }
        Err(e) => tracing::warn!("Failed to fetch weekly summary: {e}"),
    }

    Ok(())
}

/// "Protein  80.5 / 150 g  (53.7%)"
fn bar_line(bar: &ProgressBar) -> String {
    let mark = if bar.is_complete() { " ✓" } else { "" };
    format!(
        "{:<9}{} / {} {}  ({:.1}%){mark}",
        bar.label,
        format_grams(bar.current),
        bar.goal,
        bar.unit,
        bar.percent()
    )
}
