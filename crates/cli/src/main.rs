//! Lifeguard CLI
//!
//! Command-line client for the Lifeguard gateway. Uses the same gateway
//! client and drafts as the mini-app, so requests are built identically.
//!
//! # Usage
//!
//! ```bash
//! # Today's nutrition progress and this week's workouts
//! lifeguard summary
//!
//! # Log a workout with exercises (name:sets:reps:weight)
//! lifeguard workouts add --name "Leg Day" --type strength --duration 45 \
//!     --exercise "Squat:5:5:100" --exercise "Lunge:3:12"
//!
//! # Log a meal and a glass of water
//! lifeguard meals add --name Oatmeal --type breakfast --calories 400
//! lifeguard water
//!
//! # Shopping list
//! lifeguard shopping add Milk --category dairy --quantity "2 L"
//! lifeguard shopping toggle 7
//!
//! # Daily goals
//! lifeguard goals set --calories 2200 --protein 160
//! ```
//!
//! # Environment Variables
//!
//! - `LIFEGUARD_GATEWAY_URL` - Gateway base URL (required)
//! - `LIFEGUARD_INIT_DATA` - Telegram init data forwarded to the gateway

#![cfg_attr(not(test), forbid(unsafe_code))]
#![allow(clippy::print_stdout)]

mod commands;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use commands::CommandError;

#[derive(Parser)]
#[command(name = "lifeguard")]
#[command(about = "Lifeguard fitness and nutrition CLI")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show nutrition progress for a day and this week's workouts
    Summary {
        /// Day to summarize (YYYY-MM-DD, default: today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Workout history
    Workouts {
        #[command(subcommand)]
        action: WorkoutAction,
    },

    /// Meals for a day
    Meals {
        #[command(subcommand)]
        action: MealAction,
    },

    /// Log water for today
    Water {
        /// Number of glasses
        #[arg(long, default_value_t = 1)]
        glasses: i32,
    },

    /// Shopping list
    Shopping {
        #[command(subcommand)]
        action: ShoppingAction,
    },

    /// Daily nutrition goals
    Goals {
        #[command(subcommand)]
        action: GoalsAction,
    },
}

#[derive(Subcommand)]
enum WorkoutAction {
    /// List workouts, newest first
    List,

    /// Log a workout for today
    Add {
        #[arg(long)]
        name: String,

        /// strength, cardio, flexibility, sports, hiit or other
        #[arg(long = "type", default_value = "strength")]
        workout_type: String,

        /// Duration in minutes
        #[arg(long, default_value = "")]
        duration: String,

        #[arg(long, default_value = "")]
        calories: String,

        #[arg(long, default_value = "")]
        notes: String,

        /// Exercise as name:sets:reps:weight (trailing parts optional)
        #[arg(long = "exercise")]
        exercises: Vec<String>,
    },

    /// Delete a workout
    Delete {
        id: i64,

        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum MealAction {
    /// List meals grouped by type
    List {
        /// Day to list (YYYY-MM-DD, default: today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Log a meal for today
    Add {
        #[arg(long)]
        name: String,

        /// breakfast, lunch, dinner or snack
        #[arg(long = "type", default_value = "lunch")]
        meal_type: String,

        #[arg(long, default_value = "")]
        calories: String,

        /// Protein in grams
        #[arg(long, default_value = "")]
        protein: String,

        /// Carbohydrates in grams
        #[arg(long, default_value = "")]
        carbs: String,

        /// Fat in grams
        #[arg(long, default_value = "")]
        fat: String,

        /// Fiber in grams
        #[arg(long, default_value = "")]
        fiber: String,

        #[arg(long, default_value = "")]
        serving_size: String,

        #[arg(long, default_value = "")]
        notes: String,
    },

    /// Delete a meal
    Delete {
        id: i64,

        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum ShoppingAction {
    /// Show pending items by category, then purchased items
    List,

    /// Add an item
    Add {
        name: String,

        #[arg(long, default_value = "other")]
        category: String,

        #[arg(long, default_value = "")]
        quantity: String,

        #[arg(long, default_value = "")]
        notes: String,
    },

    /// Toggle an item between pending and purchased
    Toggle { id: i64 },

    /// Delete an item
    Delete { id: i64 },

    /// Remove every purchased item
    Clear,
}

#[derive(Subcommand)]
enum GoalsAction {
    /// Show the current goals
    Show,

    /// Replace the goals; omitted values keep their current setting
    Set {
        #[arg(long)]
        calories: Option<String>,

        /// Protein in grams
        #[arg(long)]
        protein: Option<String>,

        /// Carbohydrates in grams
        #[arg(long)]
        carbs: Option<String>,

        /// Fat in grams
        #[arg(long)]
        fat: Option<String>,

        /// Glasses of water
        #[arg(long)]
        water: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lifeguard=warn,lifeguard_webapp=warn".into()),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), CommandError> {
    let gateway = commands::connect()?;

    match cli.command {
        Commands::Summary { date } => {
            commands::summary::show(&gateway, commands::date_or_today(date)).await?;
        }
        Commands::Workouts { action } => match action {
            WorkoutAction::List => commands::workouts::list(&gateway).await?,
            WorkoutAction::Add {
                name,
                workout_type,
                duration,
                calories,
                notes,
                exercises,
            } => {
                let draft = commands::workouts::draft(
                    name,
                    &workout_type,
                    duration,
                    calories,
                    notes,
                    &exercises,
                )?;
                commands::workouts::add(&gateway, &draft).await?;
            }
            WorkoutAction::Delete { id, yes } => {
                commands::workouts::delete(&gateway, id, yes).await?;
            }
        },
        Commands::Meals { action } => match action {
            MealAction::List { date } => {
                commands::nutrition::list(&gateway, commands::date_or_today(date)).await?;
            }
            MealAction::Add {
                name,
                meal_type,
                calories,
                protein,
                carbs,
                fat,
                fiber,
                serving_size,
                notes,
            } => {
                let draft = lifeguard_core::forms::MealDraft {
                    name,
                    meal_type: meal_type.parse().map_err(lifeguard_core::forms::DraftError::from)?,
                    calories,
                    protein,
                    carbs,
                    fat,
                    fiber,
                    serving_size,
                    notes,
                };
                commands::nutrition::add(&gateway, &draft).await?;
            }
            MealAction::Delete { id, yes } => {
                commands::nutrition::delete(&gateway, id, yes).await?;
            }
        },
        Commands::Water { glasses } => commands::nutrition::log_water(&gateway, glasses).await?,
        Commands::Shopping { action } => match action {
            ShoppingAction::List => commands::shopping::list(&gateway).await?,
            ShoppingAction::Add {
                name,
                category,
                quantity,
                notes,
            } => {
                let draft = lifeguard_core::forms::ShoppingItemDraft {
                    name,
                    quantity,
                    category: category.parse().map_err(lifeguard_core::forms::DraftError::from)?,
                    notes,
                };
                commands::shopping::add(&gateway, &draft).await?;
            }
            ShoppingAction::Toggle { id } => commands::shopping::toggle(&gateway, id).await?,
            ShoppingAction::Delete { id } => commands::shopping::delete(&gateway, id).await?,
            ShoppingAction::Clear => commands::shopping::clear(&gateway).await?,
        },
        Commands::Goals { action } => match action {
            GoalsAction::Show => commands::goals::show(&gateway).await?,
            GoalsAction::Set {
                calories,
                protein,
                carbs,
                fat,
                water,
            } => {
                let changes = commands::goals::GoalChanges {
                    calories,
                    protein,
                    carbs,
                    fat,
                    water,
                };
                commands::goals::set(&gateway, changes).await?;
            }
        },
    }

    Ok(())
}
