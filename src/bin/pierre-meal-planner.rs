// ABOUTME: Command-line front end for daily meal plan recommendations
// ABOUTME: Prints the JSON payload on stdout and logs to stderr
//! Pierre meal planner CLI
//!
//! Usage:
//! ```bash
//! # Three meals for a moderately active 30 year old maintaining weight
//! cargo run --bin pierre-meal-planner -- recommend \
//!     --weight-kg 70 --height-cm 175 --age 30 --gender male
//!
//! # Next day's variation of a four meal weight loss plan
//! cargo run --bin pierre-meal-planner -- recommend \
//!     --weight-kg 92 --height-cm 180 --age 41 --gender female \
//!     --goal weight_loss --meal-count 4 --day-seed 1
//!
//! # Dataset health summary
//! cargo run --bin pierre-meal-planner -- inspect --dataset dataset/recipes.csv
//! ```

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use pierre_intelligence::recipes::cluster_records;
use pierre_meal_planner::config::PlannerEnvironment;
use pierre_meal_planner::dataset::{
    load_raw_records, CachedRecipeSource, CsvRecipeSource, RecipeSource, WorkingDataset,
};
use pierre_meal_planner::logging::LoggingConfig;
use pierre_meal_planner::services::{MealRecommendationService, RecommendationRequest};
use pierre_meal_planner::{
    ActivityLevel, FieldNormalizer, Gender, Goal, MealPlannerConfig, UserProfile,
};
use serde_json::json;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "pierre-meal-planner",
    version,
    about = "Goal-aware daily meal plans from a recipe dataset",
    long_about = "Computes daily nutrition targets for a profile and selects one recipe per meal slot. Output is JSON on stdout; logs go to stderr."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Recipe CSV path (overrides `MEAL_PLANNER_DATASET_PATH`)
    #[arg(long, global = true)]
    dataset: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Recommend meals for one day
    Recommend(RecommendArgs),
    /// Load and sanitize the dataset, then print row and cluster counts
    Inspect,
}

#[derive(Args)]
struct RecommendArgs {
    /// Body weight in kilograms
    #[arg(long)]
    weight_kg: f64,

    /// Height in centimeters
    #[arg(long)]
    height_cm: f64,

    /// Age in years
    #[arg(long)]
    age: u32,

    /// male or female
    #[arg(long)]
    gender: Gender,

    /// sedentary, light, moderate, `very_active` or `extra_active`
    #[arg(long, default_value = "moderate")]
    activity_level: ActivityLevel,

    /// `weight_loss`, `weight_gain`, `muscle_gain` or maintain
    #[arg(long, default_value = "maintain")]
    goal: Goal,

    /// Target weekly weight change in kg (0 derives the change from the goal)
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    weekly_change: f64,

    /// Meals per day (3 to 5)
    #[arg(long, default_value_t = 3)]
    meal_count: usize,

    /// Day seed; different seeds give different reproducible plans
    #[arg(long, default_value_t = 0)]
    day_seed: u64,

    /// Fill slots without a matching recipe with a template meal
    #[arg(long)]
    fill_missing: bool,

    /// Print compact JSON instead of pretty JSON
    #[arg(long)]
    compact: bool,
}

impl RecommendArgs {
    fn to_request(&self) -> RecommendationRequest {
        RecommendationRequest {
            profile: UserProfile {
                weight_kg: self.weight_kg,
                height_cm: self.height_cm,
                age: self.age,
                gender: self.gender,
                activity_level: self.activity_level,
                goal: self.goal,
                weekly_weight_change: self.weekly_change,
            },
            meal_count: self.meal_count,
            day_seed: self.day_seed,
            fill_missing_slots: self.fill_missing,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        "debug".clone_into(&mut logging.level);
    }
    logging.init()?;

    let mut environment = PlannerEnvironment::from_env().context("Invalid planner environment")?;
    if let Some(path) = cli.dataset {
        environment = environment.with_dataset_path(path);
    }
    let config = MealPlannerConfig::load().context("Invalid meal planner configuration")?;

    match cli.command {
        Command::Recommend(args) => recommend(&args, &environment, config),
        Command::Inspect => inspect(&environment, &config),
    }
}

fn recommend(
    args: &RecommendArgs,
    environment: &PlannerEnvironment,
    config: MealPlannerConfig,
) -> Result<()> {
    let csv_source = CsvRecipeSource::new(
        environment.dataset_path.clone(),
        environment.max_rows,
        FieldNormalizer::new(&config.normalizer),
    );
    let source: Arc<dyn RecipeSource> = if environment.dataset_cache {
        Arc::new(CachedRecipeSource::new(csv_source))
    } else {
        Arc::new(csv_source)
    };

    let service = MealRecommendationService::new(source, config);
    let recommendation = service.recommend(&args.to_request());
    if let Some(reason) = recommendation.reason() {
        info!(reason = reason.kind(), "Returning fallback payload");
    }

    let payload = recommendation.payload();
    let output = if args.compact {
        serde_json::to_string(payload)?
    } else {
        serde_json::to_string_pretty(payload)?
    };
    println!("{output}");
    Ok(())
}

fn inspect(environment: &PlannerEnvironment, config: &MealPlannerConfig) -> Result<()> {
    let raw = load_raw_records(&environment.dataset_path, environment.max_rows)
        .with_context(|| format!("Failed to load {}", environment.dataset_path.display()))?;
    let dataset = WorkingDataset::build(&raw, &FieldNormalizer::new(&config.normalizer));
    let clusters = cluster_records(&dataset.records, &config.clustering);

    let summary = json!({
        "dataset": environment.dataset_path.display().to_string(),
        "source_rows": dataset.source_rows,
        "clean_rows": dataset.len(),
        "dropped_rows": dataset.source_rows.saturating_sub(dataset.len()),
        "with_image": dataset.records.iter().filter(|record| record.has_image()).count(),
        "with_rating": dataset.records.iter().filter(|record| record.rating.is_some()).count(),
        "cluster_sizes": clusters.cluster_sizes(),
        "inertia": clusters.inertia,
    });
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
