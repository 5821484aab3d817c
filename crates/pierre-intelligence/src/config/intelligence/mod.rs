// ABOUTME: Meal planner configuration orchestrating the pipeline and nutrition sub-configs
// ABOUTME: Provides defaults, environment overrides and unified validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Meal Planner Configuration Module
//!
//! Configuration is organized into domain-specific modules:
//! - `recipes` - Field normalization, similarity clustering and candidate filtering
//! - `selection` - Goal scoring profiles and the day-seeded selector
//! - `nutrition` - BMR, TDEE and daily macro targets

pub mod error;
pub mod nutrition;
pub mod recipes;
pub mod selection;

pub use error::ConfigError;
pub use nutrition::{
    ActivityFactorsConfig, BmiBand, BmrConfig, DailyLimitsConfig, GoalAdjustmentConfig,
    MacroRatioConfig, NutritionTargetsConfig,
};
pub use recipes::{ClusteringConfig, FilterConfig, NormalizerConfig};
pub use selection::{GoalScoringProfile, ScoringConfig, SeedDerivation, SelectionConfig};

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;

/// Main meal planner configuration container
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MealPlannerConfig {
    /// Raw field normalization
    pub normalizer: NormalizerConfig,
    /// Nutritional similarity clustering
    pub clustering: ClusteringConfig,
    /// Calorie tolerance filter
    pub filter: FilterConfig,
    /// Goal scoring coefficients
    pub scoring: ScoringConfig,
    /// Day-seeded meal selection
    pub selection: SelectionConfig,
    /// Daily nutrition targets
    pub nutrition: NutritionTargetsConfig,
}

impl MealPlannerConfig {
    /// Load configuration from defaults and environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate every sub-configuration
    ///
    /// # Errors
    ///
    /// Returns the first `ConfigError` found
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.normalizer.validate()?;
        self.clustering.validate()?;
        self.filter.validate()?;
        self.scoring.validate()?;
        self.selection.validate()?;
        self.nutrition.validate()
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply `MEAL_PLANNER_*` environment overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // Normalizer
        Self::apply_env_var(
            "MEAL_PLANNER_IMAGE_HOST",
            &mut self.normalizer.image_host,
        )?;
        Self::apply_env_var(
            "MEAL_PLANNER_MIN_IMAGE_URL_LEN",
            &mut self.normalizer.min_image_url_len,
        )?;
        Self::apply_env_var(
            "MEAL_PLANNER_MAX_LIST_ITEMS",
            &mut self.normalizer.max_list_items,
        )?;

        // Clustering
        Self::apply_env_var(
            "MEAL_PLANNER_CLUSTER_COUNT",
            &mut self.clustering.cluster_count,
        )?;
        Self::apply_env_var("MEAL_PLANNER_CLUSTER_SEED", &mut self.clustering.seed)?;
        Self::apply_env_var(
            "MEAL_PLANNER_CLUSTER_MAX_ITERATIONS",
            &mut self.clustering.max_iterations,
        )?;

        // Filter
        Self::apply_env_var(
            "MEAL_PLANNER_INITIAL_TOLERANCE",
            &mut self.filter.initial_tolerance,
        )?;
        Self::apply_env_var(
            "MEAL_PLANNER_WIDENED_TOLERANCE",
            &mut self.filter.widened_tolerance,
        )?;
        Self::apply_env_var(
            "MEAL_PLANNER_MIN_MEAL_CALORIES",
            &mut self.filter.min_meal_calories,
        )?;

        // Scoring
        Self::apply_env_var("MEAL_PLANNER_IMAGE_BONUS", &mut self.scoring.image_bonus)?;

        // Selection
        Self::apply_env_var("MEAL_PLANNER_MAX_WINDOW", &mut self.selection.max_window)?;
        Self::apply_env_var(
            "MEAL_PLANNER_RELAXATION_THRESHOLD",
            &mut self.selection.relaxation_threshold,
        )?;
        Self::apply_env_var(
            "MEAL_PLANNER_RECENT_EXCLUSION_WINDOW",
            &mut self.selection.recent_exclusion_window,
        )?;

        Ok(self)
    }
}
