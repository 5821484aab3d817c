// ABOUTME: Recommendation service boundary turning a user profile into a daily meal plan payload
// ABOUTME: Always returns a payload, either the computed plan or the documented fallback with a reason
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Meal Recommendation Service
//!
//! [`MealRecommendationService::recommend`] never fails. Invalid profiles,
//! unreadable datasets and datasets with no valid record produce
//! [`Recommendation::Degraded`], whose payload holds the documented default
//! targets, no meals and a generic error message. The reason stays on the
//! Rust side for logging and is never serialized.

use crate::dataset::{DatasetError, RecipeSource};
use crate::logging::AppLogger;
use pierre_core::constants::nutrition::energy::KCAL_PER_POUND;
use pierre_intelligence::recipes::models::round_to;
use pierre_intelligence::recipes::planner::{MAX_MEAL_COUNT, MIN_MEAL_COUNT};
use pierre_intelligence::recipes::{plan_meals, MealPlanRequest, SelectedMeal, ToleranceTier};
use pierre_intelligence::{
    calculate_daily_targets, BmiCategory, DailyTargets, Goal, MealPlannerConfig, UserProfile,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;
use thiserror::Error;
use tracing::{debug, error};

/// Message placed in every degraded payload
pub const GENERIC_ERROR_MESSAGE: &str =
    "Meal recommendations are temporarily unavailable; default nutrition targets returned";

const fn default_meal_count() -> usize {
    MIN_MEAL_COUNT
}

/// A recommendation request: the profile plus plan parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationRequest {
    /// Body metrics, activity and goal
    #[serde(flatten)]
    pub profile: UserProfile,
    /// Meals per day (3 to 5)
    #[serde(default = "default_meal_count")]
    pub meal_count: usize,
    /// Day seed varying the plan reproducibly
    #[serde(default)]
    pub day_seed: u64,
    /// Fill slots without a candidate with the template meal
    #[serde(default)]
    pub fill_missing_slots: bool,
}

impl RecommendationRequest {
    /// Request with three meals, day seed 0 and no slot filling
    #[must_use]
    pub const fn new(profile: UserProfile) -> Self {
        Self {
            profile,
            meal_count: MIN_MEAL_COUNT,
            day_seed: 0,
            fill_missing_slots: false,
        }
    }

    fn plan_request(&self) -> MealPlanRequest {
        MealPlanRequest {
            goal: self.profile.goal,
            meal_count: self.meal_count,
            day_seed: self.day_seed,
            fill_missing_slots: self.fill_missing_slots,
        }
    }
}

/// Aggregates over the selected meals
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MealAnalytics {
    /// Sum of meal calories
    pub total_meal_calories: i64,
    /// Sum of meal protein (g)
    pub total_meal_protein: i64,
    /// Sum of meal carbohydrates (g)
    pub total_meal_carbs: i64,
    /// Sum of meal fat (g)
    pub total_meal_fat: i64,
    /// Meal calories as a percentage of the daily target
    pub calorie_accuracy: f64,
    /// Meal protein as a percentage of the daily target
    pub protein_accuracy: f64,
    /// Mean meal rating
    pub avg_meal_rating: f64,
}

impl MealAnalytics {
    /// Summarize `meals` against `targets`; all zero for an empty list
    #[must_use]
    pub fn from_meals(meals: &[SelectedMeal], targets: &DailyTargets) -> Self {
        if meals.is_empty() {
            return Self::default();
        }

        let total_meal_calories = meals.iter().map(|meal| meal.calories).sum();
        let total_meal_protein = meals.iter().map(|meal| meal.protein).sum();
        let rating_sum: f64 = meals.iter().map(|meal| meal.rating).sum();

        Self {
            total_meal_calories,
            total_meal_protein,
            total_meal_carbs: meals.iter().map(|meal| meal.carbs).sum(),
            total_meal_fat: meals.iter().map(|meal| meal.fat).sum(),
            calorie_accuracy: percentage_of(total_meal_calories, targets.daily_calories),
            protein_accuracy: percentage_of(total_meal_protein, targets.protein),
            avg_meal_rating: round_to(rating_sum / meals.len() as f64, 1),
        }
    }
}

fn percentage_of(actual: i64, target: i64) -> f64 {
    if target <= 0 {
        return 0.0;
    }
    round_to(actual as f64 / target as f64 * 100.0, 1)
}

/// Goal-oriented summary of the targets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalInsights {
    /// Requested goal
    pub goal: Goal,
    /// BMI classification
    pub bmi_category: BmiCategory,
    /// Daily target minus TDEE (negative for a deficit)
    pub daily_deficit_surplus: i64,
    /// Expected weekly change in pounds at this energy balance
    pub weekly_weight_change_estimate: f64,
}

impl GoalInsights {
    /// Derive insights from computed targets
    #[must_use]
    pub fn new(goal: Goal, targets: &DailyTargets) -> Self {
        let balance = targets.daily_calories - targets.tdee;
        Self {
            goal,
            bmi_category: BmiCategory::from_bmi(targets.bmi),
            daily_deficit_surplus: balance,
            weekly_weight_change_estimate: round_to(balance as f64 * 7.0 / KCAL_PER_POUND, 2),
        }
    }
}

/// Payload returned to the caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealPlanResponse {
    /// Daily nutrition targets
    #[serde(flatten)]
    pub targets: DailyTargets,
    /// Selected meals in slot order
    pub meals: Vec<SelectedMeal>,
    /// Aggregates over `meals`
    pub meal_analytics: MealAnalytics,
    /// Goal summary, absent from degraded payloads
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal_insights: Option<GoalInsights>,
    /// Calorie band tier that admitted the candidates
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub candidate_tier: Option<ToleranceTier>,
    /// Generic failure message, present only on degraded payloads
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl MealPlanResponse {
    /// The documented default payload: fallback targets and no meals
    #[must_use]
    pub fn fallback() -> Self {
        Self {
            targets: DailyTargets::fallback(),
            meals: Vec::new(),
            meal_analytics: MealAnalytics::default(),
            goal_insights: None,
            candidate_tier: None,
            error: Some(GENERIC_ERROR_MESSAGE.to_owned()),
        }
    }
}

/// Why a request fell back to the default payload
#[derive(Debug, Error)]
pub enum DegradationReason {
    /// Profile or plan parameters failed validation
    #[error("invalid profile: {0}")]
    InvalidProfile(String),

    /// The dataset could not be loaded
    #[error("dataset unavailable: {0}")]
    DatasetUnavailable(#[from] DatasetError),

    /// No row survived sanitization
    #[error("working dataset is empty after sanitization")]
    EmptyWorkingDataset,
}

impl DegradationReason {
    /// Stable identifier for structured logs
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::InvalidProfile(_) => "invalid_profile",
            Self::DatasetUnavailable(_) => "dataset_unavailable",
            Self::EmptyWorkingDataset => "empty_working_dataset",
        }
    }
}

/// Outcome of a recommendation request; a payload is always present
#[derive(Debug)]
pub enum Recommendation {
    /// Plan computed from the dataset
    Ok(MealPlanResponse),
    /// Default payload returned after a failure
    Degraded {
        /// Fallback payload
        payload: MealPlanResponse,
        /// Cause, for logging only
        reason: DegradationReason,
    },
}

impl Recommendation {
    /// Payload to return to the caller
    #[must_use]
    pub const fn payload(&self) -> &MealPlanResponse {
        match self {
            Self::Ok(payload) | Self::Degraded { payload, .. } => payload,
        }
    }

    /// Take ownership of the payload
    #[must_use]
    pub fn into_payload(self) -> MealPlanResponse {
        match self {
            Self::Ok(payload) | Self::Degraded { payload, .. } => payload,
        }
    }

    /// Degradation cause, if any
    #[must_use]
    pub const fn reason(&self) -> Option<&DegradationReason> {
        match self {
            Self::Ok(_) => None,
            Self::Degraded { reason, .. } => Some(reason),
        }
    }

    /// Whether the fallback payload was returned
    #[must_use]
    pub const fn is_degraded(&self) -> bool {
        matches!(self, Self::Degraded { .. })
    }
}

/// Computes daily meal plans against a recipe source
#[derive(Clone)]
pub struct MealRecommendationService {
    source: Arc<dyn RecipeSource>,
    config: MealPlannerConfig,
}

impl MealRecommendationService {
    /// Create a service over `source` with the given configuration
    #[must_use]
    pub fn new(source: Arc<dyn RecipeSource>, config: MealPlannerConfig) -> Self {
        Self { source, config }
    }

    /// Algorithm configuration in use
    #[must_use]
    pub const fn config(&self) -> &MealPlannerConfig {
        &self.config
    }

    /// Produce the day's meal plan, degrading to the default payload on failure
    #[must_use]
    pub fn recommend(&self, request: &RecommendationRequest) -> Recommendation {
        let started = Instant::now();
        match self.try_recommend(request) {
            Ok(payload) => {
                AppLogger::log_recommendation(
                    request.profile.goal.as_str(),
                    request.day_seed,
                    payload.meals.len(),
                    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
                );
                Recommendation::Ok(payload)
            }
            Err(reason) => {
                match &reason {
                    DegradationReason::DatasetUnavailable(e) => {
                        error!(reason = reason.kind(), "Dataset load failed: {e}");
                    }
                    DegradationReason::InvalidProfile(_)
                    | DegradationReason::EmptyWorkingDataset => {
                        AppLogger::log_degradation(reason.kind(), &reason.to_string());
                    }
                }
                Recommendation::Degraded {
                    payload: MealPlanResponse::fallback(),
                    reason,
                }
            }
        }
    }

    fn try_recommend(
        &self,
        request: &RecommendationRequest,
    ) -> Result<MealPlanResponse, DegradationReason> {
        if !(MIN_MEAL_COUNT..=MAX_MEAL_COUNT).contains(&request.meal_count) {
            return Err(DegradationReason::InvalidProfile(format!(
                "meal count must be between {MIN_MEAL_COUNT} and {MAX_MEAL_COUNT}, got {}",
                request.meal_count
            )));
        }
        let targets = calculate_daily_targets(&request.profile, &self.config.nutrition)
            .map_err(|e| DegradationReason::InvalidProfile(e.message))?;
        debug!(
            daily_calories = targets.daily_calories,
            tdee = targets.tdee,
            "Computed daily targets"
        );

        let dataset = self.source.working_dataset()?;
        if dataset.is_empty() {
            return Err(DegradationReason::EmptyWorkingDataset);
        }

        let plan = plan_meals(
            &dataset.records,
            targets.daily_calories as f64,
            &request.plan_request(),
            &self.config,
        )
        .map_err(|e| DegradationReason::InvalidProfile(e.message))?;

        Ok(MealPlanResponse {
            meal_analytics: MealAnalytics::from_meals(&plan.meals, &targets),
            goal_insights: Some(GoalInsights::new(request.profile.goal, &targets)),
            candidate_tier: plan.tier,
            meals: plan.meals,
            targets,
            error: None,
        })
    }
}
