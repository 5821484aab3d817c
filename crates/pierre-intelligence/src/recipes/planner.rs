// ABOUTME: Meal plan orchestration over the working dataset
// ABOUTME: Runs grouping, candidate filtering, goal scoring and day-seeded selection in order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::candidate_filter::{filter_candidates, ToleranceTier};
use super::clustering::cluster_records;
use super::guidance::meal_guidance;
use super::models::{AnnotatedRecord, CleanRecord, MealSlot, MealType, SelectedMeal};
use super::scoring::score_candidates;
use super::selector::select_meals;
use crate::config::intelligence::MealPlannerConfig;
use crate::nutrition_calculator::Goal;
use pierre_core::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Smallest supported number of meals per day
pub const MIN_MEAL_COUNT: usize = 3;
/// Largest supported number of meals per day
pub const MAX_MEAL_COUNT: usize = 5;

/// Parameters of one day's plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealPlanRequest {
    /// Goal driving scoring
    pub goal: Goal,
    /// Number of meals (3 to 5)
    pub meal_count: usize,
    /// Day seed varying the selection reproducibly
    pub day_seed: u64,
    /// Fill slots the selector omitted with the template meal
    pub fill_missing_slots: bool,
}

impl MealPlanRequest {
    /// Meal slot types for the requested meal count
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if `meal_count` is outside 3..=5
    pub fn meal_types(&self) -> AppResult<&'static [MealType]> {
        MealType::for_meal_count(self.meal_count).ok_or_else(|| {
            AppError::invalid_input(format!(
                "Meal count must be between {MIN_MEAL_COUNT} and {MAX_MEAL_COUNT}, got {}",
                self.meal_count
            ))
        })
    }
}

/// Result of planning one day
#[derive(Debug, Clone, PartialEq)]
pub struct MealPlan {
    /// Selected meals in slot order; may be shorter than the slot list
    pub meals: Vec<SelectedMeal>,
    /// Slots with the calorie window that admitted their candidates
    pub slots: Vec<MealSlot>,
    /// Tier of the candidate filter, `None` for an empty working dataset
    pub tier: Option<ToleranceTier>,
    /// Number of candidates that reached the selector
    pub candidate_count: usize,
    /// Records per nutritional cluster
    pub cluster_sizes: Vec<usize>,
}

/// Plan one day of meals from the working dataset
///
/// Cluster labels annotate every record but do not influence filtering or
/// selection. An empty working dataset yields an empty plan.
///
/// # Errors
///
/// Returns `InvalidInput` if the meal count is unsupported
pub fn plan_meals(
    records: &[CleanRecord],
    daily_calories: f64,
    request: &MealPlanRequest,
    config: &MealPlannerConfig,
) -> AppResult<MealPlan> {
    let meal_types = request.meal_types()?;
    let target_per_meal = daily_calories / request.meal_count as f64;

    if records.is_empty() {
        info!(day_seed = request.day_seed, "Working dataset is empty, no meals planned");
        return Ok(MealPlan {
            meals: Vec::new(),
            slots: Vec::new(),
            tier: None,
            candidate_count: 0,
            cluster_sizes: Vec::new(),
        });
    }

    let clusters = cluster_records(records, &config.clustering);
    let annotated: Vec<AnnotatedRecord<'_>> = records
        .iter()
        .zip(&clusters.labels)
        .map(|(record, &cluster_id)| AnnotatedRecord::new(record, cluster_id))
        .collect();
    let cluster_sizes = clusters.cluster_sizes();
    debug!(?cluster_sizes, "Annotated working dataset with clusters");

    let mut candidates = filter_candidates(
        &annotated,
        target_per_meal,
        request.meal_count,
        &config.filter,
    );
    score_candidates(&mut candidates.records, request.goal, &config.scoring);

    let slots: Vec<MealSlot> = meal_types
        .iter()
        .enumerate()
        .map(|(index, &meal_type)| MealSlot {
            index,
            meal_type,
            min_calories: candidates.min_calories,
            max_calories: candidates.max_calories,
        })
        .collect();

    let candidate_count = candidates.len();
    let mut meals = select_meals(
        candidates.records,
        meal_types,
        request.day_seed,
        &config.selection,
    );
    for meal in &mut meals {
        meal_guidance(meal.meal_type, request.goal).annotate(meal);
    }

    if request.fill_missing_slots && meals.len() < slots.len() {
        meals = fill_missing(meals, &slots, target_per_meal, request);
    }

    info!(
        day_seed = request.day_seed,
        goal = %request.goal,
        tier = ?candidates.tier,
        candidates = candidate_count,
        meals = meals.len(),
        "Planned meals"
    );

    Ok(MealPlan {
        meals,
        slots,
        tier: Some(candidates.tier),
        candidate_count,
        cluster_sizes,
    })
}

/// Insert template meals for slots the selector left empty, keeping slot order
fn fill_missing(
    selected: Vec<SelectedMeal>,
    slots: &[MealSlot],
    target_per_meal: f64,
    request: &MealPlanRequest,
) -> Vec<SelectedMeal> {
    let mut selected = selected.into_iter().peekable();
    slots
        .iter()
        .map(|slot| {
            selected
                .next_if(|meal| meal.slot_index == slot.index)
                .unwrap_or_else(|| {
                    debug!(
                        slot_index = slot.index,
                        meal_type = %slot.meal_type,
                        "Filling slot with template meal"
                    );
                    meal_guidance(slot.meal_type, request.goal).template_meal(
                        target_per_meal,
                        slot.index,
                        request.day_seed,
                    )
                })
        })
        .collect()
}
