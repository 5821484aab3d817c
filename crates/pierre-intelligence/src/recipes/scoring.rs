// ABOUTME: Goal scorer assigning a goal-dependent fitness score to candidate recipes
// ABOUTME: Linear combination of macros, protein density and an image bonus per goal profile
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::models::{AnnotatedRecord, CleanRecord};
use crate::config::intelligence::{GoalScoringProfile, ScoringConfig};
use crate::nutrition_calculator::Goal;

/// Score one record against a coefficient profile
#[must_use]
pub fn score_record(
    record: &CleanRecord,
    profile: &GoalScoringProfile,
    has_image: bool,
    image_bonus: f64,
) -> f64 {
    // Records in the working dataset always have positive calories
    let protein_ratio = if record.calories > 0.0 {
        record.protein_g / record.calories
    } else {
        0.0
    };
    let bonus = if has_image { image_bonus } else { 0.0 };

    record.protein_g * profile.protein_weight
        + record.carb_g * profile.carbs_weight
        + record.fat_g * profile.fat_weight
        + record.calories * profile.calories_weight
        + protein_ratio * profile.protein_density_weight
        + bonus
}

/// Assign `score` to every candidate for the given goal
pub fn score_candidates(
    candidates: &mut [AnnotatedRecord<'_>],
    goal: Goal,
    config: &ScoringConfig,
) {
    let profile = config.profile_for(goal);
    for candidate in candidates {
        candidate.score = score_record(
            candidate.record,
            profile,
            candidate.has_image,
            config.image_bonus,
        );
    }
}
