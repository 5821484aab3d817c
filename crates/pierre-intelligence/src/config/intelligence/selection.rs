// ABOUTME: Goal scoring coefficients and day-seeded selection parameters
// ABOUTME: Keeps every tuning constant of the scorer and selector out of the algorithms
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Scoring and Selection Configuration
//!
//! The goal profiles are a design choice rather than a derived statistic:
//! weight loss favors protein and protein density, muscle gain favors protein
//! and carbohydrates, everything else uses balanced macros.

use super::error::ConfigError;
use crate::nutrition_calculator::Goal;
use serde::{Deserialize, Serialize};

/// Linear coefficients applied to one candidate recipe
///
/// `score = protein*protein_weight + carbs*carbs_weight + fat*fat_weight
///        + calories*calories_weight + (protein/calories)*protein_density_weight
///        + image_bonus (when the recipe has a validated image)`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GoalScoringProfile {
    /// Weight of protein grams
    pub protein_weight: f64,
    /// Weight of carbohydrate grams
    pub carbs_weight: f64,
    /// Weight of fat grams
    pub fat_weight: f64,
    /// Weight of calories (negative penalizes energy-dense recipes)
    pub calories_weight: f64,
    /// Weight of the protein-per-calorie ratio
    pub protein_density_weight: f64,
}

/// Scoring profiles per goal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Weight loss: protein, protein density, light calorie penalty
    pub weight_loss: GoalScoringProfile,
    /// Muscle gain: protein and carbohydrates, light calorie reward
    pub muscle_gain: GoalScoringProfile,
    /// Maintain and weight gain: balanced macros
    pub balanced: GoalScoringProfile,
    /// Flat bonus for recipes with a validated image URL
    pub image_bonus: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            weight_loss: GoalScoringProfile {
                protein_weight: 2.0,
                carbs_weight: 0.0,
                fat_weight: 0.0,
                calories_weight: -0.01,
                protein_density_weight: 100.0,
            },
            muscle_gain: GoalScoringProfile {
                protein_weight: 3.0,
                carbs_weight: 1.5,
                fat_weight: 0.0,
                calories_weight: 0.01,
                protein_density_weight: 0.0,
            },
            balanced: GoalScoringProfile {
                protein_weight: 1.5,
                carbs_weight: 1.0,
                fat_weight: 1.0,
                calories_weight: 0.0,
                protein_density_weight: 0.0,
            },
            image_bonus: 50.0,
        }
    }
}

impl ScoringConfig {
    /// Resolve the coefficient profile for a goal
    ///
    /// Weight gain shares the balanced profile; only muscle gain has its own.
    #[must_use]
    pub const fn profile_for(&self, goal: Goal) -> &GoalScoringProfile {
        match goal {
            Goal::WeightLoss => &self.weight_loss,
            Goal::MuscleGain => &self.muscle_gain,
            Goal::WeightGain | Goal::Maintain => &self.balanced,
        }
    }

    /// Validate scoring settings
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the image bonus is negative or a coefficient is not finite
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.image_bonus < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "image_bonus must not be negative",
            ));
        }
        let all_finite = [self.weight_loss, self.muscle_gain, self.balanced]
            .iter()
            .all(|profile| {
                [
                    profile.protein_weight,
                    profile.carbs_weight,
                    profile.fat_weight,
                    profile.calories_weight,
                    profile.protein_density_weight,
                ]
                .iter()
                .all(|value| value.is_finite())
            });
        if !all_finite {
            return Err(ConfigError::ValueOutOfRange(
                "Scoring coefficients must be finite",
            ));
        }
        Ok(())
    }
}

/// Affine seed derivation `day_seed * multiplier + increment`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedDerivation {
    /// Multiplier applied to the day seed
    pub multiplier: u64,
    /// Constant added after multiplication
    pub increment: u64,
}

impl SeedDerivation {
    /// Derive a generator seed from a day seed (wrapping on overflow)
    #[must_use]
    pub const fn derive(&self, day_seed: u64) -> u64 {
        day_seed
            .wrapping_mul(self.multiplier)
            .wrapping_add(self.increment)
    }
}

/// Day-seeded selector settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectionConfig {
    /// Seed of the first candidate permutation
    pub first_shuffle: SeedDerivation,
    /// Seed of the second candidate permutation
    pub second_shuffle: SeedDerivation,
    /// Base window offset multiplier (`day_seed * m mod n`)
    pub base_offset_multiplier: u64,
    /// Secondary window offset multiplier (`day_seed * m mod n`)
    pub secondary_offset_multiplier: u64,
    /// Offset added per meal slot
    pub slot_stride: u64,
    /// Offset added per unit of day seed
    pub day_stride: u64,
    /// Largest window inspected per slot
    pub max_window: usize,
    /// Below this many available candidates the exclusion set is relaxed
    pub relaxation_threshold: usize,
    /// Number of most recently used recipes still excluded after relaxation
    pub recent_exclusion_window: usize,
    /// Synthetic quality score = base + protein_density * factor, clamped
    pub quality_base: f64,
    /// Multiplier of protein density in the synthetic quality score
    pub quality_density_factor: f64,
    /// Lower clamp of the synthetic quality score
    pub quality_min: f64,
    /// Upper clamp of the synthetic quality score
    pub quality_max: f64,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            first_shuffle: SeedDerivation {
                multiplier: 42,
                increment: 17,
            },
            second_shuffle: SeedDerivation {
                multiplier: 73,
                increment: 29,
            },
            base_offset_multiplier: 31,
            secondary_offset_multiplier: 47,
            slot_stride: 41,
            day_stride: 19,
            max_window: 20,
            relaxation_threshold: 10,
            recent_exclusion_window: 5,
            quality_base: 3.5,
            quality_density_factor: 0.2,
            quality_min: 3.0,
            quality_max: 5.0,
        }
    }
}

impl SelectionConfig {
    /// Validate selection settings
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the window is empty, the two shuffles coincide,
    /// or the quality clamp is inverted
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_window == 0 {
            return Err(ConfigError::ValueOutOfRange("max_window must be at least 1"));
        }
        if self.first_shuffle == self.second_shuffle {
            return Err(ConfigError::InvalidRange(
                "The two shuffle seed derivations must differ",
            ));
        }
        if self.quality_min > self.quality_max {
            return Err(ConfigError::InvalidRange(
                "quality_min must be <= quality_max",
            ));
        }
        Ok(())
    }
}
