// ABOUTME: Nutrition target configuration for BMR, TDEE and daily macro calculation
// ABOUTME: Configures Mifflin-St Jeor coefficients, activity factors, BMI-banded adjustments and macro ratios
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition Target Configuration
//!
//! # Scientific References
//!
//! - BMR: Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
//! - Protein: Phillips & Van Loon (2011) DOI: 10.1080/02640414.2011.619204

use super::error::ConfigError;
use pierre_core::constants::nutrition::energy::KCAL_PER_KG_BODY_WEIGHT;
use serde::{Deserialize, Serialize};

/// Daily nutrition target configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NutritionTargetsConfig {
    /// Mifflin-St Jeor coefficients
    pub bmr: BmrConfig,
    /// Activity factor multipliers for TDEE calculation
    pub activity_factors: ActivityFactorsConfig,
    /// Calorie adjustments driven by goal and BMI band
    pub adjustments: GoalAdjustmentConfig,
    /// Protein and fat ratios per goal
    pub macros: MacroRatioConfig,
    /// Calorie floors, fiber and hydration rules
    pub limits: DailyLimitsConfig,
}

/// Mifflin-St Jeor BMR coefficients
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmrConfig {
    /// Weight coefficient (10.0)
    pub weight_coef: f64,
    /// Height coefficient (6.25)
    pub height_coef: f64,
    /// Age coefficient (-5.0)
    pub age_coef: f64,
    /// Male constant (+5)
    pub male_constant: f64,
    /// Female constant (-161)
    pub female_constant: f64,
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            weight_coef: 10.0,
            height_coef: 6.25,
            age_coef: -5.0,
            male_constant: 5.0,
            female_constant: -161.0,
        }
    }
}

/// Activity factor multipliers for TDEE calculation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityFactorsConfig {
    /// Sedentary: 1.2
    pub sedentary: f64,
    /// Light: 1.375
    pub light: f64,
    /// Moderate: 1.55
    pub moderate: f64,
    /// Very active: 1.725
    pub very_active: f64,
    /// Extra active: 1.9
    pub extra_active: f64,
}

impl Default for ActivityFactorsConfig {
    fn default() -> Self {
        Self {
            sedentary: 1.2,
            light: 1.375,
            moderate: 1.55,
            very_active: 1.725,
            extra_active: 1.9,
        }
    }
}

/// One BMI band and the calorie adjustment applied inside it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BmiBand {
    /// Band boundary (exclusive); meaning depends on the band list direction
    pub bmi_threshold: f64,
    /// Daily kcal adjustment applied to TDEE
    pub kcal: f64,
}

/// Goal-driven calorie adjustments
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalAdjustmentConfig {
    /// Energy in one kilogram of body weight
    pub kcal_per_kg: f64,
    /// Weight-loss deficits, checked in order with `bmi > threshold`
    pub loss_deficits: Vec<BmiBand>,
    /// Deficit used when no loss band matches
    pub default_deficit_kcal: f64,
    /// Gain surpluses, checked in order with `bmi < threshold`
    pub gain_surpluses: Vec<BmiBand>,
    /// Surplus used when no gain band matches
    pub default_surplus_kcal: f64,
}

impl Default for GoalAdjustmentConfig {
    fn default() -> Self {
        Self {
            kcal_per_kg: KCAL_PER_KG_BODY_WEIGHT,
            loss_deficits: vec![
                BmiBand {
                    bmi_threshold: 35.0,
                    kcal: 750.0,
                },
                BmiBand {
                    bmi_threshold: 30.0,
                    kcal: 600.0,
                },
                BmiBand {
                    bmi_threshold: 25.0,
                    kcal: 500.0,
                },
            ],
            default_deficit_kcal: 300.0,
            gain_surpluses: vec![
                BmiBand {
                    bmi_threshold: 18.5,
                    kcal: 600.0,
                },
                BmiBand {
                    bmi_threshold: 22.0,
                    kcal: 500.0,
                },
                BmiBand {
                    bmi_threshold: 25.0,
                    kcal: 400.0,
                },
            ],
            default_surplus_kcal: 300.0,
        }
    }
}

/// Protein grams per kg and fat share of calories
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MacroRatioConfig {
    /// Protein g/kg for weight loss
    pub loss_protein_per_kg: f64,
    /// Protein g/kg for weight loss when BMI is above `obese_bmi`
    pub loss_obese_protein_per_kg: f64,
    /// BMI above which the obese protein factor applies
    pub obese_bmi: f64,
    /// Fat share of calories for weight loss
    pub loss_fat_ratio: f64,
    /// Protein g/kg for weight and muscle gain
    pub gain_protein_per_kg: f64,
    /// Fat share of calories for weight and muscle gain
    pub gain_fat_ratio: f64,
    /// Protein g/kg for maintenance
    pub maintain_protein_per_kg: f64,
    /// Fat share of calories for maintenance
    pub maintain_fat_ratio: f64,
    /// Protein g/kg when a non-loss weekly change is requested
    pub weekly_gain_protein_per_kg: f64,
    /// Fat share when a non-loss weekly change is requested
    pub weekly_gain_fat_ratio: f64,
}

impl Default for MacroRatioConfig {
    fn default() -> Self {
        Self {
            loss_protein_per_kg: 2.2,
            loss_obese_protein_per_kg: 2.4,
            obese_bmi: 30.0,
            loss_fat_ratio: 0.30,
            gain_protein_per_kg: 2.6,
            gain_fat_ratio: 0.25,
            maintain_protein_per_kg: 2.0,
            maintain_fat_ratio: 0.28,
            weekly_gain_protein_per_kg: 2.4,
            weekly_gain_fat_ratio: 0.25,
        }
    }
}

/// Floors and derived daily targets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyLimitsConfig {
    /// Minimum daily kcal for women
    pub female_min_kcal: f64,
    /// Minimum daily kcal for women at or above `senior_age`
    pub female_senior_min_kcal: f64,
    /// Minimum daily kcal for men
    pub male_min_kcal: f64,
    /// Minimum daily kcal for men at or above `senior_age`
    pub male_senior_min_kcal: f64,
    /// Age from which the senior floors apply
    pub senior_age: u32,
    /// Fiber grams per 1000 kcal
    pub fiber_per_1000_kcal: f64,
    /// Lower fiber clamp (g)
    pub fiber_min_g: f64,
    /// Upper fiber clamp (g)
    pub fiber_max_g: f64,
    /// Water ml per kg of body weight
    pub water_ml_per_kg: f64,
    /// Extra water ml for very and extra active users
    pub active_water_bonus_ml: f64,
}

impl Default for DailyLimitsConfig {
    fn default() -> Self {
        Self {
            female_min_kcal: 1200.0,
            female_senior_min_kcal: 1100.0,
            male_min_kcal: 1500.0,
            male_senior_min_kcal: 1400.0,
            senior_age: 50,
            fiber_per_1000_kcal: 14.0,
            fiber_min_g: 25.0,
            fiber_max_g: 35.0,
            water_ml_per_kg: 35.0,
            active_water_bonus_ml: 500.0,
        }
    }
}

impl NutritionTargetsConfig {
    /// Validate nutrition target settings
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if ratios or multipliers are out of range
    pub fn validate(&self) -> Result<(), ConfigError> {
        let factors = &self.activity_factors;
        if factors.sedentary >= factors.light
            || factors.light >= factors.moderate
            || factors.moderate >= factors.very_active
            || factors.very_active >= factors.extra_active
        {
            return Err(ConfigError::InvalidRange(
                "Activity factors must be in ascending order",
            ));
        }

        let fat_ratios = [
            self.macros.loss_fat_ratio,
            self.macros.gain_fat_ratio,
            self.macros.maintain_fat_ratio,
            self.macros.weekly_gain_fat_ratio,
        ];
        if fat_ratios.iter().any(|ratio| !(0.0..1.0).contains(ratio)) {
            return Err(ConfigError::ValueOutOfRange(
                "Fat ratios must be within [0, 1)",
            ));
        }

        if self.limits.fiber_min_g > self.limits.fiber_max_g {
            return Err(ConfigError::InvalidRange("fiber_min_g must be <= fiber_max_g"));
        }

        if self.adjustments.kcal_per_kg <= 0.0 {
            return Err(ConfigError::ValueOutOfRange("kcal_per_kg must be positive"));
        }

        Ok(())
    }
}
