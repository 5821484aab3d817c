// ABOUTME: Daily nutrition target calculation using peer-reviewed formulas
// ABOUTME: BMI, Mifflin-St Jeor BMR, TDEE, goal-adjusted calories and macro split
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition Calculator Module
//!
//! Computes the daily calorie and macronutrient targets that drive meal
//! selection. The per-meal calorie target handed to the candidate filter is
//! `daily_calories / meal_count`.
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>
//!
//! - Phillips, S.M., & Van Loon, L.J. (2011). Dietary protein for athletes.
//!   *Journal of Sports Sciences*, 29(sup1), S29-S38.
//!   <https://doi.org/10.1080/02640414.2011.619204>

use crate::config::intelligence::{BmiBand, BmrConfig, NutritionTargetsConfig};
use pierre_core::constants::nutrition::{energy, fallback};
use pierre_core::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Gender for BMR calculations
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    /// Male gender (higher BMR)
    Male,
    /// Female gender (lower BMR)
    Female,
}

/// Activity level for TDEE calculation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Sedentary (little/no exercise)
    Sedentary,
    /// Lightly active (1-3 days/week)
    Light,
    /// Moderately active (3-5 days/week)
    Moderate,
    /// Very active (6-7 days/week)
    VeryActive,
    /// Extra active (hard training 2x/day)
    ExtraActive,
}

/// Dietary goal driving calorie adjustment, macro ratios and scoring
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    /// Caloric deficit
    WeightLoss,
    /// Caloric surplus
    WeightGain,
    /// Caloric surplus with high protein and carbohydrates
    MuscleGain,
    /// Caloric balance
    Maintain,
}

impl Goal {
    /// Stable lowercase identifier
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::WeightLoss => "weight_loss",
            Self::WeightGain => "weight_gain",
            Self::MuscleGain => "muscle_gain",
            Self::Maintain => "maintain",
        }
    }

    /// Whether the goal adds a calorie surplus
    #[must_use]
    pub const fn is_gain(self) -> bool {
        matches!(self, Self::WeightGain | Self::MuscleGain)
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalize a user-facing enum token: lowercase, spaces and dashes as underscores
fn normalize_token(value: &str) -> String {
    value.trim().to_lowercase().replace([' ', '-'], "_")
}

impl FromStr for Gender {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match normalize_token(value).as_str() {
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            other => Err(AppError::invalid_input(format!("Unknown gender: {other}"))),
        }
    }
}

impl FromStr for ActivityLevel {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match normalize_token(value).as_str() {
            "sedentary" => Ok(Self::Sedentary),
            "light" => Ok(Self::Light),
            "moderate" => Ok(Self::Moderate),
            "very_active" => Ok(Self::VeryActive),
            "extra_active" => Ok(Self::ExtraActive),
            other => Err(AppError::invalid_input(format!(
                "Unknown activity level: {other}"
            ))),
        }
    }
}

impl FromStr for Goal {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match normalize_token(value).as_str() {
            "weight_loss" => Ok(Self::WeightLoss),
            "weight_gain" => Ok(Self::WeightGain),
            "muscle_gain" => Ok(Self::MuscleGain),
            "maintain" => Ok(Self::Maintain),
            other => Err(AppError::invalid_input(format!("Unknown goal: {other}"))),
        }
    }
}

/// Physiological profile of the user requesting a plan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Height in centimeters
    pub height_cm: f64,
    /// Age in years
    pub age: u32,
    /// Gender used by the BMR constant
    pub gender: Gender,
    /// Activity level used by the TDEE multiplier
    pub activity_level: ActivityLevel,
    /// Dietary goal
    pub goal: Goal,
    /// Target weekly weight change in kg; zero means "derive from goal"
    #[serde(default)]
    pub weekly_weight_change: f64,
}

impl UserProfile {
    /// Validate physiological ranges
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if weight, height or age are outside the validated ranges
    pub fn validate(&self) -> AppResult<()> {
        if !(self.weight_kg > 0.0 && self.weight_kg <= 300.0) {
            return Err(AppError::invalid_input(
                "Weight must be between 0 and 300 kg",
            ));
        }
        if !(self.height_cm > 0.0 && self.height_cm <= 300.0) {
            return Err(AppError::invalid_input(
                "Height must be between 0 and 300 cm",
            ));
        }
        if !(10..=120).contains(&self.age) {
            return Err(AppError::invalid_input(
                "Age must be between 10 and 120 years (Mifflin-St Jeor formula validated for ages 10+)",
            ));
        }
        if !self.weekly_weight_change.is_finite() {
            return Err(AppError::invalid_input(
                "Weekly weight change must be a finite number",
            ));
        }
        Ok(())
    }
}

/// Daily nutrition targets (rounded as reported to callers)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyTargets {
    /// Daily calories (kcal)
    pub daily_calories: i64,
    /// Daily protein (g)
    pub protein: i64,
    /// Daily carbohydrates (g)
    pub carbs: i64,
    /// Daily fat (g)
    pub fat: i64,
    /// Daily fiber (g)
    pub fiber: i64,
    /// Daily water (ml)
    pub water_ml: i64,
    /// Total daily energy expenditure (kcal)
    pub tdee: i64,
    /// Basal metabolic rate (kcal)
    pub bmr: i64,
    /// Body mass index, one decimal
    pub bmi: f64,
}

impl DailyTargets {
    /// Documented default payload used whenever a request degrades
    #[must_use]
    pub const fn fallback() -> Self {
        Self {
            daily_calories: fallback::DAILY_CALORIES,
            protein: fallback::PROTEIN_G,
            carbs: fallback::CARBS_G,
            fat: fallback::FAT_G,
            fiber: fallback::FIBER_G,
            water_ml: fallback::WATER_ML,
            tdee: fallback::TDEE,
            bmr: fallback::BMR,
            bmi: fallback::BMI,
        }
    }

    /// Calorie target for one of `meal_count` equally sized meals
    #[must_use]
    pub fn per_meal_calories(&self, meal_count: usize) -> f64 {
        if meal_count == 0 {
            return 0.0;
        }
        self.daily_calories as f64 / meal_count as f64
    }
}

/// BMI category used in goal insights
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum BmiCategory {
    /// BMI below 18.5
    Underweight,
    /// BMI in [18.5, 25)
    Normal,
    /// BMI in [25, 30)
    Overweight,
    /// BMI of 30 or more
    Obese,
}

impl BmiCategory {
    /// Classify a BMI value
    #[must_use]
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            Self::Underweight
        } else if bmi < 25.0 {
            Self::Normal
        } else if bmi < 30.0 {
            Self::Overweight
        } else {
            Self::Obese
        }
    }
}

/// Body mass index: `weight_kg / (height_m)^2`
#[must_use]
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

/// Calculate Basal Metabolic Rate using Mifflin-St Jeor formula
///
/// Formula:
/// - Men: BMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age(y) + 5
/// - Women: BMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age(y) - 161
#[must_use]
pub fn calculate_bmr(profile: &UserProfile, config: &BmrConfig) -> f64 {
    let gender_constant = match profile.gender {
        Gender::Male => config.male_constant,
        Gender::Female => config.female_constant,
    };
    config.weight_coef * profile.weight_kg
        + config.height_coef * profile.height_cm
        + config.age_coef * f64::from(profile.age)
        + gender_constant
}

/// TDEE multiplier for an activity level
#[must_use]
pub const fn activity_multiplier(level: ActivityLevel, config: &NutritionTargetsConfig) -> f64 {
    let factors = &config.activity_factors;
    match level {
        ActivityLevel::Sedentary => factors.sedentary,
        ActivityLevel::Light => factors.light,
        ActivityLevel::Moderate => factors.moderate,
        ActivityLevel::VeryActive => factors.very_active,
        ActivityLevel::ExtraActive => factors.extra_active,
    }
}

fn band_adjustment(
    bands: &[BmiBand],
    default_kcal: f64,
    matches: impl Fn(&BmiBand) -> bool,
) -> f64 {
    bands
        .iter()
        .find(|band| matches(band))
        .map_or(default_kcal, |band| band.kcal)
}

/// Daily calories before the floor, plus protein grams and fat ratio
fn goal_energy_plan(
    profile: &UserProfile,
    tdee: f64,
    bmi: f64,
    config: &NutritionTargetsConfig,
) -> (f64, f64, f64) {
    let macros = &config.macros;
    let adjustments = &config.adjustments;
    let weight = profile.weight_kg;

    if profile.weekly_weight_change != 0.0 {
        let daily_adjustment = profile.weekly_weight_change * adjustments.kcal_per_kg / 7.0;
        return if profile.goal == Goal::WeightLoss {
            (
                tdee - daily_adjustment,
                weight * macros.loss_protein_per_kg,
                macros.loss_fat_ratio,
            )
        } else {
            (
                tdee + daily_adjustment,
                weight * macros.weekly_gain_protein_per_kg,
                macros.weekly_gain_fat_ratio,
            )
        };
    }

    match profile.goal {
        Goal::WeightLoss => {
            let deficit = band_adjustment(
                &adjustments.loss_deficits,
                adjustments.default_deficit_kcal,
                |band| bmi > band.bmi_threshold,
            );
            let protein_factor = if bmi > macros.obese_bmi {
                macros.loss_obese_protein_per_kg
            } else {
                macros.loss_protein_per_kg
            };
            (tdee - deficit, weight * protein_factor, macros.loss_fat_ratio)
        }
        Goal::WeightGain | Goal::MuscleGain => {
            let surplus = band_adjustment(
                &adjustments.gain_surpluses,
                adjustments.default_surplus_kcal,
                |band| bmi < band.bmi_threshold,
            );
            (
                tdee + surplus,
                weight * macros.gain_protein_per_kg,
                macros.gain_fat_ratio,
            )
        }
        Goal::Maintain => (
            tdee,
            weight * macros.maintain_protein_per_kg,
            macros.maintain_fat_ratio,
        ),
    }
}

fn minimum_calories(profile: &UserProfile, config: &NutritionTargetsConfig) -> f64 {
    let limits = &config.limits;
    let senior = profile.age >= limits.senior_age;
    match (profile.gender, senior) {
        (Gender::Female, false) => limits.female_min_kcal,
        (Gender::Female, true) => limits.female_senior_min_kcal,
        (Gender::Male, false) => limits.male_min_kcal,
        (Gender::Male, true) => limits.male_senior_min_kcal,
    }
}

/// Calculate daily calorie and macronutrient targets for a profile
///
/// Calories follow the weekly weight change target when it is non-zero,
/// otherwise a BMI-banded deficit or surplus for the goal. Protein is set per
/// kg of body weight; fat and carbohydrates split the calories left after
/// protein using the goal's fat ratio.
///
/// # Errors
///
/// Returns `InvalidInput` if the profile fails validation
pub fn calculate_daily_targets(
    profile: &UserProfile,
    config: &NutritionTargetsConfig,
) -> AppResult<DailyTargets> {
    profile.validate()?;

    let bmi = calculate_bmi(profile.weight_kg, profile.height_cm);
    let bmr = calculate_bmr(profile, &config.bmr);
    let tdee = bmr * activity_multiplier(profile.activity_level, config);

    let (planned_calories, protein_g, fat_ratio) = goal_energy_plan(profile, tdee, bmi, config);
    let daily_calories = planned_calories.max(minimum_calories(profile, config));

    let remaining = (daily_calories - protein_g * energy::PROTEIN_KCAL_PER_G).max(0.0);
    let fat_g = remaining * fat_ratio / energy::FAT_KCAL_PER_G;
    let carb_g = remaining * (1.0 - fat_ratio) / energy::CARB_KCAL_PER_G;

    let limits = &config.limits;
    let fiber_g = (daily_calories / 1000.0 * limits.fiber_per_1000_kcal)
        .clamp(limits.fiber_min_g, limits.fiber_max_g);
    let water_bonus = match profile.activity_level {
        ActivityLevel::VeryActive | ActivityLevel::ExtraActive => limits.active_water_bonus_ml,
        _ => 0.0,
    };
    let water_ml = profile.weight_kg * limits.water_ml_per_kg + water_bonus;

    Ok(DailyTargets {
        daily_calories: daily_calories.round() as i64,
        protein: protein_g.round() as i64,
        carbs: carb_g.round() as i64,
        fat: fat_g.round() as i64,
        fiber: fiber_g.round() as i64,
        water_ml: water_ml.round() as i64,
        tdee: tdee.round() as i64,
        bmr: bmr.round() as i64,
        bmi: (bmi * 10.0).round() / 10.0,
    })
}
