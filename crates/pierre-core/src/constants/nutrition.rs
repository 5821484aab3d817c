// ABOUTME: Fallback nutrition payload and physiological conversion constants
// ABOUTME: Values returned whenever a recommendation request degrades
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Documented default nutrition payload returned when the pipeline degrades
pub mod fallback {
    /// Daily calories (kcal)
    pub const DAILY_CALORIES: i64 = 2000;
    /// Daily protein (g)
    pub const PROTEIN_G: i64 = 150;
    /// Daily carbohydrates (g)
    pub const CARBS_G: i64 = 250;
    /// Daily fat (g)
    pub const FAT_G: i64 = 67;
    /// Daily fiber (g)
    pub const FIBER_G: i64 = 30;
    /// Daily water (ml)
    pub const WATER_ML: i64 = 2500;
    /// Total daily energy expenditure (kcal)
    pub const TDEE: i64 = 2000;
    /// Basal metabolic rate (kcal)
    pub const BMR: i64 = 1600;
    /// Body mass index
    pub const BMI: f64 = 22.0;
}

/// Energy content of macronutrients (kcal per gram)
pub mod energy {
    /// Protein kcal per gram
    pub const PROTEIN_KCAL_PER_G: f64 = 4.0;
    /// Carbohydrate kcal per gram
    pub const CARB_KCAL_PER_G: f64 = 4.0;
    /// Fat kcal per gram
    pub const FAT_KCAL_PER_G: f64 = 9.0;
    /// Approximate kcal stored in one kilogram of body weight
    pub const KCAL_PER_KG_BODY_WEIGHT: f64 = 7700.0;
    /// Approximate kcal per pound, used for weekly change estimates
    pub const KCAL_PER_POUND: f64 = 3500.0;
}
