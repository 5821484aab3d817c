// ABOUTME: Data models for the recipe pipeline from raw dataset rows to selected meals
// ABOUTME: Defines RawRecord, CleanRecord, AnnotatedRecord, MealType and SelectedMeal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// One row of the source dataset, keyed by column header
///
/// Values are the untouched cell strings; a column missing from the file is
/// simply absent from `fields`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRecord {
    /// Zero-based position of the row in the source file (header excluded)
    pub row_index: usize,
    /// Column header to raw cell value
    pub fields: HashMap<String, String>,
}

impl RawRecord {
    /// Create a raw record from `(column, value)` pairs
    #[must_use]
    pub fn new<K, V>(row_index: usize, fields: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            row_index,
            fields: fields
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }

    /// Raw value of a column, if the column exists
    #[must_use]
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields.get(column).map(String::as_str)
    }
}

/// Normalized recipe admitted to the working dataset
///
/// Invariant: `name` is non-empty and `calories > 0`. Macro fields are never negative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleanRecord {
    /// Stable identifier: the source row index
    pub id: usize,
    /// Recipe name
    pub name: String,
    /// Energy per serving (kcal)
    pub calories: f64,
    /// Protein (g)
    pub protein_g: f64,
    /// Carbohydrates (g)
    pub carb_g: f64,
    /// Fat (g)
    pub fat_g: f64,
    /// Up to 10 distinct ingredients, source order
    pub ingredients: Vec<String>,
    /// Up to 10 distinct instruction steps, source order
    pub instructions: Vec<String>,
    /// Validated image URL or empty string
    pub image_url: String,
    /// Native aggregated rating, when the dataset provides one
    pub rating: Option<f64>,
}

impl CleanRecord {
    /// Whether a validated image URL exists
    #[must_use]
    pub fn has_image(&self) -> bool {
        !self.image_url.is_empty()
    }

    /// Protein grams per 100 kcal, zero when calories are zero
    #[must_use]
    pub fn protein_density(&self) -> f64 {
        if self.calories > 0.0 {
            self.protein_g / self.calories * 100.0
        } else {
            0.0
        }
    }
}

/// Clean record plus the per-request derived annotations
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnnotatedRecord<'a> {
    /// Underlying record from the working dataset
    pub record: &'a CleanRecord,
    /// Nutritional similarity group
    pub cluster_id: usize,
    /// Whether the record has a validated image
    pub has_image: bool,
    /// Goal-dependent fitness score
    pub score: f64,
}

impl<'a> AnnotatedRecord<'a> {
    /// Annotate a record with its cluster; the score is assigned by the scorer
    #[must_use]
    pub fn new(record: &'a CleanRecord, cluster_id: usize) -> Self {
        Self {
            record,
            cluster_id,
            has_image: record.has_image(),
            score: 0.0,
        }
    }
}

/// Position of a meal within the day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MealType {
    /// Morning meal
    Breakfast,
    /// Midday meal
    Lunch,
    /// Evening meal
    Dinner,
    /// Small meal between main meals
    Snack,
}

impl MealType {
    /// Stable lowercase identifier
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Breakfast => "breakfast",
            Self::Lunch => "lunch",
            Self::Dinner => "dinner",
            Self::Snack => "snack",
        }
    }

    /// Ordered meal slots for a day with `meal_count` meals (3 to 5)
    #[must_use]
    pub const fn for_meal_count(meal_count: usize) -> Option<&'static [Self]> {
        match meal_count {
            3 => Some(&[Self::Breakfast, Self::Lunch, Self::Dinner]),
            4 => Some(&[Self::Breakfast, Self::Lunch, Self::Snack, Self::Dinner]),
            5 => Some(&[
                Self::Breakfast,
                Self::Snack,
                Self::Lunch,
                Self::Snack,
                Self::Dinner,
            ]),
            _ => None,
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One meal slot of the day's plan with its calorie window
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MealSlot {
    /// Zero-based position in the day
    pub index: usize,
    /// Meal type of the slot
    pub meal_type: MealType,
    /// Lowest admitted calories
    pub min_calories: f64,
    /// Highest admitted calories
    pub max_calories: f64,
}

/// A meal chosen for one slot, as exposed to callers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedMeal {
    /// Source row index, or `fallback_<meal_type>_<day_seed>` for template meals
    pub recipe_id: String,
    /// Recipe name
    pub name: String,
    /// Recipe category
    pub category: String,
    /// Calories (kcal, truncated)
    pub calories: i64,
    /// Protein (g, truncated)
    pub protein: i64,
    /// Carbohydrates (g, truncated)
    pub carbs: i64,
    /// Fat (g, truncated)
    pub fat: i64,
    /// Instruction steps
    pub instructions: Vec<String>,
    /// Ingredients
    pub ingredients: Vec<String>,
    /// Native rating or synthetic quality score in [3.0, 5.0]
    pub rating: f64,
    /// Validated image URL or empty string
    pub image_url: String,
    /// Meal slot type
    pub meal_type: MealType,
    /// Protein grams per 100 kcal, one decimal
    pub protein_density: f64,
    /// Goal score of the recipe, one decimal
    pub goal_alignment: f64,
    /// Recommended eating window
    #[serde(default)]
    pub meal_timing: String,
    /// Portion guidance for the meal's calories
    #[serde(default)]
    pub portion_size: String,
    /// Slot position the meal fills; internal only
    #[serde(skip)]
    pub slot_index: usize,
}

/// Round to `decimals` decimal places
#[must_use]
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10_f64.powi(decimals);
    (value * factor).round() / factor
}
