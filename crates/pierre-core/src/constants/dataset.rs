// ABOUTME: Column names and placeholder tokens of the recipe CSV dataset
// ABOUTME: Shared by the dataset loader and the record sanitizer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Recipe display name (mandatory)
pub const COLUMN_NAME: &str = "Name";
/// Calories per serving (mandatory)
pub const COLUMN_CALORIES: &str = "Calories";
/// Protein grams per serving
pub const COLUMN_PROTEIN: &str = "ProteinContent";
/// Carbohydrate grams per serving
pub const COLUMN_CARBOHYDRATE: &str = "CarbohydrateContent";
/// Fat grams per serving
pub const COLUMN_FAT: &str = "FatContent";
/// Ingredient list, usually a `c("..", "..")` literal
pub const COLUMN_INGREDIENTS: &str = "RecipeIngredientParts";
/// Instruction steps, usually a `c("..", "..")` literal
pub const COLUMN_INSTRUCTIONS: &str = "RecipeInstructions";
/// Image URLs with inconsistent quoting
pub const COLUMN_IMAGES: &str = "Images";
/// Average user rating (optional)
pub const COLUMN_RATING: &str = "AggregatedRating";

/// Columns whose absence makes the dataset unusable
pub const MANDATORY_COLUMNS: [&str; 2] = [COLUMN_NAME, COLUMN_CALORIES];

/// Raw values that stand for "no list" in list-typed columns
pub const LIST_PLACEHOLDERS: [&str; 3] = ["", "character(0)", "nan"];

/// Default category reported for dataset recipes
pub const DEFAULT_RECIPE_CATEGORY: &str = "main_course";
