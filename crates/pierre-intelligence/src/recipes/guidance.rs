// ABOUTME: Declarative meal guidance keyed by meal type and goal
// ABOUTME: Eating windows, portion bands and template meals used to annotate or fill meal slots
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Meal Guidance
//!
//! All guidance lives in two static tables: one row per meal type (timing,
//! instructions, portion bands, macro split) and one row per
//! `(meal_type, goal)` pair (template name and ingredients). Everything is
//! resolved through [`meal_guidance`].

use super::models::{round_to, MealType, SelectedMeal};
use crate::nutrition_calculator::Goal;
use pierre_core::constants::dataset::DEFAULT_RECIPE_CATEGORY;
use pierre_core::constants::nutrition::energy;

/// Score reported for template meals
pub const TEMPLATE_GOAL_ALIGNMENT: f64 = 85.0;

/// Rating reported for template meals
pub const TEMPLATE_RATING: f64 = 4.0;

/// Guidance shared by every goal for one meal type
#[derive(Debug, PartialEq)]
pub struct MealTypeGuidance {
    /// Meal type the row applies to
    pub meal_type: MealType,
    /// Recommended eating window
    pub timing: &'static str,
    /// Generic instructions for template meals
    pub instructions: &'static [&'static str],
    /// `(upper_kcal_exclusive, label)` portion bands in ascending order
    pub portion_bands: &'static [(f64, &'static str)],
    /// Portion label above the last band
    pub portion_default: &'static str,
    /// Carbohydrate share of template meal calories
    pub carb_ratio: f64,
    /// Fat share of template meal calories
    pub fat_ratio: f64,
}

/// Goal-specific template for one meal type
#[derive(Debug, PartialEq, Eq)]
pub struct MealTemplate {
    /// Meal type the row applies to
    pub meal_type: MealType,
    /// Goal the row applies to
    pub goal: Goal,
    /// Template meal name
    pub name: &'static str,
    /// Template ingredients
    pub ingredients: &'static [&'static str],
}

/// Resolved guidance for a `(meal_type, goal)` pair
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MealGuidance {
    /// Meal-type level guidance
    pub meal_type: &'static MealTypeGuidance,
    /// Goal-specific template
    pub template: &'static MealTemplate,
}

static MEAL_TYPE_GUIDANCE: [MealTypeGuidance; 4] = [
    MealTypeGuidance {
        meal_type: MealType::Breakfast,
        timing: "7:00-9:00 AM",
        instructions: &[
            "Start your day with this nutritious meal",
            "Eat within 1-2 hours of waking up",
            "Include protein to maintain energy levels",
            "Pair with water or herbal tea",
        ],
        portion_bands: &[(300.0, "Light breakfast"), (450.0, "Standard breakfast")],
        portion_default: "Hearty breakfast",
        carb_ratio: 0.50,
        fat_ratio: 0.25,
    },
    MealTypeGuidance {
        meal_type: MealType::Lunch,
        timing: "12:00-2:00 PM",
        instructions: &[
            "Perfect midday fuel for sustained energy",
            "Eat when you feel moderately hungry",
            "Balance protein, carbs, and healthy fats",
            "Take time to eat mindfully",
        ],
        portion_bands: &[(400.0, "Light lunch"), (600.0, "Standard lunch")],
        portion_default: "Large lunch",
        carb_ratio: 0.45,
        fat_ratio: 0.30,
    },
    MealTypeGuidance {
        meal_type: MealType::Dinner,
        timing: "6:00-8:00 PM",
        instructions: &[
            "End your day with this satisfying meal",
            "Eat 2-3 hours before bedtime",
            "Focus on protein and vegetables",
            "Keep portions appropriate for evening",
        ],
        portion_bands: &[(350.0, "Light dinner"), (550.0, "Standard dinner")],
        portion_default: "Large dinner",
        carb_ratio: 0.35,
        fat_ratio: 0.40,
    },
    MealTypeGuidance {
        meal_type: MealType::Snack,
        timing: "3:00-4:00 PM or 9:00-10:00 PM",
        instructions: &[
            "Perfect between-meal energy boost",
            "Choose when you feel genuinely hungry",
            "Focus on protein or healthy fats",
            "Keep portions controlled",
        ],
        portion_bands: &[],
        portion_default: "Snack portion",
        carb_ratio: 0.40,
        fat_ratio: 0.35,
    },
];

static MEAL_TEMPLATES: [MealTemplate; 16] = [
    MealTemplate {
        meal_type: MealType::Breakfast,
        goal: Goal::WeightLoss,
        name: "Protein-Rich Morning Start",
        ingredients: &["Egg whites", "Spinach", "Berries", "Greek yogurt", "Oats"],
    },
    MealTemplate {
        meal_type: MealType::Breakfast,
        goal: Goal::WeightGain,
        name: "Power Breakfast Bowl",
        ingredients: &["Whole eggs", "Avocado", "Nuts", "Whole grain toast", "Banana"],
    },
    MealTemplate {
        meal_type: MealType::Breakfast,
        goal: Goal::MuscleGain,
        name: "High-Protein Breakfast",
        ingredients: &["Protein powder", "Oats", "Berries", "Almond butter", "Milk"],
    },
    MealTemplate {
        meal_type: MealType::Breakfast,
        goal: Goal::Maintain,
        name: "Balanced Morning Meal",
        ingredients: &["Eggs", "Vegetables", "Whole grains", "Fruit", "Yogurt"],
    },
    MealTemplate {
        meal_type: MealType::Lunch,
        goal: Goal::WeightLoss,
        name: "Lean & Green Lunch",
        ingredients: &["Lean protein", "Mixed greens", "Vegetables", "Olive oil", "Quinoa"],
    },
    MealTemplate {
        meal_type: MealType::Lunch,
        goal: Goal::WeightGain,
        name: "Hearty Midday Meal",
        ingredients: &["Chicken thigh", "Brown rice", "Avocado", "Nuts", "Vegetables"],
    },
    MealTemplate {
        meal_type: MealType::Lunch,
        goal: Goal::MuscleGain,
        name: "Muscle-Building Lunch",
        ingredients: &["Lean beef", "Sweet potato", "Broccoli", "Olive oil", "Quinoa"],
    },
    MealTemplate {
        meal_type: MealType::Lunch,
        goal: Goal::Maintain,
        name: "Balanced Lunch Plate",
        ingredients: &["Fish or chicken", "Mixed vegetables", "Whole grains", "Healthy fats"],
    },
    MealTemplate {
        meal_type: MealType::Dinner,
        goal: Goal::WeightLoss,
        name: "Light Evening Meal",
        ingredients: &["White fish", "Steamed vegetables", "Leafy greens", "Herbs", "Lemon"],
    },
    MealTemplate {
        meal_type: MealType::Dinner,
        goal: Goal::WeightGain,
        name: "Substantial Dinner",
        ingredients: &["Salmon", "Quinoa", "Roasted vegetables", "Nuts", "Olive oil"],
    },
    MealTemplate {
        meal_type: MealType::Dinner,
        goal: Goal::MuscleGain,
        name: "Recovery Dinner",
        ingredients: &["Lean steak", "Sweet potato", "Asparagus", "Garlic", "Herbs"],
    },
    MealTemplate {
        meal_type: MealType::Dinner,
        goal: Goal::Maintain,
        name: "Balanced Evening Meal",
        ingredients: &["Protein of choice", "Vegetables", "Complex carbs", "Healthy fats"],
    },
    MealTemplate {
        meal_type: MealType::Snack,
        goal: Goal::WeightLoss,
        name: "Smart Snack Choice",
        ingredients: &["Apple", "Almond butter", "Celery", "Hummus"],
    },
    MealTemplate {
        meal_type: MealType::Snack,
        goal: Goal::WeightGain,
        name: "Energy Boost Snack",
        ingredients: &["Trail mix", "Dried fruit", "Nuts", "Seeds"],
    },
    MealTemplate {
        meal_type: MealType::Snack,
        goal: Goal::MuscleGain,
        name: "Protein Power Snack",
        ingredients: &["Protein bar", "Greek yogurt", "Berries", "Granola"],
    },
    MealTemplate {
        meal_type: MealType::Snack,
        goal: Goal::Maintain,
        name: "Healthy Snack",
        ingredients: &["Mixed nuts", "Fruit", "Yogurt", "Vegetables"],
    },
];

/// Resolve the guidance for a meal type and goal
///
/// Rows are laid out in enum declaration order, goals nested inside meal types.
#[must_use]
pub fn meal_guidance(meal_type: MealType, goal: Goal) -> MealGuidance {
    let type_index = match meal_type {
        MealType::Breakfast => 0,
        MealType::Lunch => 1,
        MealType::Dinner => 2,
        MealType::Snack => 3,
    };
    let goal_index = match goal {
        Goal::WeightLoss => 0,
        Goal::WeightGain => 1,
        Goal::MuscleGain => 2,
        Goal::Maintain => 3,
    };
    MealGuidance {
        meal_type: &MEAL_TYPE_GUIDANCE[type_index],
        template: &MEAL_TEMPLATES[type_index * 4 + goal_index],
    }
}

impl MealGuidance {
    /// Portion label for a meal of `calories` kcal
    #[must_use]
    pub fn portion_size(&self, calories: f64) -> &'static str {
        self.meal_type
            .portion_bands
            .iter()
            .find(|(upper, _)| calories < *upper)
            .map_or(self.meal_type.portion_default, |&(_, label)| label)
    }

    /// Fill in timing and portion guidance on a selected meal
    pub fn annotate(&self, meal: &mut SelectedMeal) {
        meal.meal_timing = self.meal_type.timing.to_owned();
        meal.portion_size = self.portion_size(meal.calories as f64).to_owned();
    }

    /// Template meal sized to `target_calories`, used for an omitted slot
    #[must_use]
    pub fn template_meal(
        &self,
        target_calories: f64,
        slot_index: usize,
        day_seed: u64,
    ) -> SelectedMeal {
        let template = self.template;
        let protein_ratio = if template.goal.is_gain() { 0.25 } else { 0.20 };
        let calories = target_calories.max(0.0);
        let protein = calories * protein_ratio / energy::PROTEIN_KCAL_PER_G;
        let protein_density = if calories > 0.0 {
            protein * 100.0 / calories
        } else {
            0.0
        };

        SelectedMeal {
            recipe_id: format!("fallback_{}_{day_seed}", template.meal_type),
            name: template.name.to_owned(),
            category: DEFAULT_RECIPE_CATEGORY.to_owned(),
            calories: calories as i64,
            protein: protein as i64,
            carbs: (calories * self.meal_type.carb_ratio / energy::CARB_KCAL_PER_G) as i64,
            fat: (calories * self.meal_type.fat_ratio / energy::FAT_KCAL_PER_G) as i64,
            instructions: self
                .meal_type
                .instructions
                .iter()
                .map(|step| (*step).to_owned())
                .collect(),
            ingredients: template
                .ingredients
                .iter()
                .map(|item| (*item).to_owned())
                .collect(),
            rating: TEMPLATE_RATING,
            image_url: String::new(),
            meal_type: template.meal_type,
            protein_density: round_to(protein_density, 1),
            goal_alignment: TEMPLATE_GOAL_ALIGNMENT,
            meal_timing: self.meal_type.timing.to_owned(),
            portion_size: self.portion_size(calories).to_owned(),
            slot_index,
        }
    }
}
