// ABOUTME: Synthetic recipe generator for automated pipeline testing
// ABOUTME: Creates reproducible recipes and renders them in the messy dataset encoding
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use pierre_intelligence::recipes::{CleanRecord, RawRecord};
use pierre_meal_planner::constants::dataset::{
    COLUMN_CALORIES, COLUMN_CARBOHYDRATE, COLUMN_FAT, COLUMN_IMAGES, COLUMN_INGREDIENTS,
    COLUMN_INSTRUCTIONS, COLUMN_NAME, COLUMN_PROTEIN, COLUMN_RATING,
};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

const PANTRY: [&str; 12] = [
    "chicken breast",
    "brown rice",
    "olive oil",
    "spinach",
    "greek yogurt",
    "oats",
    "salmon",
    "black beans",
    "sweet potato",
    "eggs",
    "broccoli",
    "quinoa",
];

/// Column order used when rendering records as CSV
pub const CSV_COLUMNS: [&str; 9] = [
    COLUMN_NAME,
    COLUMN_CALORIES,
    COLUMN_PROTEIN,
    COLUMN_CARBOHYDRATE,
    COLUMN_FAT,
    COLUMN_INGREDIENTS,
    COLUMN_INSTRUCTIONS,
    COLUMN_IMAGES,
    COLUMN_RATING,
];

/// Builder for reproducible synthetic recipes
///
/// Ids are assigned sequentially from zero, matching the row index the
/// sanitizer assigns when the recipes are rendered to a dataset in order.
#[derive(Debug, Clone)]
pub struct SyntheticRecipeBuilder {
    rng: ChaCha8Rng,
    next_id: usize,
}

impl SyntheticRecipeBuilder {
    /// Create new builder with deterministic seed for reproducibility
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            next_id: 0,
        }
    }

    /// One recipe with the given calories and random macros, image and rating
    pub fn recipe(&mut self, calories: f64) -> CleanRecord {
        let id = self.next_id;
        self.next_id += 1;

        let protein_share = self.rng.gen_range(0.10_f64..0.40);
        let fat_share = self.rng.gen_range(0.15_f64..0.35);
        let carb_share = (1.0 - protein_share - fat_share).max(0.0);
        let ingredient_count = self.rng.gen_range(2..6);
        let ingredients = PANTRY
            .choose_multiple(&mut self.rng, ingredient_count)
            .map(|item| (*item).to_owned())
            .collect();
        let image_url = if self.rng.gen_bool(0.5) {
            format!(
                "https://img.sndimg.com/food/image/upload/v1/img/recipes/{id}/synthetic_recipe.jpg"
            )
        } else {
            String::new()
        };
        let rating = self
            .rng
            .gen_bool(0.7)
            .then(|| f64::from(self.rng.gen_range(30_u8..=50)) / 10.0);

        CleanRecord {
            id,
            name: format!("Synthetic Recipe {id}"),
            calories,
            protein_g: (calories * protein_share / 4.0).round(),
            carb_g: (calories * carb_share / 4.0).round(),
            fat_g: (calories * fat_share / 9.0).round(),
            ingredients,
            instructions: vec![
                format!("Prepare recipe {id}"),
                "Cook until done".to_owned(),
            ],
            image_url,
            rating,
        }
    }

    /// Recipes with exactly the given calories, in order
    pub fn with_calories(&mut self, calories: impl IntoIterator<Item = f64>) -> Vec<CleanRecord> {
        calories.into_iter().map(|kcal| self.recipe(kcal)).collect()
    }

    /// `count` recipes with calories `start, start + step, ...`
    pub fn linear(&mut self, count: usize, start: f64, step: f64) -> Vec<CleanRecord> {
        self.with_calories((0..count).map(|index| (index as f64).mul_add(step, start)))
    }

    /// `count` recipes with calories drawn uniformly from `[150, 1200)`
    pub fn random(&mut self, count: usize) -> Vec<CleanRecord> {
        (0..count)
            .map(|_| {
                let calories = self.rng.gen_range(150.0..1200.0_f64).round();
                self.recipe(calories)
            })
            .collect()
    }
}

/// Render a list the way the dataset does: `c("a", "b")`
pub fn vector_literal(items: &[String]) -> String {
    let quoted: Vec<String> = items.iter().map(|item| format!("\"{item}\"")).collect();
    format!("c({})", quoted.join(", "))
}

/// Raw cells for a record in the dataset's encoding
pub fn raw_cells(record: &CleanRecord) -> Vec<String> {
    vec![
        record.name.clone(),
        record.calories.to_string(),
        record.protein_g.to_string(),
        record.carb_g.to_string(),
        record.fat_g.to_string(),
        vector_literal(&record.ingredients),
        vector_literal(&record.instructions),
        if record.image_url.is_empty() {
            "character(0)".to_owned()
        } else {
            format!("\"{}\"", record.image_url)
        },
        record.rating.map_or_else(String::new, |rating| rating.to_string()),
    ]
}

/// Raw records equivalent to `records`, row index = position
pub fn to_raw_records(records: &[CleanRecord]) -> Vec<RawRecord> {
    records
        .iter()
        .enumerate()
        .map(|(row_index, record)| {
            RawRecord::new(row_index, CSV_COLUMNS.into_iter().zip(raw_cells(record)))
        })
        .collect()
}

/// CSV text with a header row followed by `records`
pub fn to_csv(records: &[CleanRecord]) -> String {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(CSV_COLUMNS).unwrap();
    for record in records {
        writer.write_record(raw_cells(record)).unwrap();
    }
    String::from_utf8(writer.into_inner().unwrap()).unwrap()
}
