// ABOUTME: Benchmark fixtures generating recipe dataset rows in the raw CSV encoding
// ABOUTME: Index-derived values keep every benchmark run on identical data
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Deterministic recipe fixtures for benchmarks.

use pierre_core::constants::dataset::{
    COLUMN_CALORIES, COLUMN_CARBOHYDRATE, COLUMN_FAT, COLUMN_IMAGES, COLUMN_INGREDIENTS,
    COLUMN_INSTRUCTIONS, COLUMN_NAME, COLUMN_PROTEIN, COLUMN_RATING,
};
use pierre_intelligence::recipes::RawRecord;

/// Predefined dataset sizes for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum RecipeBatchSize {
    /// Small dataset (200 recipes)
    Small,
    /// Medium dataset (2,000 recipes)
    Medium,
    /// Large dataset (20,000 recipes)
    Large,
}

impl RecipeBatchSize {
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            Self::Small => 200,
            Self::Medium => 2_000,
            Self::Large => 20_000,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }
}

const INGREDIENTS: [&str; 8] = [
    "chicken breast",
    "brown rice",
    "spinach",
    "olive oil",
    "garlic",
    "greek yogurt",
    "oats",
    "black beans",
];

/// One raw row with messy encodings similar to the production dataset
#[allow(clippy::cast_precision_loss)]
fn raw_recipe(index: usize) -> RawRecord {
    let calories = 150 + (index * 37) % 1050;
    let protein = 5 + (index * 13) % 55;
    let carbs = 10 + (index * 17) % 90;
    let fat = 2 + (index * 7) % 40;
    let first = INGREDIENTS[index % INGREDIENTS.len()];
    let second = INGREDIENTS[(index * 3 + 1) % INGREDIENTS.len()];
    let image = if index % 3 == 0 {
        "character(0)".to_owned()
    } else {
        format!(
            "c(\"https://img.sndimg.com/food/image/upload/v1/img/recipes/{index}/bench.jpg\")"
        )
    };
    let rating = if index % 4 == 0 {
        String::new()
    } else {
        format!("{:.1}", 3.0 + (index % 20) as f64 / 10.0)
    };

    RawRecord::new(
        index,
        [
            (COLUMN_NAME, format!("Benchmark Recipe {index}")),
            (COLUMN_CALORIES, format!("{calories}.0")),
            (COLUMN_PROTEIN, protein.to_string()),
            (COLUMN_CARBOHYDRATE, carbs.to_string()),
            (COLUMN_FAT, fat.to_string()),
            (COLUMN_INGREDIENTS, format!("c(\"{first}\", \"{second}\")")),
            (COLUMN_INSTRUCTIONS, "c(\"Prepare.\", \"Cook.\", \"Serve.\")".to_owned()),
            (COLUMN_IMAGES, image),
            (COLUMN_RATING, rating),
        ],
    )
}

/// Raw dataset rows for a batch size
#[must_use]
pub fn generate_raw_recipes(size: RecipeBatchSize) -> Vec<RawRecord> {
    (0..size.count()).map(raw_recipe).collect()
}
