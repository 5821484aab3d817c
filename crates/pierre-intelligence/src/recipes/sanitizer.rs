// ABOUTME: Record sanitizer applying the field normalizer across the raw dataset
// ABOUTME: Drops rows without a name or with non-positive calories, preserving source order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::models::{CleanRecord, RawRecord};
use super::normalizer::{
    normalize_numeric, normalize_optional_numeric, normalize_string, FieldNormalizer,
};
use pierre_core::constants::dataset::{
    COLUMN_CALORIES, COLUMN_CARBOHYDRATE, COLUMN_FAT, COLUMN_IMAGES, COLUMN_INGREDIENTS,
    COLUMN_INSTRUCTIONS, COLUMN_NAME, COLUMN_PROTEIN, COLUMN_RATING,
};
use rayon::prelude::*;
use tracing::{debug, trace};

/// Normalize one raw row into a clean record
///
/// Returns `None` when the row has no name or non-positive calories. Missing
/// optional columns resolve to empty or zero values.
#[must_use]
pub fn sanitize_record(raw: &RawRecord, normalizer: &FieldNormalizer) -> Option<CleanRecord> {
    let name = normalize_string(raw.get(COLUMN_NAME));
    let calories = normalize_numeric(raw.get(COLUMN_CALORIES));
    if name.is_empty() || calories <= 0.0 {
        trace!(row = raw.row_index, "Dropping row without name or calories");
        return None;
    }

    Some(CleanRecord {
        id: raw.row_index,
        name,
        calories,
        protein_g: normalize_numeric(raw.get(COLUMN_PROTEIN)),
        carb_g: normalize_numeric(raw.get(COLUMN_CARBOHYDRATE)),
        fat_g: normalize_numeric(raw.get(COLUMN_FAT)),
        ingredients: normalizer.normalize_list(raw.get(COLUMN_INGREDIENTS)),
        instructions: normalizer.normalize_list(raw.get(COLUMN_INSTRUCTIONS)),
        image_url: normalizer.normalize_image_url(raw.get(COLUMN_IMAGES)),
        rating: normalize_optional_numeric(raw.get(COLUMN_RATING)),
    })
}

/// Build the working dataset from raw rows
///
/// Rows are normalized in parallel; the output keeps source order and is
/// deterministic for identical input.
#[must_use]
pub fn sanitize_records(raw: &[RawRecord], normalizer: &FieldNormalizer) -> Vec<CleanRecord> {
    let cleaned: Vec<CleanRecord> = raw
        .par_iter()
        .filter_map(|record| sanitize_record(record, normalizer))
        .collect();

    debug!(
        input_rows = raw.len(),
        kept_rows = cleaned.len(),
        dropped_rows = raw.len() - cleaned.len(),
        "Sanitized recipe dataset"
    );
    cleaned
}
