// ABOUTME: Candidate filter narrowing the working dataset to an adaptive calorie band
// ABOUTME: Tries the standard tolerance, then a widened one, then the nearest-calorie fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::models::AnnotatedRecord;
use crate::config::intelligence::FilterConfig;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Which fallback tier produced the candidate set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToleranceTier {
    /// Initial tolerance band
    Standard,
    /// Widened tolerance band
    Widened,
    /// Records closest to the per-meal target, regardless of band
    Nearest,
}

/// Candidates admitted for one request
#[derive(Debug, Clone)]
pub struct CandidateSet<'a> {
    /// Admitted records; dataset order for band tiers, closest first for `Nearest`
    pub records: Vec<AnnotatedRecord<'a>>,
    /// Tier that produced the set
    pub tier: ToleranceTier,
    /// Lower calorie bound that was applied
    pub min_calories: f64,
    /// Upper calorie bound that was applied
    pub max_calories: f64,
}

impl CandidateSet<'_> {
    /// Number of admitted records
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no record was admitted
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Inclusive calorie band `[max(floor, T(1 - tolerance)), T(1 + tolerance)]`
#[must_use]
pub fn calorie_band(target: f64, tolerance: f64, config: &FilterConfig) -> (f64, f64) {
    (
        config.min_meal_calories.max(target * (1.0 - tolerance)),
        target * (1.0 + tolerance),
    )
}

fn within_band<'a>(
    records: &[AnnotatedRecord<'a>],
    (min_calories, max_calories): (f64, f64),
) -> Vec<AnnotatedRecord<'a>> {
    records
        .iter()
        .filter(|candidate| {
            let calories = candidate.record.calories;
            calories >= min_calories && calories <= max_calories
        })
        .copied()
        .collect()
}

/// Select candidates whose calories fit the per-meal target
///
/// The standard band is tried first; if it admits fewer records than
/// `meal_count`, the widened band is tried; if that is still short, the
/// `meal_count * nearest_multiplier` records with the smallest
/// `|calories - target|` are taken (ties keep dataset order). The result is
/// empty only when `records` is empty.
#[must_use]
pub fn filter_candidates<'a>(
    records: &[AnnotatedRecord<'a>],
    target_per_meal: f64,
    meal_count: usize,
    config: &FilterConfig,
) -> CandidateSet<'a> {
    for (tier, tolerance) in [
        (ToleranceTier::Standard, config.initial_tolerance),
        (ToleranceTier::Widened, config.widened_tolerance),
    ] {
        let band = calorie_band(target_per_meal, tolerance, config);
        let admitted = within_band(records, band);
        if admitted.len() >= meal_count {
            debug!(
                ?tier,
                candidates = admitted.len(),
                min_calories = band.0,
                max_calories = band.1,
                "Filtered candidates by calorie band"
            );
            return CandidateSet {
                records: admitted,
                tier,
                min_calories: band.0,
                max_calories: band.1,
            };
        }
    }

    let mut nearest: Vec<AnnotatedRecord<'a>> = records.to_vec();
    // Stable sort keeps dataset order between equal distances
    nearest.sort_by(|a, b| {
        let distance_a = (a.record.calories - target_per_meal).abs();
        let distance_b = (b.record.calories - target_per_meal).abs();
        distance_a.total_cmp(&distance_b)
    });
    nearest.truncate(meal_count.saturating_mul(config.nearest_multiplier));

    let (min_calories, max_calories) = nearest.iter().fold(
        (f64::INFINITY, f64::NEG_INFINITY),
        |(low, high), candidate| {
            (
                low.min(candidate.record.calories),
                high.max(candidate.record.calories),
            )
        },
    );
    debug!(
        tier = ?ToleranceTier::Nearest,
        candidates = nearest.len(),
        "Fell back to nearest-calorie candidates"
    );
    CandidateSet {
        records: nearest,
        tier: ToleranceTier::Nearest,
        min_calories: if min_calories.is_finite() { min_calories } else { 0.0 },
        max_calories: if max_calories.is_finite() { max_calories } else { 0.0 },
    }
}
