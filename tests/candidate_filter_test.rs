// ABOUTME: Tests for the adaptive calorie tolerance candidate filter
// ABOUTME: Exercises the standard, widened and nearest-calorie tiers and the calorie floor
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod helpers;

use helpers::synthetic_recipes::SyntheticRecipeBuilder;
use pierre_intelligence::config::intelligence::FilterConfig;
use pierre_intelligence::recipes::candidate_filter::calorie_band;
use pierre_intelligence::recipes::{filter_candidates, AnnotatedRecord, CleanRecord, ToleranceTier};

fn annotate(records: &[CleanRecord]) -> Vec<AnnotatedRecord<'_>> {
    records
        .iter()
        .map(|record| AnnotatedRecord::new(record, 0))
        .collect()
}

fn calories_of(candidates: &[AnnotatedRecord<'_>]) -> Vec<f64> {
    candidates
        .iter()
        .map(|candidate| candidate.record.calories)
        .collect()
}

#[test]
fn test_standard_band_is_inclusive() {
    let records = SyntheticRecipeBuilder::new(1).with_calories([450.0, 600.0, 780.0, 900.0]);
    let annotated = annotate(&records);

    let set = filter_candidates(&annotated, 600.0, 3, &FilterConfig::default());
    assert_eq!(set.tier, ToleranceTier::Standard);
    assert_eq!(calories_of(&set.records), vec![450.0, 600.0, 780.0]);
    assert!((set.min_calories - 420.0).abs() < 1e-9);
    assert!((set.max_calories - 780.0).abs() < 1e-9);
}

#[test]
fn test_widened_band_when_standard_is_short() {
    let records = SyntheticRecipeBuilder::new(2).with_calories([300.0, 350.0, 860.0, 1200.0]);
    let annotated = annotate(&records);

    let set = filter_candidates(&annotated, 600.0, 3, &FilterConfig::default());
    assert_eq!(set.tier, ToleranceTier::Widened);
    assert_eq!(calories_of(&set.records), vec![300.0, 350.0, 860.0]);
}

#[test]
fn test_nearest_fallback_takes_closest_records() {
    let records =
        SyntheticRecipeBuilder::new(3).with_calories([100.0, 150.0, 2000.0, 2500.0, 3000.0]);
    let annotated = annotate(&records);

    let set = filter_candidates(&annotated, 600.0, 2, &FilterConfig::default());
    assert_eq!(set.tier, ToleranceTier::Nearest);
    assert_eq!(calories_of(&set.records), vec![150.0, 100.0, 2000.0, 2500.0]);
    assert!((set.min_calories - 100.0).abs() < 1e-9);
    assert!((set.max_calories - 2500.0).abs() < 1e-9);
}

#[test]
fn test_nearest_ties_keep_dataset_order() {
    let records = SyntheticRecipeBuilder::new(4).with_calories([1500.0, 2400.0, 1500.0]);
    let annotated = annotate(&records);

    let set = filter_candidates(&annotated, 300.0, 1, &FilterConfig::default());
    assert_eq!(set.tier, ToleranceTier::Nearest);
    let ids: Vec<usize> = set.records.iter().map(|candidate| candidate.record.id).collect();
    assert_eq!(ids, vec![0, 2]);
}

#[test]
fn test_calorie_floor_applies_to_lower_bound() {
    let config = FilterConfig::default();
    let (low, high) = calorie_band(120.0, config.initial_tolerance, &config);
    assert!((low - 100.0).abs() < 1e-9);
    assert!((high - 156.0).abs() < 1e-9);
}

#[test]
fn test_empty_input_yields_empty_nearest_set() {
    let set = filter_candidates(&[], 600.0, 3, &FilterConfig::default());
    assert!(set.is_empty());
    assert_eq!(set.tier, ToleranceTier::Nearest);
    assert!(set.min_calories.abs() < f64::EPSILON);
    assert!(set.max_calories.abs() < f64::EPSILON);
}

#[test]
fn test_band_tiers_preserve_dataset_order() {
    let records = SyntheticRecipeBuilder::new(6).random(80);
    let annotated = annotate(&records);
    let set = filter_candidates(&annotated, 650.0, 3, &FilterConfig::default());
    assert_ne!(set.tier, ToleranceTier::Nearest);
    assert!(set
        .records
        .windows(2)
        .all(|pair| pair[0].record.id < pair[1].record.id));
    assert!(set
        .records
        .iter()
        .all(|candidate| candidate.record.calories >= set.min_calories
            && candidate.record.calories <= set.max_calories));
}
