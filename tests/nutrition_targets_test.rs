// ABOUTME: Tests for BMR, TDEE and daily macro target calculation
// ABOUTME: Goal adjustments, weekly change targets, calorie floors and profile validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use pierre_core::errors::ErrorCode;
use pierre_intelligence::config::intelligence::NutritionTargetsConfig;
use pierre_intelligence::{
    calculate_daily_targets, ActivityLevel, BmiCategory, DailyTargets, Gender, Goal, UserProfile,
};

fn targets_for(profile: &UserProfile) -> DailyTargets {
    calculate_daily_targets(profile, &NutritionTargetsConfig::default()).unwrap()
}

#[test]
fn test_maintain_profile_targets() {
    let targets = targets_for(&common::maintain_profile());

    assert_eq!(targets.bmr, 1649);
    assert_eq!(targets.tdee, 2556);
    assert_eq!(targets.daily_calories, 2556);
    assert_eq!(targets.protein, 140);
    // 2556 kcal * 14 g / 1000 kcal is above the 35 g clamp
    assert_eq!(targets.fiber, 35);
    assert_eq!(targets.water_ml, 2450);
    assert!((targets.bmi - 22.9).abs() < f64::EPSILON);
    assert_eq!(BmiCategory::from_bmi(targets.bmi), BmiCategory::Normal);
}

#[test]
fn test_weight_loss_uses_default_deficit_for_normal_bmi() {
    let targets = targets_for(&common::profile_with_goal(Goal::WeightLoss));

    assert_eq!(targets.daily_calories, 2256);
    assert_eq!(targets.protein, 154);
    assert_eq!(targets.fat, 55);
    assert_eq!(targets.carbs, 287);
}

#[test]
fn test_weight_loss_deficit_grows_with_bmi() {
    let mut profile = common::profile_with_goal(Goal::WeightLoss);
    profile.weight_kg = 110.0;
    let targets = targets_for(&profile);

    // BMI 35.9 selects the 750 kcal deficit and the obese protein factor
    let bmr: f64 = 10.0 * 110.0 + 6.25 * 175.0 - 5.0 * 30.0 + 5.0;
    let expected = (bmr * 1.55 - 750.0).round() as i64;
    assert_eq!(targets.daily_calories, expected);
    assert_eq!(targets.protein, 264);
}

#[test]
fn test_muscle_gain_adds_banded_surplus() {
    let targets = targets_for(&common::profile_with_goal(Goal::MuscleGain));

    assert_eq!(targets.daily_calories, 2956);
    assert_eq!(targets.protein, 182);
}

#[test]
fn test_weekly_change_overrides_goal_adjustment() {
    let mut gain = common::profile_with_goal(Goal::Maintain);
    gain.weekly_weight_change = 0.5;
    let gain_targets = targets_for(&gain);
    // 0.5 kg * 7700 kcal / 7 days = 550 kcal per day
    assert_eq!(gain_targets.daily_calories, 3106);
    assert_eq!(gain_targets.protein, 168);

    let mut loss = common::profile_with_goal(Goal::WeightLoss);
    loss.weekly_weight_change = 0.5;
    let loss_targets = targets_for(&loss);
    assert_eq!(loss_targets.daily_calories, 2006);
    assert_eq!(loss_targets.protein, 154);
}

#[test]
fn test_calorie_floor_for_senior_women() {
    let profile = UserProfile {
        weight_kg: 40.0,
        height_cm: 150.0,
        age: 60,
        gender: Gender::Female,
        activity_level: ActivityLevel::Sedentary,
        goal: Goal::WeightLoss,
        weekly_weight_change: 0.0,
    };
    let targets = targets_for(&profile);

    assert_eq!(targets.bmr, 877);
    assert_eq!(targets.daily_calories, 1100);
    assert_eq!(BmiCategory::from_bmi(targets.bmi), BmiCategory::Underweight);
}

#[test]
fn test_very_active_users_get_water_bonus() {
    let mut profile = common::maintain_profile();
    profile.activity_level = ActivityLevel::VeryActive;
    let targets = targets_for(&profile);
    assert_eq!(targets.water_ml, 2950);
}

#[test]
fn test_macros_never_go_negative() {
    let mut profile = common::profile_with_goal(Goal::WeightLoss);
    profile.weight_kg = 300.0;
    profile.height_cm = 140.0;
    profile.activity_level = ActivityLevel::Sedentary;
    profile.weekly_weight_change = 10.0;
    let targets = targets_for(&profile);

    assert!(targets.fat >= 0);
    assert!(targets.carbs >= 0);
}

#[test]
fn test_invalid_profiles_are_rejected() {
    let config = NutritionTargetsConfig::default();
    let base = common::maintain_profile();

    let mut young = base.clone();
    young.age = 9;
    let mut heavy = base.clone();
    heavy.weight_kg = 301.0;
    let mut weightless = base.clone();
    weightless.weight_kg = 0.0;
    let mut tall = base.clone();
    tall.height_cm = 300.5;
    let mut undefined_change = base;
    undefined_change.weekly_weight_change = f64::NAN;

    for profile in [young, heavy, weightless, tall, undefined_change] {
        let error = calculate_daily_targets(&profile, &config).unwrap_err();
        assert_eq!(error.code, ErrorCode::InvalidInput);
        assert!(error.code.is_client_error());
    }
}

#[test]
fn test_fallback_targets_are_documented_defaults() {
    let fallback = DailyTargets::fallback();
    assert_eq!(fallback.daily_calories, 2000);
    assert_eq!(fallback.protein, 150);
    assert_eq!(fallback.carbs, 250);
    assert_eq!(fallback.fat, 67);
    assert!((fallback.per_meal_calories(4) - 500.0).abs() < f64::EPSILON);
    assert!(fallback.per_meal_calories(0).abs() < f64::EPSILON);
}
