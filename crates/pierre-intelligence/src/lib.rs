// ABOUTME: Meal planning intelligence crate with pure, I/O-free algorithms
// ABOUTME: Daily nutrition targets, recipe normalization, similarity grouping and goal-aware selection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Intelligence
//!
//! Algorithms behind the Pierre meal planner. Nothing in this crate performs
//! I/O; the root crate loads datasets and hands raw rows to
//! [`recipes::sanitize_records`].
//!
//! ## Modules
//!
//! - **config**: Typed configuration with defaults and environment overrides
//! - **`nutrition_calculator`**: BMI, BMR, TDEE and daily macro targets
//! - **recipes**: The recipe pipeline and meal selector

/// Meal planner configuration
pub mod config;

/// Daily nutrition target calculation
pub mod nutrition_calculator;

/// Recipe normalization, grouping, filtering, scoring and selection
pub mod recipes;

pub use config::MealPlannerConfig;
pub use nutrition_calculator::{
    calculate_daily_targets, ActivityLevel, BmiCategory, DailyTargets, Gender, Goal, UserProfile,
};
