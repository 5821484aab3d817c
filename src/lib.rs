// ABOUTME: Main library entry point for the Pierre meal planner
// ABOUTME: Dataset I/O, the recommendation service boundary, configuration and logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Meal Planner
//!
//! Turns a user profile and a messy recipe dataset into a goal-aware daily
//! meal plan. The algorithms live in `pierre-intelligence`; this crate adds
//! the I/O around them.
//!
//! ## Architecture
//!
//! - **dataset**: CSV loading and the shared working dataset snapshot
//! - **services**: The recommendation boundary that always returns a payload
//! - **config**: Environment settings and algorithm configuration
//! - **logging**: `tracing` subscriber setup writing to stderr
//!
//! ## Example
//!
//! ```rust,no_run
//! use pierre_meal_planner::dataset::{CachedRecipeSource, CsvRecipeSource};
//! use pierre_meal_planner::services::{MealRecommendationService, RecommendationRequest};
//! use pierre_meal_planner::{
//!     ActivityLevel, FieldNormalizer, Gender, Goal, MealPlannerConfig, UserProfile,
//! };
//! use std::sync::Arc;
//!
//! let config = MealPlannerConfig::default();
//! let source = CsvRecipeSource::new(
//!     "dataset/recipes.csv".into(),
//!     None,
//!     FieldNormalizer::new(&config.normalizer),
//! );
//! let service = MealRecommendationService::new(Arc::new(CachedRecipeSource::new(source)), config);
//!
//! let profile = UserProfile {
//!     weight_kg: 70.0,
//!     height_cm: 175.0,
//!     age: 30,
//!     gender: Gender::Male,
//!     activity_level: ActivityLevel::Moderate,
//!     goal: Goal::Maintain,
//!     weekly_weight_change: 0.0,
//! };
//! let recommendation = service.recommend(&RecommendationRequest::new(profile));
//! println!("{} meals", recommendation.payload().meals.len());
//! ```

/// Configuration management
pub mod config;

/// Recipe dataset loading and caching
pub mod dataset;

/// Structured logging setup
pub mod logging;

/// Recommendation service boundary
pub mod services;

/// Application constants
pub use pierre_core::constants;

/// Unified error handling
pub use pierre_core::errors;

pub use pierre_intelligence::recipes::FieldNormalizer;
pub use pierre_intelligence::{
    ActivityLevel, BmiCategory, DailyTargets, Gender, Goal, MealPlannerConfig, UserProfile,
};
