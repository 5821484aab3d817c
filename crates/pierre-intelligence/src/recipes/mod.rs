// ABOUTME: Recipe pipeline from malformed dataset rows to a goal-aware daily meal plan
// ABOUTME: Normalizer, sanitizer, similarity grouper, candidate filter, goal scorer and meal selector
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Recipes Module
//!
//! Data flows leaf to root:
//!
//! 1. [`normalizer`] parses raw cells into clean scalars and lists
//! 2. [`sanitizer`] builds the working dataset and drops invalid rows
//! 3. [`clustering`] groups records by standardized macros
//! 4. [`candidate_filter`] keeps records inside the per-meal calorie band
//! 5. [`scoring`] assigns goal-dependent scores
//! 6. [`selector`] picks one record per meal slot for the day seed
//!
//! [`planner::plan_meals`] runs steps 3 to 6 for one request.

/// Adaptive calorie tolerance filter
pub mod candidate_filter;
/// Seeded k-means++ similarity grouping
pub mod clustering;
/// Meal timing, portion and template guidance tables
pub mod guidance;
/// Pipeline data models
pub mod models;
/// Raw field normalization
pub mod normalizer;
/// Request-level orchestration
pub mod planner;
/// Working dataset construction
pub mod sanitizer;
/// Goal-dependent scoring
pub mod scoring;
/// Day-seeded meal selection
pub mod selector;

pub use candidate_filter::{filter_candidates, CandidateSet, ToleranceTier};
pub use clustering::{cluster_records, standardize_features, ClusterAssignment};
pub use guidance::{meal_guidance, MealGuidance};
pub use models::{AnnotatedRecord, CleanRecord, MealSlot, MealType, RawRecord, SelectedMeal};
pub use normalizer::{FieldKind, FieldNormalizer, NormalizedValue};
pub use planner::{plan_meals, MealPlan, MealPlanRequest};
pub use sanitizer::{sanitize_record, sanitize_records};
pub use scoring::{score_candidates, score_record};
pub use selector::{select_for_slot, select_meals, DayOffsets, SelectionState};
