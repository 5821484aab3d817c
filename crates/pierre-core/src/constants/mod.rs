// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants organized by domain for the Pierre meal planner
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! This module organizes application constants by domain for better maintainability.

/// Recipe dataset column names and placeholder tokens
pub mod dataset;
/// Documented fallback nutrition payload and physiological constants
pub mod nutrition;

/// Service names used in structured logs
pub mod service_names {
    /// Name reported by the meal planner in startup logs
    pub const PIERRE_MEAL_PLANNER: &str = "pierre-meal-planner";
}

/// Environment variable names read by the planner
pub mod env_vars {
    /// Path of the recipe CSV dataset
    pub const DATASET_PATH: &str = "MEAL_PLANNER_DATASET_PATH";
    /// Enables the read-only dataset snapshot cache when truthy
    pub const DATASET_CACHE: &str = "MEAL_PLANNER_DATASET_CACHE";
    /// Upper bound on dataset rows read per load
    pub const MAX_ROWS: &str = "MEAL_PLANNER_MAX_ROWS";
}
