// ABOUTME: Configuration module for the meal planner binary and services
// ABOUTME: Combines process environment settings with the algorithm configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module
//!
//! - **Environment**: dataset location and loading options from environment variables
//! - **Intelligence**: algorithm constants re-exported from `pierre-intelligence`

/// Environment and dataset configuration
pub mod environment;

pub use environment::{PlannerEnvironment, DEFAULT_DATASET_PATH};
pub use pierre_intelligence::config::intelligence::{ConfigError, MealPlannerConfig};
