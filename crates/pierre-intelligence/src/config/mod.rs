// ABOUTME: Configuration module for pierre-intelligence crate
// ABOUTME: Re-exports meal planner configuration types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Meal planner configuration (normalizer, clustering, filter, scoring, selection, targets)
pub mod intelligence;

pub use intelligence::MealPlannerConfig;
