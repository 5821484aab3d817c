// ABOUTME: Service layer sitting between the CLI and the planning algorithms
// ABOUTME: Owns request validation, dataset access and graceful degradation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Daily meal plan recommendations
pub mod meal_recommendation;

pub use meal_recommendation::{
    DegradationReason, GoalInsights, MealAnalytics, MealPlanResponse, MealRecommendationService,
    Recommendation, RecommendationRequest, GENERIC_ERROR_MESSAGE,
};
