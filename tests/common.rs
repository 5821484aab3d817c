// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging, standard profiles and CSV dataset fixtures
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `pierre_meal_planner`

use pierre_meal_planner::{ActivityLevel, Gender, Goal, MealPlannerConfig, UserProfile};
use std::env;
use std::io::Write;
use std::sync::Once;
use tempfile::NamedTempFile;
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // TEST_LOG controls the level, WARN keeps test output quiet
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Default algorithm configuration
pub fn test_config() -> MealPlannerConfig {
    MealPlannerConfig::default()
}

/// 70 kg, 175 cm, 30 year old moderately active male maintaining weight
pub fn maintain_profile() -> UserProfile {
    UserProfile {
        weight_kg: 70.0,
        height_cm: 175.0,
        age: 30,
        gender: Gender::Male,
        activity_level: ActivityLevel::Moderate,
        goal: Goal::Maintain,
        weekly_weight_change: 0.0,
    }
}

/// Profile with a different goal, otherwise identical to [`maintain_profile`]
pub fn profile_with_goal(goal: Goal) -> UserProfile {
    UserProfile {
        goal,
        ..maintain_profile()
    }
}

/// Write CSV text to a temporary file that lives as long as the handle
pub fn write_csv_fixture(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .prefix("recipes_")
        .suffix(".csv")
        .tempfile()
        .expect("create temporary dataset");
    file.write_all(contents.as_bytes())
        .expect("write temporary dataset");
    file.flush().expect("flush temporary dataset");
    file
}
