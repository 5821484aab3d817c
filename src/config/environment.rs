// ABOUTME: Process-level planner settings loaded from environment variables
// ABOUTME: Dataset location, snapshot caching and row limits, with .env support
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::env_vars;
use pierre_intelligence::config::intelligence::ConfigError;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use tracing::{debug, info};

/// Dataset path used when `MEAL_PLANNER_DATASET_PATH` is not set
pub const DEFAULT_DATASET_PATH: &str = "dataset/recipes.csv";

/// Settings for locating and loading the recipe dataset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannerEnvironment {
    /// Recipe CSV location
    pub dataset_path: PathBuf,
    /// Keep the working dataset in memory across requests
    pub dataset_cache: bool,
    /// Stop reading after this many data rows
    pub max_rows: Option<usize>,
}

impl Default for PlannerEnvironment {
    fn default() -> Self {
        Self {
            dataset_path: PathBuf::from(DEFAULT_DATASET_PATH),
            dataset_cache: true,
            max_rows: None,
        }
    }
}

impl PlannerEnvironment {
    /// Load settings from the environment, reading `.env` first when present
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` if a variable holds an unparseable value
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Err(e) = dotenvy::dotenv() {
            debug!("No .env file loaded: {e}");
        }

        let defaults = Self::default();
        let config = Self {
            dataset_path: env::var(env_vars::DATASET_PATH)
                .map_or(defaults.dataset_path, PathBuf::from),
            dataset_cache: match env::var(env_vars::DATASET_CACHE) {
                Ok(value) => parse_flag(env_vars::DATASET_CACHE, &value)?,
                Err(_) => defaults.dataset_cache,
            },
            max_rows: match env::var(env_vars::MAX_ROWS) {
                Ok(value) => Some(value.trim().parse().map_err(|_| {
                    ConfigError::Parse(format!(
                        "{}: expected a row count, got {value}",
                        env_vars::MAX_ROWS
                    ))
                })?),
                Err(_) => defaults.max_rows,
            },
        };

        info!(
            dataset.path = %config.dataset_path.display(),
            dataset.cache = config.dataset_cache,
            dataset.max_rows = ?config.max_rows,
            "Planner environment loaded"
        );
        Ok(config)
    }

    /// Override the dataset path, typically from a CLI flag
    #[must_use]
    pub fn with_dataset_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.dataset_path = path.into();
        self
    }
}

/// Parse a boolean flag accepting `true/false`, `1/0`, `yes/no` and `on/off`
fn parse_flag(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        other => Err(ConfigError::Parse(format!(
            "{key}: expected a boolean, got {other}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flag_accepts_common_spellings() {
        assert!(parse_flag("X", "Yes").unwrap());
        assert!(!parse_flag("X", " off ").unwrap());
        assert!(parse_flag("X", "maybe").is_err());
    }
}
