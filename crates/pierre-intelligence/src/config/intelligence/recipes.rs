// ABOUTME: Recipe pipeline configuration for normalization, clustering and candidate filtering
// ABOUTME: Holds the image URL acceptance rules, k-means parameters and calorie tolerance bands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Recipe Pipeline Configuration
//!
//! Constants that shape how raw recipe rows become the working dataset and how
//! the dataset is narrowed to per-meal candidates.

use super::error::ConfigError;
use pierre_core::constants::dataset::LIST_PLACEHOLDERS;
use serde::{Deserialize, Serialize};

/// Field normalization settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NormalizerConfig {
    /// Image host recognized in the `Images` column
    pub image_host: String,
    /// An extracted URL must be strictly longer than this to be accepted
    pub min_image_url_len: usize,
    /// Substring an accepted image URL must contain
    pub image_extension_marker: String,
    /// Maximum items kept for ingredient and instruction lists
    pub max_list_items: usize,
    /// Tokens that mean "no list" in list-valued columns
    pub list_placeholders: Vec<String>,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            image_host: "img.sndimg.com".to_owned(),
            min_image_url_len: 50,
            image_extension_marker: ".jpg".to_owned(),
            max_list_items: 10,
            list_placeholders: LIST_PLACEHOLDERS
                .iter()
                .map(|token| (*token).to_owned())
                .collect(),
        }
    }
}

/// Nutritional similarity clustering settings (k-means on standardized macros)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClusteringConfig {
    /// Number of clusters
    pub cluster_count: usize,
    /// Seed of the initialization generator
    pub seed: u64,
    /// Independent k-means++ restarts; the lowest inertia run wins
    pub restarts: usize,
    /// Upper bound on Lloyd iterations per restart
    pub max_iterations: usize,
}

impl Default for ClusteringConfig {
    fn default() -> Self {
        Self {
            cluster_count: 3,
            seed: 42,
            restarts: 10,
            max_iterations: 300,
        }
    }
}

/// Calorie tolerance band settings for the candidate filter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterConfig {
    /// First tolerance tried around the per-meal target
    pub initial_tolerance: f64,
    /// Tolerance used when the first band admits fewer recipes than meals
    pub widened_tolerance: f64,
    /// Lower bound of the band never drops below this many kcal
    pub min_meal_calories: f64,
    /// Nearest-calorie fallback keeps `meal_count * nearest_multiplier` recipes
    pub nearest_multiplier: usize,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            initial_tolerance: 0.3,
            widened_tolerance: 0.5,
            min_meal_calories: 100.0,
            nearest_multiplier: 2,
        }
    }
}

impl NormalizerConfig {
    /// Validate normalization settings
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the host or list cap is unusable
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.image_host.trim().is_empty() {
            return Err(ConfigError::ValueOutOfRange("image_host must not be empty"));
        }
        if self.max_list_items == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "max_list_items must be at least 1",
            ));
        }
        Ok(())
    }
}

impl ClusteringConfig {
    /// Validate clustering settings
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if any count is zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cluster_count == 0 || self.restarts == 0 || self.max_iterations == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "cluster_count, restarts and max_iterations must be at least 1",
            ));
        }
        Ok(())
    }
}

impl FilterConfig {
    /// Validate tolerance bands
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if tolerances are not increasing within (0, 1]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.initial_tolerance <= 0.0 || self.widened_tolerance > 1.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Calorie tolerances must be within (0, 1]",
            ));
        }
        if self.initial_tolerance >= self.widened_tolerance {
            return Err(ConfigError::InvalidRange(
                "initial_tolerance must be < widened_tolerance",
            ));
        }
        if self.min_meal_calories < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "min_meal_calories must not be negative",
            ));
        }
        if self.nearest_multiplier == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "nearest_multiplier must be at least 1",
            ));
        }
        Ok(())
    }
}
