// ABOUTME: Recipe dataset loading and the shared working dataset snapshot
// ABOUTME: CSV reading, sanitization into clean records and snapshot caching
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Dataset
//!
//! The working dataset is built once per load and then only read. Rows that
//! fail sanitization are dropped individually; only an unreadable file or a
//! header without `Name` and `Calories` fails the load.

/// Snapshot caching recipe sources
pub mod cache;
/// CSV reading
pub mod loader;

pub use cache::{CachedRecipeSource, CsvRecipeSource, InMemoryRecipeSource, RecipeSource};
pub use loader::{load_raw_records, read_raw_records, DatasetError};

use pierre_intelligence::recipes::{sanitize_records, CleanRecord, FieldNormalizer, RawRecord};

/// Sanitized records ready for planning
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkingDataset {
    /// Valid records in source order
    pub records: Vec<CleanRecord>,
    /// Number of rows read before sanitization
    pub source_rows: usize,
}

impl WorkingDataset {
    /// Sanitize raw rows into a working dataset
    #[must_use]
    pub fn build(raw: &[RawRecord], normalizer: &FieldNormalizer) -> Self {
        Self {
            records: sanitize_records(raw, normalizer),
            source_rows: raw.len(),
        }
    }

    /// Number of valid records
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no record survived sanitization
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
