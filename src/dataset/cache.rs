// ABOUTME: Recipe sources providing the working dataset to recommendation requests
// ABOUTME: Direct CSV source plus a read-only snapshot cache shared across requests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::loader::{load_raw_records, DatasetError};
use super::WorkingDataset;
use crate::logging::AppLogger;
use pierre_intelligence::recipes::{FieldNormalizer, RawRecord};
use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock};
use std::time::Instant;
use tracing::debug;

/// Provider of the working dataset
///
/// Implementations hand out shared, immutable snapshots so concurrent
/// requests never observe a partially built dataset.
pub trait RecipeSource: Send + Sync {
    /// Current working dataset
    ///
    /// # Errors
    ///
    /// Returns a `DatasetError` if the dataset cannot be read or has the wrong shape
    fn working_dataset(&self) -> Result<Arc<WorkingDataset>, DatasetError>;
}

/// Reads and sanitizes the CSV file on every call
#[derive(Debug, Clone)]
pub struct CsvRecipeSource {
    path: PathBuf,
    max_rows: Option<usize>,
    normalizer: FieldNormalizer,
}

impl CsvRecipeSource {
    /// Source reading `path`, optionally stopping after `max_rows` rows
    #[must_use]
    pub const fn new(path: PathBuf, max_rows: Option<usize>, normalizer: FieldNormalizer) -> Self {
        Self {
            path,
            max_rows,
            normalizer,
        }
    }

    /// Dataset location
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecipeSource for CsvRecipeSource {
    fn working_dataset(&self) -> Result<Arc<WorkingDataset>, DatasetError> {
        let started = Instant::now();
        let raw = load_raw_records(&self.path, self.max_rows)?;
        let dataset = WorkingDataset::build(&raw, &self.normalizer);
        AppLogger::log_dataset_load(
            &self.path.display().to_string(),
            dataset.source_rows,
            dataset.len(),
            u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
        );
        Ok(Arc::new(dataset))
    }
}

/// Rows already in memory, sanitized once at construction
#[derive(Debug, Clone)]
pub struct InMemoryRecipeSource {
    dataset: Arc<WorkingDataset>,
}

impl InMemoryRecipeSource {
    /// Sanitize `raw` into a fixed working dataset
    #[must_use]
    pub fn new(raw: &[RawRecord], normalizer: &FieldNormalizer) -> Self {
        Self {
            dataset: Arc::new(WorkingDataset::build(raw, normalizer)),
        }
    }
}

impl RecipeSource for InMemoryRecipeSource {
    fn working_dataset(&self) -> Result<Arc<WorkingDataset>, DatasetError> {
        Ok(Arc::clone(&self.dataset))
    }
}

/// Loads the inner source once and serves the same snapshot afterwards
///
/// A failed load is not cached; the next call retries.
#[derive(Debug)]
pub struct CachedRecipeSource<S> {
    inner: S,
    snapshot: RwLock<Option<Arc<WorkingDataset>>>,
}

impl<S: RecipeSource> CachedRecipeSource<S> {
    /// Wrap `inner` with an empty cache
    #[must_use]
    pub const fn new(inner: S) -> Self {
        Self {
            inner,
            snapshot: RwLock::new(None),
        }
    }

    /// Whether a snapshot is currently cached
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.snapshot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// Reload from the inner source and replace the cached snapshot
    ///
    /// Requests holding the previous snapshot keep using it.
    ///
    /// # Errors
    ///
    /// Returns the inner source's error; the previous snapshot stays cached
    pub fn refresh(&self) -> Result<Arc<WorkingDataset>, DatasetError> {
        let dataset = self.inner.working_dataset()?;
        let mut slot = self.snapshot.write().unwrap_or_else(PoisonError::into_inner);
        *slot = Some(Arc::clone(&dataset));
        drop(slot);
        debug!(records = dataset.len(), "Replaced cached working dataset");
        Ok(dataset)
    }
}

impl<S: RecipeSource> RecipeSource for CachedRecipeSource<S> {
    fn working_dataset(&self) -> Result<Arc<WorkingDataset>, DatasetError> {
        if let Some(dataset) = self
            .snapshot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
        {
            return Ok(Arc::clone(dataset));
        }

        let mut slot = self.snapshot.write().unwrap_or_else(PoisonError::into_inner);
        // Another caller may have loaded while we waited for the write lock
        if let Some(dataset) = slot.as_ref() {
            return Ok(Arc::clone(dataset));
        }
        let dataset = self.inner.working_dataset()?;
        *slot = Some(Arc::clone(&dataset));
        Ok(dataset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingSource {
        loads: AtomicUsize,
    }

    impl RecipeSource for CountingSource {
        fn working_dataset(&self) -> Result<Arc<WorkingDataset>, DatasetError> {
            self.loads.fetch_add(1, Ordering::SeqCst);
            Ok(Arc::new(WorkingDataset::default()))
        }
    }

    #[test]
    fn test_cache_loads_once_until_refreshed() {
        let cache = CachedRecipeSource::new(CountingSource {
            loads: AtomicUsize::new(0),
        });
        assert!(!cache.is_loaded());

        let first = cache.working_dataset().unwrap();
        let second = cache.working_dataset().unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.inner.loads.load(Ordering::SeqCst), 1);

        cache.refresh().unwrap();
        assert_eq!(cache.inner.loads.load(Ordering::SeqCst), 2);
    }
}
