// ABOUTME: Recipe CSV reader producing header-keyed raw records
// ABOUTME: Tolerates ragged rows and invalid UTF-8, rejects files missing mandatory columns
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::dataset::MANDATORY_COLUMNS;
use crate::errors::AppError;
use pierre_intelligence::recipes::RawRecord;
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Failures that make the whole dataset unusable
#[derive(Debug, Error)]
pub enum DatasetError {
    /// The file could not be opened
    #[error("Failed to open dataset {path}: {source}")]
    Io {
        /// Dataset location
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The header row could not be parsed
    #[error("Failed to parse dataset: {0}")]
    Csv(#[from] csv::Error),

    /// Mandatory columns are absent from the header
    #[error("Dataset is missing mandatory columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),
}

impl From<DatasetError> for AppError {
    fn from(error: DatasetError) -> Self {
        let app_error = match &error {
            DatasetError::MissingColumns(_) => Self::dataset_shape(error.to_string()),
            DatasetError::Io { .. } | DatasetError::Csv(_) => {
                Self::dataset_unavailable(error.to_string())
            }
        };
        app_error.with_source(error)
    }
}

/// Read raw records from a CSV file
///
/// # Errors
///
/// Returns `DatasetError::Io` if the file cannot be opened, otherwise see
/// [`read_raw_records`]
pub fn load_raw_records(
    path: &Path,
    max_rows: Option<usize>,
) -> Result<Vec<RawRecord>, DatasetError> {
    let file = File::open(path).map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let records = read_raw_records(file, max_rows)?;
    info!(
        dataset.path = %path.display(),
        rows = records.len(),
        "Read raw dataset rows"
    );
    Ok(records)
}

/// Read raw records from any CSV source
///
/// Cells are decoded lossily, rows with a different field count than the
/// header keep the cells they have, and rows the CSV parser rejects are
/// skipped. `row_index` counts data rows from zero, skipped rows included.
///
/// # Errors
///
/// Returns `DatasetError::Csv` if the header cannot be read, or
/// `DatasetError::MissingColumns` if `Name` or `Calories` is absent
pub fn read_raw_records<R: Read>(
    reader: R,
    max_rows: Option<usize>,
) -> Result<Vec<RawRecord>, DatasetError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .has_headers(true)
        .from_reader(reader);

    let headers: Vec<String> = reader
        .byte_headers()?
        .iter()
        .map(|header| String::from_utf8_lossy(header).trim().to_owned())
        .collect();

    let missing: Vec<String> = MANDATORY_COLUMNS
        .iter()
        .filter(|column| !headers.iter().any(|header| header == *column))
        .map(|column| (*column).to_owned())
        .collect();
    if !missing.is_empty() {
        return Err(DatasetError::MissingColumns(missing));
    }

    let limit = max_rows.unwrap_or(usize::MAX);
    let mut records = Vec::new();
    let mut skipped = 0_usize;

    for (row_index, row) in reader.byte_records().enumerate().take(limit) {
        match row {
            Ok(row) => records.push(RawRecord::new(
                row_index,
                headers
                    .iter()
                    .zip(row.iter())
                    .map(|(header, cell)| (header.as_str(), String::from_utf8_lossy(cell))),
            )),
            Err(e) => {
                skipped += 1;
                debug!(row_index, "Skipping unparseable dataset row: {e}");
            }
        }
    }

    if skipped > 0 {
        debug!(skipped, "Dataset rows rejected by the CSV parser");
    }
    Ok(records)
}
