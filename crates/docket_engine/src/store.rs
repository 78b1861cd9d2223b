//! Dataset persistence: the canonical `bills.csv` and grid exports.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use docket_logging::docket_warn;
use thiserror::Error;

use crate::persist::{write_atomic, PersistError};
use crate::record::{BillRecord, ALL_COLUMNS, REQUIRED_COLUMNS};

/// Fixed location of the canonical dataset inside the output directory.
pub const DATASET_FILENAME: &str = "bills.csv";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("persist error: {0}")]
    Persist(#[from] PersistError),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// A table as read back from disk. Extra columns beyond the required set
/// (such as `Action`) are retained.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LoadedTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl LoadedTable {
    /// The degraded fallback: required columns, no rows.
    pub fn empty() -> Self {
        Self {
            headers: REQUIRED_COLUMNS.iter().map(|name| name.to_string()).collect(),
            rows: Vec::new(),
        }
    }
}

/// Fully overwrite the dataset with the given records.
///
/// The header row is always present, even for an empty scrape. There is no
/// merge with prior runs; the file on disk is replaced wholesale.
pub fn write_dataset(dir: &Path, records: &[BillRecord]) -> Result<PathBuf, StoreError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    writer.write_record(&ALL_COLUMNS)?;
    for record in records {
        writer.serialize(record)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|err| StoreError::Io(err.into_error()))?;
    Ok(write_atomic(dir, DATASET_FILENAME, &bytes)?)
}

/// Write an edited grid verbatim, the export path. No re-validation: the
/// rows are whatever the presentation layer staged.
pub fn write_grid(
    dir: &Path,
    filename: &str,
    headers: &[String],
    rows: &[Vec<String>],
) -> Result<PathBuf, StoreError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    writer.write_record(headers)?;
    for row in rows {
        writer.write_record(row)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|err| StoreError::Io(err.into_error()))?;
    Ok(write_atomic(dir, filename, &bytes)?)
}

/// Load the dataset for the presentation layer.
///
/// A missing, unreadable, empty, malformed, or column-deficient file
/// degrades to an empty table with the required column set; every degrade
/// path logs a warning instead of failing.
pub fn load_dataset(dir: &Path) -> LoadedTable {
    let path = dir.join(DATASET_FILENAME);
    let text = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            docket_warn!("No dataset at {:?}; starting with an empty table", path);
            return LoadedTable::empty();
        }
        Err(err) => {
            docket_warn!("Failed to read dataset from {:?}: {}", path, err);
            return LoadedTable::empty();
        }
    };

    if text.trim().is_empty() {
        docket_warn!("Dataset at {:?} is empty", path);
        return LoadedTable::empty();
    }

    let mut reader = csv::Reader::from_reader(text.as_bytes());
    let headers: Vec<String> = match reader.headers() {
        Ok(headers) => headers.iter().map(str::to_string).collect(),
        Err(err) => {
            docket_warn!("Failed to parse dataset header in {:?}: {}", path, err);
            return LoadedTable::empty();
        }
    };

    let missing: Vec<&str> = REQUIRED_COLUMNS
        .iter()
        .copied()
        .filter(|required| !headers.iter().any(|header| header == required))
        .collect();
    if !missing.is_empty() {
        docket_warn!("Dataset at {:?} is missing required columns: {:?}", path, missing);
        return LoadedTable::empty();
    }

    let mut rows = Vec::new();
    for result in reader.records() {
        match result {
            Ok(record) => rows.push(record.iter().map(str::to_string).collect()),
            Err(err) => {
                docket_warn!("Malformed row in dataset {:?}: {}", path, err);
                return LoadedTable::empty();
            }
        }
    }

    LoadedTable { headers, rows }
}
