//! Layer-3 static HTML cache.
//!
//! One flat file per `(date, board)` key, named deterministically so the
//! resolver - and an operator mid-incident - can locate a card without any
//! index: `{cache_dir}/{date}_{board}.html`.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use mq_core::enums::BoardType;

use crate::error::DatabaseError;

/// Deterministic cache file name for a `(date, board)` key.
#[must_use]
pub fn file_name(date: NaiveDate, board: BoardType) -> String {
    format!("{date}_{board}.html")
}

/// Full path of the cache file for a `(date, board)` key.
#[must_use]
pub fn file_path(cache_dir: &Path, date: NaiveDate, board: BoardType) -> PathBuf {
    cache_dir.join(file_name(date, board))
}

/// Overwrite the cache file for a key. Last write wins, no versioning.
///
/// # Errors
///
/// Returns `DatabaseError` if the write fails.
pub fn write(
    cache_dir: &Path,
    date: NaiveDate,
    board: BoardType,
    html: &str,
) -> Result<(), DatabaseError> {
    std::fs::write(file_path(cache_dir, date, board), html)
        .map_err(|e| DatabaseError::Other(e.into()))
}

/// Read the cache file for a key, if present and readable.
#[must_use]
pub fn read(cache_dir: &Path, date: NaiveDate, board: BoardType) -> Option<String> {
    std::fs::read_to_string(file_path(cache_dir, date, board)).ok()
}
