//! Layer-2 JSON snapshot: a full export of every `scheduled`/`live` entry,
//! grouped by date, written as a single externally-inspectable document.
//!
//! The snapshot is always rebuilt from one observed store state and replaced
//! in full - never merged incrementally - so it can never mix stale and fresh
//! fragments.

use std::path::{Path, PathBuf};

use chrono::{NaiveDate, Utc};
use mq_core::entities::{BoardSlot, ScheduleEntry, Snapshot, SnapshotDay};
use mq_core::enums::BoardType;

use super::cache;
use crate::error::DatabaseError;

/// Outcome of a snapshot lookup for one `(date, board)` key.
///
/// `Missing` and `Malformed` both make the resolver continue down the chain,
/// but the distinction is visible to operators via logs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnapshotLookup {
    /// The snapshot references a cache file for this key.
    Found(PathBuf),
    /// No snapshot, no entry for the date, or no slot for the board.
    Missing,
    /// The snapshot exists but could not be parsed.
    Malformed(String),
}

/// Build a snapshot document from store rows (pre-filtered to
/// `scheduled`/`live`), grouped by date in ascending order.
#[must_use]
pub fn build(rows: &[ScheduleEntry], cache_dir: &Path) -> Snapshot {
    let mut days: Vec<SnapshotDay> = Vec::new();
    for row in rows {
        let idx = days
            .iter()
            .position(|d| d.date == row.schedule_date)
            .unwrap_or_else(|| {
                days.push(SnapshotDay {
                    date: row.schedule_date,
                    mainboard: None,
                    modboard: None,
                });
                days.len() - 1
            });
        let day = &mut days[idx];
        *day.slot_mut(row.board) = Some(BoardSlot {
            title: row.workout_title.clone(),
            version: row.version,
            html_file: cache::file_path(cache_dir, row.schedule_date, row.board)
                .to_string_lossy()
                .into_owned(),
        });
    }
    days.sort_by_key(|d| d.date);

    Snapshot {
        last_updated: Utc::now(),
        entries: days,
    }
}

/// Replace the snapshot document at `path` in full.
///
/// # Errors
///
/// Returns `DatabaseError` if serialization or the file write fails.
pub fn write(path: &Path, snap: &Snapshot) -> Result<(), DatabaseError> {
    let json = serde_json::to_string_pretty(snap).map_err(|e| DatabaseError::Other(e.into()))?;
    std::fs::write(path, json).map_err(|e| DatabaseError::Other(e.into()))
}

/// Read the whole snapshot document, if present and well-formed.
///
/// # Errors
///
/// Returns `DatabaseError` if the file exists but cannot be parsed.
pub fn read(path: &Path) -> Result<Option<Snapshot>, DatabaseError> {
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(_) => return Ok(None),
    };
    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|e| DatabaseError::Query(format!("Malformed snapshot: {e}")))
}

/// Look up the cache file reference for `(date, board)`.
#[must_use]
pub fn lookup(path: &Path, date: NaiveDate, board: BoardType) -> SnapshotLookup {
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(_) => return SnapshotLookup::Missing,
    };
    let snap: Snapshot = match serde_json::from_str(&raw) {
        Ok(snap) => snap,
        Err(e) => return SnapshotLookup::Malformed(e.to_string()),
    };
    snap.entries
        .iter()
        .find(|day| day.date == date)
        .and_then(|day| day.slot(board))
        .map_or(SnapshotLookup::Missing, |slot| {
            SnapshotLookup::Found(PathBuf::from(&slot.html_file))
        })
}
