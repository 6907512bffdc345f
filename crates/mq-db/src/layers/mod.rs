//! Derived fallback layers: JSON snapshot (layer 2), HTML cache (layer 3),
//! splash screen (layer 4).
//!
//! Every schedule mutation in `MarqueeService` fans out through
//! [`LayerWriter`] after the store commit. The layers are derived artifacts -
//! never a source of truth for writes, only read by the resolver during
//! degraded conditions. Write failures here are best-effort by contract:
//! callers log and move on.

pub mod cache;
pub mod snapshot;
pub mod splash;

pub use snapshot::SnapshotLookup;

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use mq_config::FallbackConfig;
use mq_core::entities::{ScheduleEntry, Snapshot};
use mq_core::enums::BoardType;

use crate::error::DatabaseError;

/// Writes and reads the file-side fallback layers.
///
/// Holds the configured cache directory, snapshot path, and optional splash
/// asset. A disabled writer (for DB-only tests) turns every write into a
/// no-op and every read into a miss.
pub struct LayerWriter {
    cache_dir: PathBuf,
    snapshot_path: PathBuf,
    splash_path: Option<PathBuf>,
    enabled: bool,
}

impl LayerWriter {
    /// Create a new `LayerWriter`, creating the cache directory if needed.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the cache directory cannot be created.
    pub fn new(
        cache_dir: PathBuf,
        snapshot_path: PathBuf,
        splash_path: Option<PathBuf>,
    ) -> Result<Self, DatabaseError> {
        std::fs::create_dir_all(&cache_dir).map_err(|e| DatabaseError::Other(e.into()))?;
        Ok(Self {
            cache_dir,
            snapshot_path,
            splash_path,
            enabled: true,
        })
    }

    /// Create a writer from the fallback configuration section.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the cache directory cannot be created.
    pub fn from_config(config: &FallbackConfig) -> Result<Self, DatabaseError> {
        Self::new(
            config.cache_dir.clone(),
            config.snapshot_path.clone(),
            config.splash_path.clone(),
        )
    }

    /// Create a disabled writer (for tests that only exercise the store).
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            cache_dir: PathBuf::new(),
            snapshot_path: PathBuf::new(),
            splash_path: None,
            enabled: false,
        }
    }

    /// Whether layer writing is enabled.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Write one card's HTML to the layer-3 cache. Last write wins.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the file write fails.
    pub fn write_cache(
        &self,
        date: NaiveDate,
        board: BoardType,
        html: &str,
    ) -> Result<(), DatabaseError> {
        if !self.enabled {
            return Ok(());
        }
        cache::write(&self.cache_dir, date, board, html)
    }

    /// Read one card's HTML from the layer-3 cache.
    #[must_use]
    pub fn read_cache(&self, date: NaiveDate, board: BoardType) -> Option<String> {
        if !self.enabled {
            return None;
        }
        cache::read(&self.cache_dir, date, board)
    }

    /// Build a snapshot document from the current store rows.
    #[must_use]
    pub fn build_snapshot(&self, rows: &[ScheduleEntry]) -> Snapshot {
        snapshot::build(rows, &self.cache_dir)
    }

    /// Replace the layer-2 snapshot document in full.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if serialization or the file write fails.
    pub fn write_snapshot(&self, snap: &Snapshot) -> Result<(), DatabaseError> {
        if !self.enabled {
            return Ok(());
        }
        snapshot::write(&self.snapshot_path, snap)
    }

    /// Look up the cache file reference for `(date, board)` in the snapshot.
    ///
    /// The typed result makes the resolver's "treat as absent" policy an
    /// explicit branch instead of a swallowed fault.
    #[must_use]
    pub fn lookup_snapshot(&self, date: NaiveDate, board: BoardType) -> SnapshotLookup {
        if !self.enabled {
            return SnapshotLookup::Missing;
        }
        snapshot::lookup(&self.snapshot_path, date, board)
    }

    /// The layer-4 splash content. Never fails.
    #[must_use]
    pub fn splash(&self) -> String {
        splash::splash_html(self.splash_path.as_deref())
    }

    /// The cache directory (for operator tooling and tests).
    #[must_use]
    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }

    /// The snapshot document path.
    #[must_use]
    pub fn snapshot_path(&self) -> &Path {
        &self.snapshot_path
    }
}
