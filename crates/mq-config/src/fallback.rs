//! Fallback layer paths: HTML cache directory, snapshot document, splash asset.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

fn default_cache_dir() -> PathBuf {
    PathBuf::from(".marquee/cache")
}

fn default_snapshot_path() -> PathBuf {
    PathBuf::from(".marquee/schedule_backup.json")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FallbackConfig {
    /// Directory holding one `{date}_{board}.html` file per scheduled card
    /// (layer 3). Created on first write.
    #[serde(default = "default_cache_dir")]
    pub cache_dir: PathBuf,

    /// The layer-2 JSON snapshot document, replaced in full on every rebuild.
    #[serde(default = "default_snapshot_path")]
    pub snapshot_path: PathBuf,

    /// Optional branded splash asset (layer 4). When unset or unreadable the
    /// inline splash constant is served instead.
    #[serde(default)]
    pub splash_path: Option<PathBuf>,
}

impl Default for FallbackConfig {
    fn default() -> Self {
        Self {
            cache_dir: default_cache_dir(),
            snapshot_path: default_snapshot_path(),
            splash_path: None,
        }
    }
}
