use chrono::{DateTime, NaiveDate, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{BoardType, WorkoutVersion};

/// The layer-2 backup document: a point-in-time export of every
/// `scheduled`/`live` entry, grouped by date.
///
/// Derived entirely from store state and replaced in full on every rebuild.
/// Never a source of truth for writes - only read during degraded conditions.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Snapshot {
    pub last_updated: DateTime<Utc>,
    pub entries: Vec<SnapshotDay>,
}

/// Per-date record in the snapshot, holding one slot per board.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SnapshotDay {
    pub date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mainboard: Option<BoardSlot>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modboard: Option<BoardSlot>,
}

impl SnapshotDay {
    /// The slot for a given board, if present.
    #[must_use]
    pub const fn slot(&self, board: BoardType) -> Option<&BoardSlot> {
        match board {
            BoardType::Mainboard => self.mainboard.as_ref(),
            BoardType::Modboard => self.modboard.as_ref(),
        }
    }

    /// The slot for a given board, mutably (used while grouping rows).
    pub const fn slot_mut(&mut self, board: BoardType) -> &mut Option<BoardSlot> {
        match board {
            BoardType::Mainboard => &mut self.mainboard,
            BoardType::Modboard => &mut self.modboard,
        }
    }
}

/// One board's entry inside a snapshot day. `html_file` references the
/// layer-3 cache file holding the actual content.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct BoardSlot {
    pub title: String,
    pub version: Option<WorkoutVersion>,
    pub html_file: String,
}
