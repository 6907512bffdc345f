use chrono::{DateTime, NaiveDate, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{BoardType, EntryStatus, WorkoutVersion};

/// One unit of content for one board on one calendar day.
///
/// Unique per `(schedule_date, board)` - pushes replace in place, never
/// duplicate. `content_hash` is derived from `html_content` on every write.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ScheduleEntry {
    pub id: String,
    pub schedule_date: NaiveDate,
    pub board: BoardType,
    pub workout_title: String,
    pub workout_date_label: Option<String>,
    pub version: Option<WorkoutVersion>,
    pub html_content: String,
    pub content_hash: String,
    pub status: EntryStatus,
    pub pushed_by: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Both boards' entries for a single date, as returned by point lookups.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DaySchedule {
    pub date: NaiveDate,
    pub mainboard: Option<ScheduleEntry>,
    pub modboard: Option<ScheduleEntry>,
}

impl DaySchedule {
    /// The entry for a given board, if any.
    #[must_use]
    pub const fn board(&self, board: BoardType) -> Option<&ScheduleEntry> {
        match board {
            BoardType::Mainboard => self.mainboard.as_ref(),
            BoardType::Modboard => self.modboard.as_ref(),
        }
    }
}
