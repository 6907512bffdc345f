use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{BoardType, WorkoutVersion};

/// A reusable named HTML card design, keyed by unique `name`.
///
/// Templates are consumed by the admin surface only; the fallback resolver
/// never reads them.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Template {
    pub id: String,
    pub name: String,
    pub board: BoardType,
    pub version: Option<WorkoutVersion>,
    pub html_content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
