use chrono::{DateTime, NaiveDate, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{AuditAction, BoardType};

/// An append-only audit log entry recording a schedule mutation or a
/// fallback-chain degradation.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AuditEntry {
    pub id: String,
    pub action: AuditAction,
    pub schedule_date: Option<NaiveDate>,
    pub board: Option<BoardType>,
    pub detail: Option<serde_json::Value>,
    pub created_at: DateTime<Utc>,
}
