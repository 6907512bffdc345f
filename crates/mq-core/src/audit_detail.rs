//! Typed audit detail payloads.
//!
//! Each audit action carries a structured `detail` JSON blob. These types pin
//! down the shape each action writes, instead of ad-hoc maps.

use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::WorkoutVersion;

/// Detail for `AuditAction::Schedule`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ScheduledDetail {
    pub title: String,
    pub version: Option<WorkoutVersion>,
    pub pushed_by: Option<String>,
}

/// Detail for `AuditAction::Edit` - the names of the fields that changed.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct EditedDetail {
    pub changes: Vec<String>,
}

/// Detail for `AuditAction::Override`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct OverrideDetail {
    pub reason: Option<String>,
    pub source_date: Option<NaiveDate>,
}

/// Detail for `AuditAction::Swap` - one per run, even when nothing moved.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SwapDetail {
    pub activated_count: u32,
    pub from_date: NaiveDate,
}

/// Detail for `AuditAction::FallbackTriggered` - which degraded layer served
/// the content and where it came from.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct FallbackDetail {
    pub layer: u8,
    pub source: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swap_detail_shape() {
        let detail = SwapDetail {
            activated_count: 2,
            from_date: NaiveDate::from_ymd_opt(2026, 3, 14).unwrap(),
        };
        let json = serde_json::to_value(&detail).unwrap();
        assert_eq!(json["activated_count"], 2);
        assert_eq!(json["from_date"], "2026-03-14");
    }

    #[test]
    fn fallback_detail_shape() {
        let detail = FallbackDetail {
            layer: 2,
            source: "json_snapshot".into(),
        };
        let json = serde_json::to_value(&detail).unwrap();
        assert_eq!(json["layer"], 2);
        assert_eq!(json["source"], "json_snapshot");
    }
}
