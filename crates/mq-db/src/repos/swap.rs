//! Midnight swap - advances the schedule lifecycle one day.
//!
//! Two transitions, run in order: yesterday's `live`/`overridden` rows become
//! `archived`, then today's `scheduled` rows become `live`. Exactly one `swap`
//! audit entry is appended per run, even when nothing changed.

use chrono::{Duration, NaiveDate, Utc};
use serde::Serialize;

use mq_core::audit_detail::SwapDetail;
use mq_core::enums::AuditAction;

use crate::error::DatabaseError;
use crate::service::MarqueeService;

/// Result of one daily swap run.
#[derive(Debug, Clone, Serialize)]
pub struct SwapOutcome {
    pub date: NaiveDate,
    pub activated: u32,
}

impl MarqueeService {
    /// Archive yesterday's displayed rows and activate today's scheduled
    /// ones. Idempotent: a second run on the same date archives and
    /// activates nothing but still records a `swap` audit entry.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if an UPDATE or the audit append fails.
    pub async fn run_daily_swap(&self, today: NaiveDate) -> Result<SwapOutcome, DatabaseError> {
        let yesterday = today - Duration::days(1);
        let now = Utc::now().to_rfc3339();

        let archived = self
            .db()
            .conn()
            .execute(
                "UPDATE schedule_entries SET status = 'archived', updated_at = ?1
                 WHERE schedule_date = ?2 AND status IN ('live', 'overridden')",
                libsql::params![now.as_str(), yesterday.to_string()],
            )
            .await?;

        let activated = self
            .db()
            .conn()
            .execute(
                "UPDATE schedule_entries SET status = 'live', updated_at = ?1
                 WHERE schedule_date = ?2 AND status = 'scheduled'",
                libsql::params![now.as_str(), today.to_string()],
            )
            .await?;

        tracing::info!(%today, archived, activated, "daily swap complete");

        self.resync_snapshot().await;

        #[allow(clippy::cast_possible_truncation)]
        let outcome = SwapOutcome {
            date: today,
            activated: activated as u32,
        };

        let detail = SwapDetail {
            activated_count: outcome.activated,
            from_date: yesterday,
        };
        self.log_action(
            AuditAction::Swap,
            Some(today),
            None,
            Some(serde_json::to_value(&detail).map_err(|e| DatabaseError::Other(e.into()))?),
        )
        .await?;

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repos::audit::AuditFilter;
    use crate::repos::schedule::{OverrideRequest, PushRequest};
    use crate::test_support::helpers::test_service;
    use mq_core::enums::{BoardType, EntryStatus, WorkoutVersion};

    fn push(date: &str, board: BoardType) -> PushRequest {
        PushRequest {
            date: date.parse().unwrap(),
            board,
            title: "WOD".to_string(),
            html: "<div/>".to_string(),
            version: Some(WorkoutVersion::Rx),
            date_label: None,
            pushed_by: None,
        }
    }

    #[tokio::test]
    async fn swap_archives_yesterday_activates_today() {
        let svc = test_service().await;
        let today: NaiveDate = "2026-03-14".parse().unwrap();
        let yesterday: NaiveDate = "2026-03-13".parse().unwrap();

        svc.upsert_entry(&push("2026-03-13", BoardType::Mainboard)).await.unwrap();
        svc.run_daily_swap(yesterday).await.unwrap();
        svc.upsert_entry(&push("2026-03-14", BoardType::Mainboard)).await.unwrap();
        svc.upsert_entry(&push("2026-03-14", BoardType::Modboard)).await.unwrap();

        let outcome = svc.run_daily_swap(today).await.unwrap();
        assert_eq!(outcome.activated, 2);
        assert_eq!(outcome.date, today);

        assert_eq!(
            svc.get_entry(yesterday, BoardType::Mainboard).await.unwrap().status,
            EntryStatus::Archived
        );
        assert_eq!(
            svc.get_entry(today, BoardType::Mainboard).await.unwrap().status,
            EntryStatus::Live
        );
        assert_eq!(
            svc.get_entry(today, BoardType::Modboard).await.unwrap().status,
            EntryStatus::Live
        );
    }

    #[tokio::test]
    async fn swap_archives_overridden_rows_too() {
        let svc = test_service().await;
        let yesterday: NaiveDate = "2026-03-13".parse().unwrap();
        let today: NaiveDate = "2026-03-14".parse().unwrap();

        svc.override_board(
            yesterday,
            BoardType::Mainboard,
            OverrideRequest {
                html: Some("<div>X</div>".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

        svc.run_daily_swap(today).await.unwrap();
        assert_eq!(
            svc.get_entry(yesterday, BoardType::Mainboard).await.unwrap().status,
            EntryStatus::Archived
        );
    }

    #[tokio::test]
    async fn swap_leaves_future_and_archived_untouched() {
        let svc = test_service().await;
        let today: NaiveDate = "2026-03-14".parse().unwrap();

        svc.upsert_entry(&push("2026-03-20", BoardType::Mainboard)).await.unwrap();
        svc.run_daily_swap(today).await.unwrap();

        assert_eq!(
            svc.get_entry("2026-03-20".parse().unwrap(), BoardType::Mainboard)
                .await
                .unwrap()
                .status,
            EntryStatus::Scheduled
        );
    }

    #[tokio::test]
    async fn swap_audits_once_even_when_empty() {
        let svc = test_service().await;
        let today: NaiveDate = "2026-03-14".parse().unwrap();

        let outcome = svc.run_daily_swap(today).await.unwrap();
        assert_eq!(outcome.activated, 0);

        let audits = svc
            .query_audit(&AuditFilter {
                action: Some(AuditAction::Swap),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(audits.len(), 1);
        assert_eq!(audits[0].detail.as_ref().unwrap()["activated_count"], 0);
        assert_eq!(audits[0].detail.as_ref().unwrap()["from_date"], "2026-03-13");
    }

    #[tokio::test]
    async fn swap_twice_is_idempotent() {
        let svc = test_service().await;
        let today: NaiveDate = "2026-03-14".parse().unwrap();

        svc.upsert_entry(&push("2026-03-14", BoardType::Mainboard)).await.unwrap();

        let first = svc.run_daily_swap(today).await.unwrap();
        assert_eq!(first.activated, 1);
        let second = svc.run_daily_swap(today).await.unwrap();
        assert_eq!(second.activated, 0);

        assert_eq!(
            svc.get_entry(today, BoardType::Mainboard).await.unwrap().status,
            EntryStatus::Live
        );
    }
}
