//! Schedule repository - upsert, edit, lookups, range, delete, override.
//!
//! Every mutation commits the authoritative store write first, then fans out
//! to the HTML cache and snapshot (best-effort), then appends an audit entry.

use chrono::{NaiveDate, Utc};

use mq_core::audit_detail::{EditedDetail, OverrideDetail, ScheduledDetail};
use mq_core::entities::{DaySchedule, ScheduleEntry};
use mq_core::enums::{AuditAction, BoardType, EntryStatus, WorkoutVersion};
use mq_core::hash::content_hash;

use crate::error::DatabaseError;
use crate::helpers::{get_opt_string, parse_date, parse_datetime, parse_enum, parse_optional_enum};
use crate::service::MarqueeService;
use crate::updates::schedule::ScheduleUpdate;

const SELECT_COLS: &str = "id, schedule_date, board_type, workout_title, workout_date_label, \
     version, html_content, content_hash, status, pushed_by, created_at, updated_at";

fn row_to_entry(row: &libsql::Row) -> Result<ScheduleEntry, DatabaseError> {
    Ok(ScheduleEntry {
        id: row.get(0)?,
        schedule_date: parse_date(&row.get::<String>(1)?)?,
        board: parse_enum(&row.get::<String>(2)?)?,
        workout_title: row.get(3)?,
        workout_date_label: get_opt_string(row, 4)?,
        version: parse_optional_enum(get_opt_string(row, 5)?.as_deref())?,
        html_content: row.get(6)?,
        content_hash: row.get(7)?,
        status: parse_enum(&row.get::<String>(8)?)?,
        pushed_by: get_opt_string(row, 9)?,
        created_at: parse_datetime(&row.get::<String>(10)?)?,
        updated_at: parse_datetime(&row.get::<String>(11)?)?,
    })
}

/// A push of one card to one board for one date.
#[derive(Debug, Clone)]
pub struct PushRequest {
    pub date: NaiveDate,
    pub board: BoardType,
    pub title: String,
    pub html: String,
    pub version: Option<WorkoutVersion>,
    pub date_label: Option<String>,
    pub pushed_by: Option<String>,
}

/// An emergency replacement of today's card on one board.
///
/// Exactly one of `html` or `source_date` must resolve to content.
#[derive(Debug, Clone, Default)]
pub struct OverrideRequest {
    pub html: Option<String>,
    pub source_date: Option<NaiveDate>,
    pub version: Option<WorkoutVersion>,
    pub reason: Option<String>,
}

impl MarqueeService {
    /// Insert or replace the card for `(date, board)`.
    ///
    /// A re-push always resets `status` to `scheduled`, overriding any prior
    /// `live`/`overridden`/`archived` state. The cache and snapshot writes are
    /// best-effort; only the store write can fail the call.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the store write or the audit append fails.
    pub async fn upsert_entry(&self, req: &PushRequest) -> Result<ScheduleEntry, DatabaseError> {
        let now = Utc::now();
        let id = self.db().generate_id(mq_core::ids::PREFIX_SCHEDULE).await?;
        let hash = content_hash(&req.html);

        self.db()
            .conn()
            .execute(
                &format!(
                    "INSERT INTO schedule_entries ({SELECT_COLS})
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)
                     ON CONFLICT (schedule_date, board_type) DO UPDATE SET
                       workout_title = excluded.workout_title,
                       workout_date_label = excluded.workout_date_label,
                       version = excluded.version,
                       html_content = excluded.html_content,
                       content_hash = excluded.content_hash,
                       status = 'scheduled',
                       pushed_by = excluded.pushed_by,
                       updated_at = excluded.updated_at"
                ),
                libsql::params![
                    id.as_str(),
                    req.date.to_string(),
                    req.board.as_str(),
                    req.title.as_str(),
                    req.date_label.as_deref(),
                    req.version.map(WorkoutVersion::as_str),
                    req.html.as_str(),
                    hash.as_str(),
                    EntryStatus::Scheduled.as_str(),
                    req.pushed_by.as_deref(),
                    now.to_rfc3339(),
                    now.to_rfc3339()
                ],
            )
            .await?;

        // On conflict the original row id survives; re-read for the stored state.
        let entry = self.get_entry(req.date, req.board).await?;

        self.sync_layers(&entry);
        self.resync_snapshot().await;

        let detail = ScheduledDetail {
            title: entry.workout_title.clone(),
            version: entry.version,
            pushed_by: entry.pushed_by.clone(),
        };
        self.log_action(
            AuditAction::Schedule,
            Some(req.date),
            Some(req.board),
            Some(serde_json::to_value(&detail).map_err(|e| DatabaseError::Other(e.into()))?),
        )
        .await?;

        Ok(entry)
    }

    /// The entry for `(date, board)`, if any.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn find_entry(
        &self,
        date: NaiveDate,
        board: BoardType,
    ) -> Result<Option<ScheduleEntry>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM schedule_entries
                     WHERE schedule_date = ?1 AND board_type = ?2"
                ),
                libsql::params![date.to_string(), board.as_str()],
            )
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_entry(&row)?)),
            None => Ok(None),
        }
    }

    /// The entry for `(date, board)`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NoResult` if no row exists.
    pub async fn get_entry(
        &self,
        date: NaiveDate,
        board: BoardType,
    ) -> Result<ScheduleEntry, DatabaseError> {
        self.find_entry(date, board)
            .await?
            .ok_or(DatabaseError::NoResult)
    }

    /// Both boards' entries for a date.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn get_for_date(&self, date: NaiveDate) -> Result<DaySchedule, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM schedule_entries WHERE schedule_date = ?1"),
                [date.to_string()],
            )
            .await?;

        let mut day = DaySchedule {
            date,
            mainboard: None,
            modboard: None,
        };
        while let Some(row) = rows.next().await? {
            let entry = row_to_entry(&row)?;
            match entry.board {
                BoardType::Mainboard => day.mainboard = Some(entry),
                BoardType::Modboard => day.modboard = Some(entry),
            }
        }
        Ok(day)
    }

    /// Entries in an optional date range, ordered (date ASC, board ASC), with
    /// offset pagination. Returns the page and the total count - the total is
    /// independent of `page_size`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if a query fails.
    pub async fn get_range(
        &self,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
        page: u32,
        page_size: u32,
    ) -> Result<(Vec<ScheduleEntry>, u64), DatabaseError> {
        let mut conditions = Vec::new();
        let mut params: Vec<libsql::Value> = Vec::new();

        if let Some(start) = start {
            params.push(libsql::Value::Text(start.to_string()));
            conditions.push(format!("schedule_date >= ?{}", params.len()));
        }
        if let Some(end) = end {
            params.push(libsql::Value::Text(end.to_string()));
            conditions.push(format!("schedule_date <= ?{}", params.len()));
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT COUNT(*) FROM schedule_entries {where_clause}"),
                libsql::params_from_iter(params.clone()),
            )
            .await?;
        let total = rows
            .next()
            .await?
            .ok_or(DatabaseError::NoResult)?
            .get::<i64>(0)?;
        #[allow(clippy::cast_sign_loss)]
        let total = total as u64;

        let offset = page.saturating_sub(1) * page_size;
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM schedule_entries {where_clause}
                     ORDER BY schedule_date ASC, board_type ASC
                     LIMIT {page_size} OFFSET {offset}"
                ),
                libsql::params_from_iter(params),
            )
            .await?;

        let mut entries = Vec::new();
        while let Some(row) = rows.next().await? {
            entries.push(row_to_entry(&row)?);
        }
        Ok((entries, total))
    }

    /// Apply a partial edit to `(date, board)`. Only supplied fields change;
    /// editing the HTML recomputes the content hash. An empty update returns
    /// the row unchanged without auditing.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NoResult` if no row exists for the key.
    pub async fn edit_entry(
        &self,
        date: NaiveDate,
        board: BoardType,
        update: ScheduleUpdate,
    ) -> Result<ScheduleEntry, DatabaseError> {
        let existing = self.get_entry(date, board).await?;
        if update.is_empty() {
            return Ok(existing);
        }

        let mut sets = Vec::new();
        let mut params: Vec<libsql::Value> = Vec::new();
        let mut changes = Vec::new();
        let mut idx = 1usize;

        if let Some(ref title) = update.workout_title {
            sets.push(format!("workout_title = ?{idx}"));
            params.push(title.clone().into());
            changes.push("workout_title".to_string());
            idx += 1;
        }
        if let Some(ref html) = update.html_content {
            sets.push(format!("html_content = ?{idx}"));
            params.push(html.clone().into());
            changes.push("html_content".to_string());
            idx += 1;
            sets.push(format!("content_hash = ?{idx}"));
            params.push(content_hash(html).into());
            changes.push("content_hash".to_string());
            idx += 1;
        }
        if let Some(version) = update.version {
            sets.push(format!("version = ?{idx}"));
            params.push(version.as_str().into());
            changes.push("version".to_string());
            idx += 1;
        }

        let now = Utc::now();
        sets.push(format!("updated_at = ?{idx}"));
        params.push(now.to_rfc3339().into());
        idx += 1;

        params.push(date.to_string().into());
        let date_idx = idx;
        idx += 1;
        params.push(board.as_str().into());

        let sql = format!(
            "UPDATE schedule_entries SET {} WHERE schedule_date = ?{date_idx} AND board_type = ?{idx}",
            sets.join(", ")
        );
        self.db()
            .conn()
            .execute(&sql, libsql::params_from_iter(params))
            .await?;

        let updated = self.get_entry(date, board).await?;

        self.sync_layers(&updated);
        self.resync_snapshot().await;

        let detail = EditedDetail { changes };
        self.log_action(
            AuditAction::Edit,
            Some(date),
            Some(board),
            Some(serde_json::to_value(&detail).map_err(|e| DatabaseError::Other(e.into()))?),
        )
        .await?;

        Ok(updated)
    }

    /// Hard-delete all rows for a date. Returns the number of boards removed.
    /// The snapshot is rebuilt afterward; one `delete` audit is appended per
    /// removed board.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the delete or the audit appends fail.
    pub async fn delete_for_date(&self, date: NaiveDate) -> Result<u32, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT board_type FROM schedule_entries WHERE schedule_date = ?1",
                [date.to_string()],
            )
            .await?;
        let mut boards: Vec<BoardType> = Vec::new();
        while let Some(row) = rows.next().await? {
            boards.push(parse_enum(&row.get::<String>(0)?)?);
        }

        self.db()
            .conn()
            .execute(
                "DELETE FROM schedule_entries WHERE schedule_date = ?1",
                [date.to_string()],
            )
            .await?;

        self.resync_snapshot().await;

        for board in &boards {
            self.log_action(AuditAction::Delete, Some(date), Some(*board), None)
                .await?;
        }

        #[allow(clippy::cast_possible_truncation)]
        let removed = boards.len() as u32;
        Ok(removed)
    }

    /// Emergency replacement of today's card on one board.
    ///
    /// Marks any currently `live` row for `(today, board)` as `overridden`,
    /// upserts a new `OVERRIDE` row for today, then forces its status to
    /// `overridden` (bypassing the upsert's `scheduled` reset). Succeeds even
    /// when no prior `live` row exists.
    ///
    /// # Errors
    ///
    /// - `DatabaseError::InvalidInput` if neither `html` nor a resolvable
    ///   `source_date` is supplied.
    /// - `DatabaseError::NoResult` if `source_date` is given but has no row
    ///   for the board.
    pub async fn override_board(
        &self,
        today: NaiveDate,
        board: BoardType,
        req: OverrideRequest,
    ) -> Result<ScheduleEntry, DatabaseError> {
        let mut html = req.html;
        let mut version = req.version;

        if html.is_none() {
            if let Some(source_date) = req.source_date {
                let source = self.get_entry(source_date, board).await?;
                html = Some(source.html_content);
                if version.is_none() {
                    version = source.version;
                }
            }
        }

        let Some(html) = html else {
            return Err(DatabaseError::InvalidInput(
                "either html content or a source date is required".into(),
            ));
        };

        // At most one row matches under the (date, board) uniqueness
        // constraint; the predicate keeps this idempotent regardless.
        self.db()
            .conn()
            .execute(
                "UPDATE schedule_entries SET status = 'overridden', updated_at = ?1
                 WHERE schedule_date = ?2 AND board_type = ?3 AND status = 'live'",
                libsql::params![Utc::now().to_rfc3339(), today.to_string(), board.as_str()],
            )
            .await?;

        let entry = self
            .upsert_entry(&PushRequest {
                date: today,
                board,
                title: "OVERRIDE".to_string(),
                html,
                version,
                date_label: None,
                pushed_by: Some("emergency_override".to_string()),
            })
            .await?;

        self.db()
            .conn()
            .execute(
                "UPDATE schedule_entries SET status = 'overridden' WHERE id = ?1",
                [entry.id.as_str()],
            )
            .await?;
        let entry = self.get_entry(today, board).await?;

        let detail = OverrideDetail {
            reason: req.reason,
            source_date: req.source_date,
        };
        self.log_action(
            AuditAction::Override,
            Some(today),
            Some(board),
            Some(serde_json::to_value(&detail).map_err(|e| DatabaseError::Other(e.into()))?),
        )
        .await?;

        Ok(entry)
    }

    /// Fan one entry's content out to the cache and rebuild the snapshot.
    /// Best-effort: failures are logged, never surfaced to the caller.
    pub(crate) fn sync_layers(&self, entry: &ScheduleEntry) {
        if let Err(e) = self
            .layers()
            .write_cache(entry.schedule_date, entry.board, &entry.html_content)
        {
            tracing::warn!(
                date = %entry.schedule_date,
                board = %entry.board,
                "cache write failed: {e}"
            );
        }
    }

    /// Rebuild the snapshot from the full current store state filtered to
    /// `scheduled`/`live`. Best-effort.
    pub(crate) async fn resync_snapshot(&self) {
        let rows = match self.snapshot_rows().await {
            Ok(rows) => rows,
            Err(e) => {
                tracing::warn!("snapshot rebuild query failed: {e}");
                return;
            }
        };
        let snap = self.layers().build_snapshot(&rows);
        if let Err(e) = self.layers().write_snapshot(&snap) {
            tracing::warn!("snapshot write failed: {e}");
        }
    }

    async fn snapshot_rows(&self) -> Result<Vec<ScheduleEntry>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM schedule_entries
                     WHERE status IN ('scheduled', 'live')
                     ORDER BY schedule_date ASC, board_type ASC"
                ),
                (),
            )
            .await?;
        let mut entries = Vec::new();
        while let Some(row) = rows.next().await? {
            entries.push(row_to_entry(&row)?);
        }
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repos::audit::AuditFilter;
    use crate::test_support::helpers::test_service;
    use crate::updates::schedule::ScheduleUpdateBuilder;

    fn push(date: &str, board: BoardType, title: &str, html: &str) -> PushRequest {
        PushRequest {
            date: date.parse().unwrap(),
            board,
            title: title.to_string(),
            html: html.to_string(),
            version: Some(WorkoutVersion::Rx),
            date_label: None,
            pushed_by: Some("coach".to_string()),
        }
    }

    #[tokio::test]
    async fn upsert_creates_scheduled_entry() {
        let svc = test_service().await;

        let entry = svc
            .upsert_entry(&push("2026-03-14", BoardType::Mainboard, "Fran", "<div>21-15-9</div>"))
            .await
            .unwrap();

        assert!(entry.id.starts_with("sch-"));
        assert_eq!(entry.status, EntryStatus::Scheduled);
        assert_eq!(entry.workout_title, "Fran");
        assert_eq!(entry.content_hash, content_hash("<div>21-15-9</div>"));
        assert_eq!(entry.pushed_by.as_deref(), Some("coach"));
    }

    #[tokio::test]
    async fn upsert_replaces_in_place_never_duplicates() {
        let svc = test_service().await;
        let date: NaiveDate = "2026-03-14".parse().unwrap();

        let first = svc
            .upsert_entry(&push("2026-03-14", BoardType::Mainboard, "Fran", "<div>a</div>"))
            .await
            .unwrap();
        let second = svc
            .upsert_entry(&push("2026-03-14", BoardType::Mainboard, "Murph", "<div>b</div>"))
            .await
            .unwrap();

        // Same row, replaced content
        assert_eq!(first.id, second.id);
        assert_eq!(second.workout_title, "Murph");

        let (_, total) = svc.get_range(Some(date), Some(date), 1, 10).await.unwrap();
        assert_eq!(total, 1);
    }

    #[tokio::test]
    async fn repush_resets_status_to_scheduled() {
        let svc = test_service().await;
        let date: NaiveDate = "2026-03-14".parse().unwrap();

        svc.upsert_entry(&push("2026-03-14", BoardType::Mainboard, "Fran", "<div>a</div>"))
            .await
            .unwrap();
        svc.run_daily_swap(date).await.unwrap();
        assert_eq!(
            svc.get_entry(date, BoardType::Mainboard).await.unwrap().status,
            EntryStatus::Live
        );

        let repushed = svc
            .upsert_entry(&push("2026-03-14", BoardType::Mainboard, "Fran v2", "<div>c</div>"))
            .await
            .unwrap();
        assert_eq!(repushed.status, EntryStatus::Scheduled);
    }

    #[tokio::test]
    async fn upsert_audits_schedule_action() {
        let svc = test_service().await;

        svc.upsert_entry(&push("2026-03-14", BoardType::Modboard, "Fran (mod)", "<div/>"))
            .await
            .unwrap();

        let entries = svc
            .query_audit(&AuditFilter {
                action: Some(AuditAction::Schedule),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].board, Some(BoardType::Modboard));
        assert_eq!(entries[0].detail.as_ref().unwrap()["title"], "Fran (mod)");
    }

    #[tokio::test]
    async fn edit_partial_fields_recomputes_hash() {
        let svc = test_service().await;
        let date: NaiveDate = "2026-03-14".parse().unwrap();

        svc.upsert_entry(&push("2026-03-14", BoardType::Mainboard, "Fran", "<div>a</div>"))
            .await
            .unwrap();

        let update = ScheduleUpdateBuilder::new()
            .html_content("<div>edited</div>")
            .build();
        let updated = svc
            .edit_entry(date, BoardType::Mainboard, update)
            .await
            .unwrap();

        assert_eq!(updated.workout_title, "Fran");
        assert_eq!(updated.html_content, "<div>edited</div>");
        assert_eq!(updated.content_hash, content_hash("<div>edited</div>"));

        let audits = svc
            .query_audit(&AuditFilter {
                action: Some(AuditAction::Edit),
                ..Default::default()
            })
            .await
            .unwrap();
        let changes = &audits[0].detail.as_ref().unwrap()["changes"];
        assert!(changes.as_array().unwrap().contains(&"html_content".into()));
        assert!(changes.as_array().unwrap().contains(&"content_hash".into()));
    }

    #[tokio::test]
    async fn edit_missing_row_is_no_result() {
        let svc = test_service().await;
        let date: NaiveDate = "2026-03-14".parse().unwrap();

        let update = ScheduleUpdateBuilder::new().workout_title("x").build();
        let result = svc.edit_entry(date, BoardType::Mainboard, update).await;
        assert!(matches!(result, Err(DatabaseError::NoResult)));
    }

    #[tokio::test]
    async fn empty_edit_returns_row_unchanged() {
        let svc = test_service().await;
        let date: NaiveDate = "2026-03-14".parse().unwrap();

        let entry = svc
            .upsert_entry(&push("2026-03-14", BoardType::Mainboard, "Fran", "<div>a</div>"))
            .await
            .unwrap();
        let unchanged = svc
            .edit_entry(date, BoardType::Mainboard, ScheduleUpdate::default())
            .await
            .unwrap();
        assert_eq!(entry, unchanged);

        let audits = svc
            .query_audit(&AuditFilter {
                action: Some(AuditAction::Edit),
                ..Default::default()
            })
            .await
            .unwrap();
        assert!(audits.is_empty());
    }

    #[tokio::test]
    async fn get_for_date_returns_both_boards() {
        let svc = test_service().await;
        let date: NaiveDate = "2026-03-14".parse().unwrap();

        svc.upsert_entry(&push("2026-03-14", BoardType::Mainboard, "Fran", "<div>rx</div>"))
            .await
            .unwrap();
        svc.upsert_entry(&push("2026-03-14", BoardType::Modboard, "Fran (mod)", "<div>mod</div>"))
            .await
            .unwrap();

        let day = svc.get_for_date(date).await.unwrap();
        assert_eq!(day.mainboard.unwrap().workout_title, "Fran");
        assert_eq!(day.modboard.unwrap().workout_title, "Fran (mod)");
    }

    #[tokio::test]
    async fn range_pagination_total_independent_of_page_size() {
        let svc = test_service().await;

        for day in 10..=14 {
            svc.upsert_entry(&push(
                &format!("2026-03-{day}"),
                BoardType::Mainboard,
                "WOD",
                "<div/>",
            ))
            .await
            .unwrap();
        }

        let (page, total) = svc.get_range(None, None, 1, 2).await.unwrap();
        assert_eq!(page.len(), 2);
        assert_eq!(total, 5);

        let (page, total) = svc.get_range(None, None, 3, 2).await.unwrap();
        assert_eq!(page.len(), 1);
        assert_eq!(total, 5);

        // Ordered by (date ASC, board ASC)
        let (all, _) = svc.get_range(None, None, 1, 10).await.unwrap();
        assert_eq!(all[0].schedule_date.to_string(), "2026-03-10");
        assert_eq!(all[4].schedule_date.to_string(), "2026-03-14");
    }

    #[tokio::test]
    async fn range_date_filters() {
        let svc = test_service().await;

        for day in 10..=14 {
            svc.upsert_entry(&push(
                &format!("2026-03-{day}"),
                BoardType::Mainboard,
                "WOD",
                "<div/>",
            ))
            .await
            .unwrap();
        }

        let (rows, total) = svc
            .get_range(Some("2026-03-12".parse().unwrap()), None, 1, 10)
            .await
            .unwrap();
        assert_eq!(total, 3);
        assert_eq!(rows.len(), 3);

        let (rows, total) = svc
            .get_range(
                Some("2026-03-11".parse().unwrap()),
                Some("2026-03-12".parse().unwrap()),
                1,
                10,
            )
            .await
            .unwrap();
        assert_eq!(total, 2);
        assert_eq!(rows.len(), 2);
    }

    #[tokio::test]
    async fn delete_for_date_counts_and_audits_per_board() {
        let svc = test_service().await;
        let date: NaiveDate = "2026-03-14".parse().unwrap();

        svc.upsert_entry(&push("2026-03-14", BoardType::Mainboard, "Fran", "<div/>"))
            .await
            .unwrap();
        svc.upsert_entry(&push("2026-03-14", BoardType::Modboard, "Fran (mod)", "<div/>"))
            .await
            .unwrap();
        svc.upsert_entry(&push("2026-03-15", BoardType::Mainboard, "Murph", "<div/>"))
            .await
            .unwrap();

        let deleted = svc.delete_for_date(date).await.unwrap();
        assert_eq!(deleted, 2);

        assert!(svc.find_entry(date, BoardType::Mainboard).await.unwrap().is_none());
        assert!(
            svc.find_entry("2026-03-15".parse().unwrap(), BoardType::Mainboard)
                .await
                .unwrap()
                .is_some()
        );

        let audits = svc
            .query_audit(&AuditFilter {
                action: Some(AuditAction::Delete),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(audits.len(), 2);
    }

    #[tokio::test]
    async fn delete_empty_date_is_zero() {
        let svc = test_service().await;
        let deleted = svc.delete_for_date("2026-03-14".parse().unwrap()).await.unwrap();
        assert_eq!(deleted, 0);
    }

    #[tokio::test]
    async fn override_with_html_and_no_live_row_succeeds() {
        let svc = test_service().await;
        let today: NaiveDate = "2026-03-14".parse().unwrap();

        let entry = svc
            .override_board(
                today,
                BoardType::Mainboard,
                OverrideRequest {
                    html: Some("<div>X</div>".to_string()),
                    reason: Some("projector swap".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(entry.status, EntryStatus::Overridden);
        assert_eq!(entry.workout_title, "OVERRIDE");
        assert_eq!(entry.html_content, "<div>X</div>");
        assert_eq!(entry.pushed_by.as_deref(), Some("emergency_override"));
    }

    #[tokio::test]
    async fn override_marks_live_row_then_replaces_it() {
        let svc = test_service().await;
        let today: NaiveDate = "2026-03-14".parse().unwrap();

        svc.upsert_entry(&push("2026-03-14", BoardType::Mainboard, "Fran", "<div>planned</div>"))
            .await
            .unwrap();
        svc.run_daily_swap(today).await.unwrap();

        let entry = svc
            .override_board(
                today,
                BoardType::Mainboard,
                OverrideRequest {
                    html: Some("<div>emergency</div>".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        // The upsert replaced the live row in place; the forced status wins.
        assert_eq!(entry.status, EntryStatus::Overridden);
        assert_eq!(entry.html_content, "<div>emergency</div>");

        let audits = svc
            .query_audit(&AuditFilter {
                action: Some(AuditAction::Override),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(audits.len(), 1);
        assert_eq!(audits[0].detail.as_ref().unwrap()["reason"], serde_json::Value::Null);
    }

    #[tokio::test]
    async fn override_copies_from_source_date() {
        let svc = test_service().await;
        let today: NaiveDate = "2026-03-14".parse().unwrap();

        let mut req = push("2026-03-10", BoardType::Mainboard, "Cindy", "<div>cindy</div>");
        req.version = Some(WorkoutVersion::Scaled);
        svc.upsert_entry(&req).await.unwrap();

        let entry = svc
            .override_board(
                today,
                BoardType::Mainboard,
                OverrideRequest {
                    source_date: Some("2026-03-10".parse().unwrap()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(entry.html_content, "<div>cindy</div>");
        assert_eq!(entry.version, Some(WorkoutVersion::Scaled));
        assert_eq!(entry.schedule_date, today);
    }

    #[tokio::test]
    async fn override_missing_source_is_no_result() {
        let svc = test_service().await;
        let today: NaiveDate = "2026-03-14".parse().unwrap();

        let result = svc
            .override_board(
                today,
                BoardType::Modboard,
                OverrideRequest {
                    source_date: Some("2020-01-01".parse().unwrap()),
                    ..Default::default()
                },
            )
            .await;
        assert!(matches!(result, Err(DatabaseError::NoResult)));
    }

    #[tokio::test]
    async fn override_with_neither_input_is_invalid() {
        let svc = test_service().await;
        let today: NaiveDate = "2026-03-14".parse().unwrap();

        let result = svc
            .override_board(today, BoardType::Mainboard, OverrideRequest::default())
            .await;
        assert!(matches!(result, Err(DatabaseError::InvalidInput(_))));
    }
}
