//! Audit log repository.
//!
//! Append-only entries recording every schedule mutation and every fallback
//! degradation. Supports filtered, paginated retrieval newest-first.

use chrono::{NaiveDate, Utc};

use mq_core::entities::AuditEntry;
use mq_core::enums::{AuditAction, BoardType};
use mq_core::ids::PREFIX_AUDIT;

use crate::error::DatabaseError;
use crate::helpers::{get_opt_string, parse_datetime, parse_enum, parse_optional_date, parse_optional_enum, parse_optional_json};
use crate::service::MarqueeService;

/// Filter criteria for audit queries.
#[derive(Debug, Default)]
pub struct AuditFilter {
    pub action: Option<AuditAction>,
    pub board: Option<BoardType>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

fn row_to_entry(row: &libsql::Row) -> Result<AuditEntry, DatabaseError> {
    Ok(AuditEntry {
        id: row.get::<String>(0)?,
        action: parse_enum(&row.get::<String>(1)?)?,
        schedule_date: parse_optional_date(get_opt_string(row, 2)?.as_deref())?,
        board: parse_optional_enum(get_opt_string(row, 3)?.as_deref())?,
        detail: parse_optional_json(get_opt_string(row, 4)?.as_deref())?,
        created_at: parse_datetime(&row.get::<String>(5)?)?,
    })
}

impl MarqueeService {
    /// Append an audit entry. Called by every mutation method.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the INSERT fails.
    pub async fn append_audit(&self, entry: &AuditEntry) -> Result<(), DatabaseError> {
        self.db()
            .conn()
            .execute(
                "INSERT INTO audit_log (id, action, schedule_date, board_type, detail, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                libsql::params![
                    entry.id.as_str(),
                    entry.action.as_str(),
                    entry.schedule_date.map(|d| d.to_string()).as_deref(),
                    entry.board.map(BoardType::as_str),
                    entry
                        .detail
                        .as_ref()
                        .map(std::string::ToString::to_string)
                        .as_deref(),
                    entry.created_at.to_rfc3339()
                ],
            )
            .await?;
        Ok(())
    }

    /// Build and append an audit entry for an action, returning it.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if ID generation or the INSERT fails.
    pub(crate) async fn log_action(
        &self,
        action: AuditAction,
        schedule_date: Option<NaiveDate>,
        board: Option<BoardType>,
        detail: Option<serde_json::Value>,
    ) -> Result<AuditEntry, DatabaseError> {
        let entry = AuditEntry {
            id: self.db().generate_id(PREFIX_AUDIT).await?,
            action,
            schedule_date,
            board,
            detail,
            created_at: Utc::now(),
        };
        self.append_audit(&entry).await?;
        Ok(entry)
    }

    /// Query audit entries with optional filters, newest first.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn query_audit(
        &self,
        filter: &AuditFilter,
    ) -> Result<Vec<AuditEntry>, DatabaseError> {
        let mut conditions = Vec::new();
        let mut params: Vec<libsql::Value> = Vec::new();

        if let Some(action) = filter.action {
            params.push(libsql::Value::Text(action.as_str().to_string()));
            conditions.push(format!("action = ?{}", params.len()));
        }
        if let Some(board) = filter.board {
            params.push(libsql::Value::Text(board.as_str().to_string()));
            conditions.push(format!("board_type = ?{}", params.len()));
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let limit = filter.limit.unwrap_or(50);
        let offset = filter.offset.unwrap_or(0);
        let sql = format!(
            "SELECT id, action, schedule_date, board_type, detail, created_at
             FROM audit_log {where_clause}
             ORDER BY created_at DESC LIMIT {limit} OFFSET {offset}"
        );

        let mut rows = self
            .db()
            .conn()
            .query(&sql, libsql::params_from_iter(params))
            .await?;
        let mut entries = Vec::new();

        while let Some(row) = rows.next().await? {
            entries.push(row_to_entry(&row)?);
        }

        Ok(entries)
    }
}
