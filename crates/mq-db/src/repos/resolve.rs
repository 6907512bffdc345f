//! Content resolution - the four-layer fallback chain.
//!
//! `resolve` is total: it always returns displayable HTML, walking
//! database, snapshot, cache, splash in order. A fault in any layer logs and
//! falls through to the next; only the splash terminates the chain
//! unconditionally. Serving from a degraded layer appends a
//! `fallback_triggered` audit entry, itself best-effort so that an audit
//! fault can never break the boards.

use chrono::NaiveDate;
use serde::Serialize;

use mq_core::audit_detail::FallbackDetail;
use mq_core::entities::ScheduleEntry;
use mq_core::enums::{AuditAction, BoardType, EntryStatus, FallbackLayer};

use crate::error::DatabaseError;
use crate::layers::SnapshotLookup;
use crate::service::MarqueeService;

/// Resolved board content plus the layer that supplied it.
#[derive(Debug, Clone, Serialize)]
pub struct Resolved {
    pub html: String,
    pub layer: FallbackLayer,
}

/// Today's per-board presence, for operator status checks.
#[derive(Debug, Clone, Serialize)]
pub struct BoardPresence {
    pub date: NaiveDate,
    pub mainboard: Option<EntryStatus>,
    pub modboard: Option<EntryStatus>,
}

impl MarqueeService {
    /// Resolve the content to display for `(date, board)`. Never fails.
    pub async fn resolve(&self, date: NaiveDate, board: BoardType) -> Resolved {
        // Layer 1: authoritative store
        match self.displayable_entry(date, board).await {
            Ok(Some(entry)) => {
                return Resolved {
                    html: entry.html_content,
                    layer: FallbackLayer::Primary,
                };
            }
            Ok(None) => {}
            Err(e) => {
                tracing::warn!(%date, %board, "primary lookup failed, falling back: {e}");
            }
        }

        // Layer 2: JSON snapshot referencing a cache file
        match self.layers().lookup_snapshot(date, board) {
            SnapshotLookup::Found(path) => match std::fs::read_to_string(&path) {
                Ok(html) => {
                    self.audit_fallback(date, board, FallbackLayer::Snapshot).await;
                    return Resolved {
                        html,
                        layer: FallbackLayer::Snapshot,
                    };
                }
                Err(e) => {
                    tracing::warn!(%date, %board, path = %path.display(), "snapshot points at unreadable file: {e}");
                }
            },
            SnapshotLookup::Malformed(e) => {
                tracing::warn!(%date, %board, "snapshot malformed, skipping layer: {e}");
            }
            SnapshotLookup::Missing => {}
        }

        // Layer 3: raw HTML cache
        if let Some(html) = self.layers().read_cache(date, board) {
            self.audit_fallback(date, board, FallbackLayer::Cache).await;
            return Resolved {
                html,
                layer: FallbackLayer::Cache,
            };
        }

        // Layer 4: splash, unconditional
        self.audit_fallback(date, board, FallbackLayer::Splash).await;
        Resolved {
            html: self.layers().splash(),
            layer: FallbackLayer::Splash,
        }
    }

    /// Whether each board has displayable content for `today`, and in what
    /// lifecycle state.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn board_presence(&self, today: NaiveDate) -> Result<BoardPresence, DatabaseError> {
        let day = self.get_for_date(today).await?;
        let status_of = |board: BoardType| {
            day.board(board)
                .map(|entry| entry.status)
                .filter(|status| status.is_displayable())
        };
        Ok(BoardPresence {
            date: today,
            mainboard: status_of(BoardType::Mainboard),
            modboard: status_of(BoardType::Modboard),
        })
    }

    async fn displayable_entry(
        &self,
        date: NaiveDate,
        board: BoardType,
    ) -> Result<Option<ScheduleEntry>, DatabaseError> {
        Ok(self
            .find_entry(date, board)
            .await?
            .filter(|entry| entry.status.is_displayable()))
    }

    /// Record a degraded serve. Best-effort: the resolver stays total even
    /// when the audit store is the thing that failed.
    async fn audit_fallback(&self, date: NaiveDate, board: BoardType, layer: FallbackLayer) {
        let detail = FallbackDetail {
            layer: layer.tier(),
            source: layer.source().to_string(),
        };
        let detail = serde_json::to_value(&detail).ok();
        if let Err(e) = self
            .log_action(AuditAction::FallbackTriggered, Some(date), Some(board), detail)
            .await
        {
            tracing::warn!(%date, %board, "fallback audit append failed: {e}");
        }
    }
}
