//! Board types, status enums, and audit actions for Marquee.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.
//! `EntryStatus` carries the daily rotation state machine and provides
//! `allowed_next_states()` to enforce valid transitions at the application layer.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// BoardType
// ---------------------------------------------------------------------------

/// One of the two logical display targets. Each board may drive several
/// physical screens, but scheduling only ever sees these two keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum BoardType {
    Mainboard,
    Modboard,
}

impl BoardType {
    /// All boards, in storage sort order.
    pub const ALL: [Self; 2] = [Self::Mainboard, Self::Modboard];

    /// Return the string representation used in SQL storage and file names.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mainboard => "mainboard",
            Self::Modboard => "modboard",
        }
    }
}

impl fmt::Display for BoardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// WorkoutVersion
// ---------------------------------------------------------------------------

/// Workout variant shown on a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutVersion {
    Rx,
    Scaled,
    Mod,
}

impl WorkoutVersion {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rx => "rx",
            Self::Scaled => "scaled",
            Self::Mod => "mod",
        }
    }
}

impl fmt::Display for WorkoutVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// EntryStatus
// ---------------------------------------------------------------------------

/// Status of a schedule entry through the daily rotation.
///
/// ```text
/// scheduled → live → archived
///                  → overridden → archived
/// ```
///
/// A re-push (upsert) resets any status back to `scheduled` outside the
/// machine; the override path forces `overridden` directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum EntryStatus {
    Scheduled,
    Live,
    Archived,
    Overridden,
}

impl EntryStatus {
    /// Valid next states from the current state.
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Scheduled => &[Self::Live],
            Self::Live => &[Self::Archived, Self::Overridden],
            Self::Overridden => &[Self::Archived],
            Self::Archived => &[],
        }
    }

    /// Check whether transitioning to `next` is allowed.
    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    /// Whether the resolver treats this entry as current displayable content.
    /// Archived rows are yesterday's news, never served.
    #[must_use]
    pub const fn is_displayable(self) -> bool {
        !matches!(self, Self::Archived)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Scheduled => "scheduled",
            Self::Live => "live",
            Self::Archived => "archived",
            Self::Overridden => "overridden",
        }
    }
}

impl fmt::Display for EntryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// AuditAction
// ---------------------------------------------------------------------------

/// Type of action recorded in the audit log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum AuditAction {
    Schedule,
    Edit,
    Delete,
    Override,
    Swap,
    FallbackTriggered,
}

impl AuditAction {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Schedule => "schedule",
            Self::Edit => "edit",
            Self::Delete => "delete",
            Self::Override => "override",
            Self::Swap => "swap",
            Self::FallbackTriggered => "fallback_triggered",
        }
    }
}

impl fmt::Display for AuditAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// FallbackLayer
// ---------------------------------------------------------------------------

/// One tier of the fallback chain the resolver walked to produce content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum FallbackLayer {
    Primary,
    Snapshot,
    Cache,
    Splash,
}

impl FallbackLayer {
    /// Numeric tier (1 = authoritative store, 4 = splash) as reported in
    /// audit details and operator tooling.
    #[must_use]
    pub const fn tier(self) -> u8 {
        match self {
            Self::Primary => 1,
            Self::Snapshot => 2,
            Self::Cache => 3,
            Self::Splash => 4,
        }
    }

    /// Audit `source` label for this layer.
    #[must_use]
    pub const fn source(self) -> &'static str {
        match self {
            Self::Primary => "database",
            Self::Snapshot => "json_snapshot",
            Self::Cache => "html_cache",
            Self::Splash => "splash_screen",
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Snapshot => "snapshot",
            Self::Cache => "cache",
            Self::Splash => "splash",
        }
    }
}

impl fmt::Display for FallbackLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
