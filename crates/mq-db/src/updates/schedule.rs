//! Schedule entry update builder.

use serde::Serialize;

use mq_core::enums::WorkoutVersion;

/// Partial update for a schedule entry. Only supplied fields are applied;
/// changing the HTML also recomputes the content hash.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ScheduleUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workout_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html_content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<WorkoutVersion>,
}

impl ScheduleUpdate {
    /// Whether the update carries no fields at all.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.workout_title.is_none() && self.html_content.is_none() && self.version.is_none()
    }
}

pub struct ScheduleUpdateBuilder(ScheduleUpdate);

impl ScheduleUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(ScheduleUpdate::default())
    }

    #[must_use]
    pub fn workout_title(mut self, title: impl Into<String>) -> Self {
        self.0.workout_title = Some(title.into());
        self
    }

    #[must_use]
    pub fn html_content(mut self, html: impl Into<String>) -> Self {
        self.0.html_content = Some(html.into());
        self
    }

    #[must_use]
    pub fn version(mut self, version: WorkoutVersion) -> Self {
        self.0.version = Some(version);
        self
    }

    #[must_use]
    pub fn build(self) -> ScheduleUpdate {
        self.0
    }
}

impl Default for ScheduleUpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
