//! TV display configuration.

use mq_core::enums::{BoardType, WorkoutVersion};
use serde::{Deserialize, Serialize};

const fn default_refresh_seconds() -> u32 {
    60
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DisplayConfig {
    /// How often the TV browsers reload the board page.
    #[serde(default = "default_refresh_seconds")]
    pub refresh_seconds: u32,

    /// Default workout version for mainboard pushes that omit one.
    #[serde(default = "mainboard_default")]
    pub mainboard_version: WorkoutVersion,

    /// Default workout version for modboard pushes that omit one.
    #[serde(default = "modboard_default")]
    pub modboard_version: WorkoutVersion,
}

const fn mainboard_default() -> WorkoutVersion {
    WorkoutVersion::Rx
}

const fn modboard_default() -> WorkoutVersion {
    WorkoutVersion::Mod
}

impl DisplayConfig {
    /// The default version applied when a push omits one.
    #[must_use]
    pub const fn default_version(&self, board: BoardType) -> WorkoutVersion {
        match board {
            BoardType::Mainboard => self.mainboard_version,
            BoardType::Modboard => self.modboard_version,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            refresh_seconds: default_refresh_seconds(),
            mainboard_version: mainboard_default(),
            modboard_version: modboard_default(),
        }
    }
}
