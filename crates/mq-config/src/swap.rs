//! Midnight swap schedule configuration.

use serde::{Deserialize, Serialize};

fn default_timezone() -> String {
    "America/Chicago".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SwapConfig {
    /// IANA time zone the gym lives in. "Today" and the swap fire time are
    /// computed in this zone, not UTC.
    #[serde(default = "default_timezone")]
    pub timezone: String,

    /// Wall-clock hour of the daily swap (0-23).
    #[serde(default)]
    pub hour: u8,

    /// Wall-clock minute of the daily swap (0-59).
    #[serde(default)]
    pub minute: u8,
}

impl Default for SwapConfig {
    fn default() -> Self {
        Self {
            timezone: default_timezone(),
            hour: 0,
            minute: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fire_at_midnight_chicago() {
        let config = SwapConfig::default();
        assert_eq!(config.timezone, "America/Chicago");
        assert_eq!(config.hour, 0);
        assert_eq!(config.minute, 0);
    }
}
