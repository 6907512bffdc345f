//! # mq-config
//!
//! Layered configuration loading for Marquee using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`MARQUEE_*` prefix, `__` as separator)
//! 2. Project-level `.marquee/config.toml`
//! 3. User-level `~/.config/marquee/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `MARQUEE_DATABASE__PATH` -> `database.path`,
//! `MARQUEE_SWAP__TIMEZONE` -> `swap.timezone`, etc. The `__` (double
//! underscore) separates nested config sections.

mod database;
mod display;
mod error;
mod fallback;
mod swap;

pub use database::DatabaseConfig;
pub use display::DisplayConfig;
pub use error::ConfigError;
pub use fallback::FallbackConfig;
pub use swap::SwapConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct MarqueeConfig {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub fallback: FallbackConfig,
    #[serde(default)]
    pub swap: SwapConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

impl MarqueeConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` - use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration with `.env` file support. Typical entry point for
    /// the CLI and tests.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv_from_workspace();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(".marquee/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("MARQUEE_").split("__"))
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("marquee").join("config.toml"))
    }

    /// Load `.env` from the workspace root, walking up from
    /// `CARGO_MANIFEST_DIR` or the current directory. Silently does nothing
    /// if no `.env` is found.
    fn load_dotenv_from_workspace() {
        if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
            let mut dir = PathBuf::from(manifest_dir);
            for _ in 0..3 {
                let env_path = dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                    return;
                }
                if !dir.pop() {
                    break;
                }
            }
        }

        let _ = dotenvy::dotenv();
    }
}
