//! Service layer orchestrating store mutations with layer fan-out and audit.
//!
//! `MarqueeService` wraps `MarqueeDb` (raw database access) and `LayerWriter`
//! (derived fallback layers). All repo methods are implemented as
//! `impl MarqueeService`.
//!
//! Every schedule mutation follows this protocol:
//! 1. Execute the authoritative SQL write - the only step that must succeed
//! 2. Fan out to the HTML cache and snapshot (best-effort, logged on failure)
//! 3. Append an audit entry

use mq_config::MarqueeConfig;

use crate::MarqueeDb;
use crate::error::DatabaseError;
use crate::layers::LayerWriter;

/// Orchestrates store mutations with derived-layer fan-out and audit logging.
pub struct MarqueeService {
    db: MarqueeDb,
    layers: LayerWriter,
}

impl MarqueeService {
    /// Create a new service wrapping a local database.
    ///
    /// # Arguments
    ///
    /// * `db_path` - Path to the libSQL database file, or `":memory:"` for tests.
    /// * `layers` - Derived-layer writer; pass `LayerWriter::disabled()` for
    ///   tests that don't touch the fallback files.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened.
    pub async fn new_local(db_path: &str, layers: LayerWriter) -> Result<Self, DatabaseError> {
        let db = MarqueeDb::open_local(db_path).await?;
        Ok(Self { db, layers })
    }

    /// Create a service from loaded configuration (the CLI entry point).
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or the cache
    /// directory cannot be created.
    pub async fn from_config(config: &MarqueeConfig) -> Result<Self, DatabaseError> {
        let layers = LayerWriter::from_config(&config.fallback)?;
        Self::new_local(&config.database.path, layers).await
    }

    /// Create from an existing `MarqueeDb` (for testing).
    #[must_use]
    pub fn from_db(db: MarqueeDb, layers: LayerWriter) -> Self {
        Self { db, layers }
    }

    /// Access the underlying database handle.
    #[must_use]
    pub const fn db(&self) -> &MarqueeDb {
        &self.db
    }

    /// Access the derived-layer writer.
    #[must_use]
    pub const fn layers(&self) -> &LayerWriter {
        &self.layers
    }
}
