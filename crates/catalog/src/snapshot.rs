//! Versioned binary snapshots of the whole catalog.
//!
//! The persisted form is a single bincode blob: an envelope carrying its own
//! format version, a save timestamp, the catalog configuration, and every
//! stock item. Decoding checks the envelope version, rebuilds the mapping,
//! and runs the per-item version-upgrade hook before handing the catalog
//! back to the caller.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use stockroom_core::StockItem;

use crate::catalog::Catalog;
use crate::config::CatalogConfig;

/// Current snapshot envelope version.
pub const FORMAT_VERSION: u32 = 1;

/// Persistence fault: I/O or (de)serialization.
///
/// Not recovered locally; propagated verbatim to the caller. There is no
/// retry and no partial-state recovery.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot io fault: {0}")]
    Io(#[from] std::io::Error),

    #[error("snapshot encode fault: {0}")]
    Encode(String),

    #[error("snapshot decode fault: {0}")]
    Decode(String),

    #[error("unsupported snapshot format {found} (supported: {supported})")]
    UnsupportedFormat { found: u32, supported: u32 },
}

#[derive(Debug, Serialize, Deserialize)]
struct CatalogSnapshot {
    format_version: u32,
    saved_at: DateTime<Utc>,
    config: CatalogConfig,
    items: Vec<StockItem>,
}

impl CatalogSnapshot {
    fn capture(catalog: &Catalog) -> Self {
        Self {
            format_version: FORMAT_VERSION,
            saved_at: Utc::now(),
            config: catalog.config().clone(),
            items: catalog.iter().cloned().collect(),
        }
    }

    fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        bincode::serialize(self).map_err(|e| SnapshotError::Encode(e.to_string()))
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        bincode::deserialize(bytes).map_err(|e| SnapshotError::Decode(e.to_string()))
    }

    fn restore(self) -> Result<Catalog, SnapshotError> {
        let mut catalog = Catalog::with_config(self.config);
        for mut item in self.items {
            // Upgrade sweep: exactly once per reconstructed item.
            item.check_version();
            catalog
                .store_new_item(item)
                .map_err(|e| SnapshotError::Decode(e.to_string()))?;
        }
        Ok(catalog)
    }
}

impl Catalog {
    /// Write the whole catalog to `path` as one binary blob.
    ///
    /// The file handle is scoped to the write. Faults propagate unmodified;
    /// there is no atomic rename, so a failed save may leave a corrupt or
    /// missing file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SnapshotError> {
        let path = path.as_ref();
        debug!(path = %path.display(), items = self.len(), "save");
        let bytes = CatalogSnapshot::capture(self).to_bytes()?;
        fs::write(path, bytes)?;
        Ok(())
    }

    /// Read a catalog back from `path`, replacing nothing until it succeeds.
    ///
    /// Every reconstructed item has its version-upgrade hook run before the
    /// catalog is returned. A duplicate stock reference inside the blob is
    /// reported as a decode fault rather than silently merged.
    pub fn load(path: impl AsRef<Path>) -> Result<Catalog, SnapshotError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "load");
        let bytes = fs::read(path)?;
        let snapshot = CatalogSnapshot::from_bytes(&bytes)?;
        if snapshot.format_version != FORMAT_VERSION {
            return Err(SnapshotError::UnsupportedFormat {
                found: snapshot.format_version,
                supported: FORMAT_VERSION,
            });
        }
        snapshot.restore()
    }
}
