//! `stockroom-catalog` — the tagged stock catalog.
//!
//! Owns the stock-reference mapping, enforces insertion uniqueness, answers
//! tag-subset queries, and persists the whole state as a versioned binary
//! snapshot.

pub mod catalog;
pub mod config;
pub mod samples;
pub mod snapshot;

pub use catalog::Catalog;
pub use config::CatalogConfig;
pub use snapshot::{FORMAT_VERSION, SnapshotError};
