//! `stockroom-core` — domain foundation for the stock catalog.
//!
//! This crate contains **pure domain** primitives (no I/O, no persistence
//! concerns): stock references, tags, prices, and the stock item entity
//! with its schema-version upgrade hook.

pub mod error;
pub mod item;
pub mod money;
pub mod stock_ref;
pub mod tag;

pub use error::{CatalogError, CatalogResult};
pub use item::{SCHEMA_VERSION, StockItem};
pub use money::Price;
pub use stock_ref::StockRef;
pub use tag::{Tag, TagSet};
