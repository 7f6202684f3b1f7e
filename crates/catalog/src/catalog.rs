//! The stock catalog: a unique mapping plus tag-subset queries.

use std::collections::BTreeMap;

use tracing::debug;

use stockroom_core::{CatalogError, CatalogResult, StockItem, StockRef, TagSet};

use crate::config::CatalogConfig;

/// In-process catalog of stock items, keyed by stock reference.
///
/// Every key equals the `stock_ref` of its value; inserts derive the key
/// from the item, so the mapping cannot drift. Single-threaded by design:
/// callers needing shared access wrap the catalog in their own lock.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    stock: BTreeMap<StockRef, StockItem>,
    config: CatalogConfig,
}

impl Catalog {
    /// Create an empty catalog with the default configuration.
    pub fn new() -> Self {
        debug!("new");
        Self::default()
    }

    pub fn with_config(config: CatalogConfig) -> Self {
        Self {
            stock: BTreeMap::new(),
            config,
        }
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// Insert `item` under its stock reference.
    ///
    /// Fails with [`CatalogError::DuplicateStockRef`] if the reference is
    /// already present; the mapping is left unchanged in that case.
    pub fn store_new_item(&mut self, item: StockItem) -> CatalogResult<()> {
        debug!(stock_ref = %item.stock_ref(), "store_new_item");
        if self.stock.contains_key(item.stock_ref()) {
            return Err(CatalogError::duplicate(item.stock_ref().as_str()));
        }
        self.stock.insert(item.stock_ref().clone(), item);
        Ok(())
    }

    /// Bulk insert: repeated single inserts, failing fast on the first
    /// duplicate (earlier items stay stored). Returns the number inserted.
    pub fn store_all(
        &mut self,
        items: impl IntoIterator<Item = StockItem>,
    ) -> CatalogResult<usize> {
        debug!("store_all");
        let mut stored = 0;
        for item in items {
            self.store_new_item(item)?;
            stored += 1;
        }
        Ok(stored)
    }

    /// Total lookup: absence is a routine outcome, never an error.
    pub fn find_item(&self, stock_ref: &StockRef) -> Option<&StockItem> {
        debug!(stock_ref = %stock_ref, "find_item");
        self.stock.get(stock_ref)
    }

    /// Lazily yield the items whose tags contain every tag in `search`.
    ///
    /// The iterator borrows the catalog and never mutates it; re-querying
    /// re-scans. An empty search matches every item. Result order is the
    /// mapping's iteration order and is not part of the contract.
    pub fn find_matching_with_tags<'a>(
        &'a self,
        search: &'a TagSet,
    ) -> impl Iterator<Item = &'a StockItem> {
        debug!(search = %search, "find_matching_with_tags");
        self.stock
            .values()
            .filter(move |item| item.matches_tags(search))
    }

    pub fn len(&self) -> usize {
        self.stock.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stock.is_empty()
    }

    /// Iterate every item, in stock-reference order.
    pub fn iter(&self) -> impl Iterator<Item = &StockItem> {
        self.stock.values()
    }
}

impl core::fmt::Display for Catalog {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        debug!("describe");
        writeln!(f, "Items in Stock")?;
        writeln!(f)?;
        for item in self.stock.values() {
            writeln!(f, "{item}")?;
        }
        Ok(())
    }
}
