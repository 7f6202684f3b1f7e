//! The stock item entity.

use serde::{Deserialize, Serialize};

use crate::money::Price;
use crate::stock_ref::StockRef;
use crate::tag::TagSet;

/// Current stock item schema version.
///
/// History:
/// - 1: price stored in whole currency units.
/// - 2: price stored in minor currency units.
pub const SCHEMA_VERSION: u32 = 2;

/// One garment held by the catalog.
///
/// All fields are private with read accessors only; an item never changes
/// after construction except through [`StockItem::check_version`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockItem {
    stock_ref: StockRef,
    price: Price,
    tags: TagSet,
    schema_version: u32,
}

impl StockItem {
    /// Create an item at the current schema version.
    pub fn new(stock_ref: StockRef, price: Price, tags: TagSet) -> Self {
        Self {
            stock_ref,
            price,
            tags,
            schema_version: SCHEMA_VERSION,
        }
    }

    /// Rebuild an item exactly as an earlier format persisted it.
    ///
    /// Callers must run [`StockItem::check_version`] before using the item;
    /// the snapshot loader does this for every item it reconstructs.
    pub fn restore(stock_ref: StockRef, price: Price, tags: TagSet, schema_version: u32) -> Self {
        Self {
            stock_ref,
            price,
            tags,
            schema_version,
        }
    }

    pub fn stock_ref(&self) -> &StockRef {
        &self.stock_ref
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn tags(&self) -> &TagSet {
        &self.tags
    }

    pub fn schema_version(&self) -> u32 {
        self.schema_version
    }

    /// True iff `search` is a subset of this item's tags.
    pub fn matches_tags(&self, search: &TagSet) -> bool {
        search.is_subset_of(&self.tags)
    }

    /// Version-upgrade hook, invoked once per item after a snapshot load.
    ///
    /// Steps the item from its stored schema version up to
    /// [`SCHEMA_VERSION`], applying each migration in order. Already-current
    /// items are left untouched.
    pub fn check_version(&mut self) {
        while self.schema_version < SCHEMA_VERSION {
            if self.schema_version == 1 {
                // v1 stored prices in whole currency units.
                self.price = Price::from_minor(self.price.minor_units().saturating_mul(100));
            }
            self.schema_version += 1;
        }
    }
}

impl core::fmt::Display for StockItem {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} price {} tags [{}]", self.stock_ref, self.price, self.tags)
    }
}
