//! Catalog configuration.

use serde::{Deserialize, Serialize};

/// Advisory catalog bounds.
///
/// These mirror the shop's published limits. No catalog operation enforces
/// them; callers that validate incoming stock do so against this surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Lowest advertised price, in minor currency units.
    pub min_price_minor: u64,
    /// Highest advertised price, in minor currency units.
    pub max_price_minor: u64,
    /// Advisory cap on the size of one bulk insert.
    pub max_stock_add: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            min_price_minor: 50,
            max_price_minor: 50_000,
            max_stock_add: 50,
        }
    }
}
