//! Strongly-typed stock reference.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// Unique reference of one stock item (e.g. `D0001`, `TR12327`).
///
/// The reference is the sole lookup key of the catalog and is immutable
/// after creation.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StockRef(String);

impl StockRef {
    /// Create a stock reference.
    ///
    /// References must be non-empty and contain no whitespace.
    pub fn new(value: impl Into<String>) -> Result<Self, CatalogError> {
        let value = value.into();
        if value.is_empty() {
            return Err(CatalogError::invalid_stock_ref("must not be empty"));
        }
        if value.chars().any(char::is_whitespace) {
            return Err(CatalogError::invalid_stock_ref(format!(
                "must not contain whitespace: {value:?}"
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for StockRef {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for StockRef {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_references() {
        let stock_ref = StockRef::new("D0001").unwrap();
        assert_eq!(stock_ref.as_str(), "D0001");
        assert_eq!(stock_ref.to_string(), "D0001");
    }

    #[test]
    fn rejects_empty_reference() {
        let err = StockRef::new("").unwrap_err();
        assert!(matches!(err, CatalogError::InvalidStockRef(_)));
    }

    #[test]
    fn rejects_whitespace() {
        let err = "DR 1".parse::<StockRef>().unwrap_err();
        assert!(matches!(err, CatalogError::InvalidStockRef(_)));
    }
}
