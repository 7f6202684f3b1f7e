//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Domain-level error.
///
/// Keep this focused on deterministic domain failures (validation,
/// uniqueness). Persistence faults live with the snapshot code in
/// `stockroom-catalog`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// A stock reference is already present in the catalog.
    #[error("stock reference already present: {0}")]
    DuplicateStockRef(String),

    /// A stock reference failed validation.
    #[error("invalid stock reference: {0}")]
    InvalidStockRef(String),

    /// A tag failed validation.
    #[error("invalid tag: {0}")]
    InvalidTag(String),
}

impl CatalogError {
    pub fn duplicate(stock_ref: impl Into<String>) -> Self {
        Self::DuplicateStockRef(stock_ref.into())
    }

    pub fn invalid_stock_ref(msg: impl Into<String>) -> Self {
        Self::InvalidStockRef(msg.into())
    }

    pub fn invalid_tag(msg: impl Into<String>) -> Self {
        Self::InvalidTag(msg.into())
    }
}
