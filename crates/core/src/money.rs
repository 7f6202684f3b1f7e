//! Money representation.

use serde::{Deserialize, Serialize};

/// Price in minor currency units (e.g. cents).
///
/// Read-only after construction; there is no public mutator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(u64);

impl Price {
    pub fn from_minor(minor_units: u64) -> Self {
        Self(minor_units)
    }

    /// Convenience for whole-unit amounts (`Price::from_major(100)` is 100.00).
    pub fn from_major(major_units: u64) -> Self {
        Self(major_units.saturating_mul(100))
    }

    pub fn minor_units(&self) -> u64 {
        self.0
    }
}

impl core::fmt::Display for Price {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}
