//! Domain primitives: UnitCount, TaxTier.

use serde::{Deserialize, Serialize};

use crate::domain::Decimal;

/// Number of units sold.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct UnitCount(pub u64);

impl UnitCount {
    pub fn new(count: u64) -> Self {
        UnitCount(count)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }

    /// The count as a Decimal multiplier.
    pub fn as_decimal(&self) -> Decimal {
        Decimal::from(self.0)
    }
}

impl std::fmt::Display for UnitCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Flat-rate seller tax regime.
///
/// Variants are ordered by ascending rate in the default schedule, which is
/// also the order tier maps serialize in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaxTier {
    Low,
    Medium,
    High,
}

impl TaxTier {
    pub const ALL: [TaxTier; 3] = [TaxTier::Low, TaxTier::Medium, TaxTier::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            TaxTier::Low => "low",
            TaxTier::Medium => "medium",
            TaxTier::High => "high",
        }
    }

    /// Title-case label used in CSV headers (`taxLow`, `profitHigh`).
    pub fn label(&self) -> &'static str {
        match self {
            TaxTier::Low => "Low",
            TaxTier::Medium => "Medium",
            TaxTier::High => "High",
        }
    }
}

impl std::fmt::Display for TaxTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
