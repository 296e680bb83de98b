//! Calculation outputs: per-unit breakdown and volume totals.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::{Decimal, TaxTier};

/// One value per tax tier, serialized as `{"low": .., "medium": .., "high": ..}`.
pub type TierMap = BTreeMap<TaxTier, Decimal>;

/// Figures for a single unit sold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitResult {
    /// Selling price realized after returns.
    pub revenue: Decimal,
    pub commission_amount: Decimal,
    pub acquiring_fee_amount: Decimal,
    pub total_unit_cost: Decimal,
    pub tax_by_tier: TierMap,
    pub profit_before_tax: Decimal,
    pub profit_by_tier: TierMap,
    /// Pre-tax profit over revenue, in percent.
    pub margin_percent: Decimal,
    /// Pre-tax profit over total unit cost, in percent.
    pub profitability_percent: Decimal,
}

/// Unit figures scaled by units sold. Percentages do not scale and are omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TotalResult {
    pub total_revenue: Decimal,
    pub total_commission: Decimal,
    pub total_acquiring_fee: Decimal,
    pub total_cost: Decimal,
    pub total_tax_by_tier: TierMap,
    pub total_profit_before_tax: Decimal,
    pub total_profit_by_tier: TierMap,
}

/// A unit result paired with its totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Calculation {
    pub unit: UnitResult,
    pub total: TotalResult,
}

impl UnitResult {
    pub fn tax(&self, tier: TaxTier) -> Decimal {
        self.tax_by_tier.get(&tier).copied().unwrap_or_default()
    }

    pub fn profit(&self, tier: TaxTier) -> Decimal {
        self.profit_by_tier.get(&tier).copied().unwrap_or_default()
    }

    /// Highest post-tax profit across tiers.
    pub fn best_profit(&self) -> Option<(TaxTier, Decimal)> {
        self.profit_by_tier
            .iter()
            .max_by(|a, b| a.1.cmp(b.1))
            .map(|(tier, profit)| (*tier, *profit))
    }
}

impl TotalResult {
    pub fn tax(&self, tier: TaxTier) -> Decimal {
        self.total_tax_by_tier
            .get(&tier)
            .copied()
            .unwrap_or_default()
    }

    pub fn profit(&self, tier: TaxTier) -> Decimal {
        self.total_profit_by_tier
            .get(&tier)
            .copied()
            .unwrap_or_default()
    }

    /// Highest post-tax total profit across tiers.
    pub fn best_profit(&self) -> Option<(TaxTier, Decimal)> {
        self.total_profit_by_tier
            .iter()
            .max_by(|a, b| a.1.cmp(b.1))
            .map(|(tier, profit)| (*tier, *profit))
    }
}
