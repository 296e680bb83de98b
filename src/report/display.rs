//! Pre-formatted strings for every figure a results screen shows.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::{Calculation, TaxTier, TierMap};
use crate::report::NumberFormat;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplaySummary {
    pub revenue: String,
    pub commission_amount: String,
    pub acquiring_fee_amount: String,
    pub total_unit_cost: String,
    pub tax_by_tier: BTreeMap<TaxTier, String>,
    pub profit_by_tier: BTreeMap<TaxTier, String>,
    pub margin: String,
    pub profitability: String,
    pub total_revenue: String,
    pub total_cost: String,
    pub total_profit_before_tax: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub best_total_profit: Option<String>,
}

impl DisplaySummary {
    pub fn new(calculation: &Calculation, fmt: &NumberFormat) -> Self {
        let unit = &calculation.unit;
        let total = &calculation.total;
        let money_tiers = |tiers: &TierMap| {
            tiers
                .iter()
                .map(|(tier, value)| (*tier, fmt.money(*value)))
                .collect::<BTreeMap<_, _>>()
        };

        Self {
            revenue: fmt.money(unit.revenue),
            commission_amount: fmt.money(unit.commission_amount),
            acquiring_fee_amount: fmt.money(unit.acquiring_fee_amount),
            total_unit_cost: fmt.money(unit.total_unit_cost),
            tax_by_tier: money_tiers(&unit.tax_by_tier),
            profit_by_tier: money_tiers(&unit.profit_by_tier),
            margin: fmt.percent(unit.margin_percent),
            profitability: fmt.percent(unit.profitability_percent),
            total_revenue: fmt.money(total.total_revenue),
            total_cost: fmt.money(total.total_cost),
            total_profit_before_tax: fmt.money(total.total_profit_before_tax),
            best_total_profit: total.best_profit().map(|(_, profit)| fmt.money(profit)),
        }
    }
}
