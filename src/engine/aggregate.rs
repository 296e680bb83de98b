use crate::domain::{Decimal, TierMap, TotalResult, UnitCount, UnitResult};

use super::calculator::checked;
use super::CalculationError;

/// Scale every monetary field of a unit result by the number of units sold.
///
/// Margin and profitability are ratios and are not carried into the totals.
///
/// # Errors
/// Returns [`CalculationError::Overflow`] naming the first total that leaves
/// the decimal range.
pub fn aggregate(
    unit: &UnitResult,
    units_sold: UnitCount,
) -> Result<TotalResult, CalculationError> {
    let n = units_sold.as_decimal();
    let scale = |value: Decimal, field: &'static str| checked(value.checked_mul(n), field);

    Ok(TotalResult {
        total_revenue: scale(unit.revenue, "totalRevenue")?,
        total_commission: scale(unit.commission_amount, "totalCommission")?,
        total_acquiring_fee: scale(unit.acquiring_fee_amount, "totalAcquiringFee")?,
        total_cost: scale(unit.total_unit_cost, "totalCost")?,
        total_tax_by_tier: scale_tiers(&unit.tax_by_tier, n, "totalTaxByTier")?,
        total_profit_before_tax: scale(unit.profit_before_tax, "totalProfitBeforeTax")?,
        total_profit_by_tier: scale_tiers(&unit.profit_by_tier, n, "totalProfitByTier")?,
    })
}

fn scale_tiers(
    tiers: &TierMap,
    n: Decimal,
    field: &'static str,
) -> Result<TierMap, CalculationError> {
    tiers
        .iter()
        .map(|(tier, value)| checked(value.checked_mul(n), field).map(|total| (*tier, total)))
        .collect()
}
