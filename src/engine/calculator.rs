use crate::domain::{Calculation, Decimal, RateSchedule, TierMap, UnitEconomicsInput, UnitResult};

use super::{aggregate, CalculationError};

/// Per-unit profitability calculator for a fixed rate schedule.
///
/// Stateless apart from the schedule; `compute` is a pure function of its input.
#[derive(Debug, Clone, Default)]
pub struct UnitCalculator {
    rates: RateSchedule,
}

impl UnitCalculator {
    pub fn new(rates: RateSchedule) -> Self {
        Self { rates }
    }

    pub fn rates(&self) -> &RateSchedule {
        &self.rates
    }

    /// Compute the single-unit breakdown.
    ///
    /// Revenue is realized only on redeemed units, while every cost is charged
    /// per unit sold. Margin and profitability are pre-tax and fall back to
    /// zero when their divisor is not positive or the ratio is out of range.
    ///
    /// # Errors
    /// Returns [`CalculationError::Overflow`] if a money figure leaves the
    /// decimal range.
    pub fn compute(&self, input: &UnitEconomicsInput) -> Result<UnitResult, CalculationError> {
        let revenue = checked(
            input.selling_price.checked_mul(input.redemption_rate),
            "revenue",
        )?;
        let commission_amount = checked(
            revenue.checked_mul(input.commission_rate),
            "commissionAmount",
        )?;
        let acquiring_fee_amount = checked(
            revenue.checked_mul(self.rates.acquiring_rate),
            "acquiringFeeAmount",
        )?;

        let total_unit_cost = [
            input.logistics_cost,
            input.fulfillment_cost,
            input.storage_cost,
            input.advertising_cost,
        ]
        .into_iter()
        .try_fold(input.purchase_price, Decimal::checked_add);
        let total_unit_cost = checked(total_unit_cost, "totalUnitCost")?;

        let tax_by_tier = self
            .rates
            .tiers()
            .map(|(tier, rate)| {
                checked(revenue.checked_mul(rate), "taxByTier").map(|tax| (tier, tax))
            })
            .collect::<Result<TierMap, CalculationError>>()?;

        let profit_before_tax = [commission_amount, acquiring_fee_amount, total_unit_cost]
            .into_iter()
            .try_fold(revenue, Decimal::checked_sub);
        let profit_before_tax = checked(profit_before_tax, "profitBeforeTax")?;

        let profit_by_tier = tax_by_tier
            .iter()
            .map(|(tier, tax)| {
                checked(profit_before_tax.checked_sub(*tax), "profitByTier")
                    .map(|profit| (*tier, profit))
            })
            .collect::<Result<TierMap, CalculationError>>()?;

        let margin_percent = percent_of(profit_before_tax, revenue);
        let profitability_percent = percent_of(profit_before_tax, total_unit_cost);

        tracing::trace!(
            revenue = %revenue,
            profit_before_tax = %profit_before_tax,
            "computed unit economics"
        );

        Ok(UnitResult {
            revenue,
            commission_amount,
            acquiring_fee_amount,
            total_unit_cost,
            tax_by_tier,
            profit_before_tax,
            profit_by_tier,
            margin_percent,
            profitability_percent,
        })
    }

    /// Compute the unit breakdown and scale it by `input.units_sold`.
    pub fn evaluate(&self, input: &UnitEconomicsInput) -> Result<Calculation, CalculationError> {
        let unit = self.compute(input)?;
        let total = aggregate(&unit, input.units_sold)?;
        Ok(Calculation { unit, total })
    }
}

pub(crate) fn checked(
    value: Option<Decimal>,
    field: &'static str,
) -> Result<Decimal, CalculationError> {
    value.ok_or(CalculationError::Overflow(field))
}

/// `part / base * 100`, or zero when `base` is not positive or the ratio
/// does not fit.
fn percent_of(part: Decimal, base: Decimal) -> Decimal {
    if !base.is_positive() {
        return Decimal::zero();
    }
    part.checked_div(base)
        .and_then(|ratio| ratio.checked_mul(Decimal::hundred()))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{EconomicsForm, TaxTier, UnitCount};
    use std::collections::BTreeMap;

    fn d(s: &str) -> Decimal {
        Decimal::from_str_canonical(s).unwrap()
    }

    fn reference_input() -> UnitEconomicsInput {
        UnitEconomicsInput {
            units_sold: UnitCount::new(100),
            logistics_cost: d("25.50"),
            fulfillment_cost: d("15.00"),
            storage_cost: d("5.00"),
            advertising_cost: d("50.00"),
            purchase_price: d("200.00"),
            selling_price: d("450.00"),
            commission_rate: d("0.155"),
            redemption_rate: d("0.85"),
        }
    }

    #[test]
    fn test_reference_scenario() {
        let result = UnitCalculator::default().compute(&reference_input()).unwrap();

        assert_eq!(result.revenue, d("382.50"));
        assert_eq!(result.commission_amount, d("59.2875"));
        assert_eq!(result.acquiring_fee_amount, d("9.5625"));
        assert_eq!(result.total_unit_cost, d("295.50"));
        assert_eq!(result.profit_before_tax, d("18.15"));

        assert_eq!(result.tax(TaxTier::Low), d("7.65"));
        assert_eq!(result.tax(TaxTier::Medium), d("19.125"));
        assert_eq!(result.tax(TaxTier::High), d("26.775"));

        assert_eq!(result.profit(TaxTier::Low), d("10.5"));
        assert_eq!(result.profit(TaxTier::Medium), d("-0.975"));
        assert_eq!(result.profit(TaxTier::High), d("-8.625"));
    }

    #[test]
    fn test_reference_ratios() {
        let result = UnitCalculator::default().compute(&reference_input()).unwrap();

        // 18.15 / 382.5 * 100 = 4.745098...
        let margin = result.margin_percent.round_half_up(6);
        assert_eq!(margin, d("4.745098"));

        // 18.15 / 295.5 * 100 = 6.142131...
        let profitability = result.profitability_percent.round_half_up(6);
        assert_eq!(profitability, d("6.142132"));
    }

    #[test]
    fn test_form_and_canonical_input_agree() {
        let from_form = UnitEconomicsInput::from_form(&EconomicsForm::example()).unwrap();
        assert_eq!(from_form, reference_input());
    }

    #[test]
    fn test_zero_selling_price_zeroes_margin() {
        let input = UnitEconomicsInput {
            selling_price: Decimal::zero(),
            ..reference_input()
        };
        let result = UnitCalculator::default().compute(&input).unwrap();

        assert!(result.revenue.is_zero());
        assert!(result.margin_percent.is_zero());
        assert_eq!(result.profit_before_tax, -d("295.50"));
    }

    #[test]
    fn test_zero_cost_zeroes_profitability() {
        let input = UnitEconomicsInput {
            logistics_cost: Decimal::zero(),
            fulfillment_cost: Decimal::zero(),
            storage_cost: Decimal::zero(),
            advertising_cost: Decimal::zero(),
            purchase_price: Decimal::zero(),
            ..reference_input()
        };
        let result = UnitCalculator::default().compute(&input).unwrap();

        assert!(result.total_unit_cost.is_zero());
        assert!(result.profitability_percent.is_zero());
        assert!(result.margin_percent.is_positive());
    }

    #[test]
    fn test_zero_redemption_is_full_cost_loss() {
        let input = UnitEconomicsInput {
            redemption_rate: Decimal::zero(),
            ..reference_input()
        };
        let result = UnitCalculator::default().compute(&input).unwrap();

        assert!(result.revenue.is_zero());
        assert_eq!(result.profit_before_tax, -result.total_unit_cost);
        for tier in TaxTier::ALL {
            assert!(result.tax(tier).is_zero());
            assert_eq!(result.profit(tier), -result.total_unit_cost);
        }
    }

    #[test]
    fn test_costs_ignore_redemption_rate() {
        let calc = UnitCalculator::default();
        let full = calc
            .compute(&UnitEconomicsInput {
                redemption_rate: d("1"),
                ..reference_input()
            })
            .unwrap();
        let half = calc
            .compute(&UnitEconomicsInput {
                redemption_rate: d("0.5"),
                ..reference_input()
            })
            .unwrap();

        assert_eq!(full.total_unit_cost, half.total_unit_cost);
        assert_eq!(full.revenue, half.revenue * d("2"));
    }

    #[test]
    fn test_negative_inputs_are_accepted() {
        let input = UnitEconomicsInput {
            purchase_price: d("-100"),
            ..reference_input()
        };
        let result = UnitCalculator::default().compute(&input).unwrap();
        assert_eq!(result.total_unit_cost, d("-4.5"));
        // Negative cost base is not a positive divisor.
        assert!(result.profitability_percent.is_zero());
    }

    #[test]
    fn test_profit_plus_tax_equals_pre_tax_profit() {
        let result = UnitCalculator::default().compute(&reference_input()).unwrap();
        for tier in TaxTier::ALL {
            assert_eq!(result.profit(tier) + result.tax(tier), result.profit_before_tax);
        }
    }

    #[test]
    fn test_profit_decreases_with_tax_rate() {
        let result = UnitCalculator::default().compute(&reference_input()).unwrap();
        assert!(result.profit(TaxTier::High) <= result.profit(TaxTier::Medium));
        assert!(result.profit(TaxTier::Medium) <= result.profit(TaxTier::Low));
    }

    #[test]
    fn test_compute_is_idempotent() {
        let calc = UnitCalculator::default();
        let input = reference_input();
        assert_eq!(calc.compute(&input), calc.compute(&input));
    }

    #[test]
    fn test_custom_schedule() {
        let rates = RateSchedule::new(
            Decimal::zero(),
            BTreeMap::from([(TaxTier::Medium, d("0.1"))]),
        );
        let result = UnitCalculator::new(rates).compute(&reference_input()).unwrap();

        assert!(result.acquiring_fee_amount.is_zero());
        assert_eq!(result.tax_by_tier.len(), 1);
        assert_eq!(result.tax(TaxTier::Medium), d("38.25"));
        assert_eq!(result.profit_before_tax, d("27.7125"));
        assert_eq!(result.profit(TaxTier::Medium), d("-10.5375"));
    }

    #[test]
    fn test_evaluate_scales_totals() {
        let calc = UnitCalculator::default();
        let calculation = calc.evaluate(&reference_input()).unwrap();
        assert_eq!(calculation.total.total_revenue, d("38250"));
        assert_eq!(calculation.total.total_profit_before_tax, d("1815"));
    }

    #[test]
    fn test_ratio_out_of_range_falls_back_to_zero() {
        // A tiny revenue against a large cost gives a margin near -1e32%.
        let input = UnitEconomicsInput {
            units_sold: UnitCount::new(1),
            logistics_cost: Decimal::zero(),
            fulfillment_cost: Decimal::zero(),
            storage_cost: Decimal::zero(),
            advertising_cost: Decimal::zero(),
            purchase_price: d("10000000000"),
            selling_price: d("0.00000000000000000001"),
            commission_rate: Decimal::zero(),
            redemption_rate: d("1"),
        };
        let result = UnitCalculator::default().compute(&input).unwrap();

        assert!(result.revenue.is_positive());
        assert!(result.margin_percent.is_zero());
        assert_eq!(result.profitability_percent.round_half_up(6), d("-100"));
    }

    #[test]
    fn test_unit_overflow_is_an_error() {
        let input = UnitEconomicsInput {
            purchase_price: Decimal::new(rust_decimal::Decimal::MAX),
            ..reference_input()
        };
        assert_eq!(
            UnitCalculator::default().compute(&input),
            Err(CalculationError::Overflow("totalUnitCost"))
        );
    }

    #[test]
    fn test_evaluate_reports_total_overflow() {
        let input = UnitEconomicsInput {
            units_sold: UnitCount::new(100),
            selling_price: d("1000000000000000000000000000"),
            redemption_rate: d("1"),
            ..reference_input()
        };
        assert_eq!(
            UnitCalculator::default().evaluate(&input),
            Err(CalculationError::Overflow("totalRevenue"))
        );
    }
}
