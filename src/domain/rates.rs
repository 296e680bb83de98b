//! Fee and tax rate schedule applied by the calculator.

use std::collections::BTreeMap;

use rust_decimal::Decimal as RustDecimal;
use serde::{Deserialize, Serialize};

use crate::domain::{Decimal, TaxTier};

/// Immutable rate configuration injected into the calculator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateSchedule {
    pub acquiring_rate: Decimal,
    pub tax_rates: BTreeMap<TaxTier, Decimal>,
}

impl RateSchedule {
    pub fn new(acquiring_rate: Decimal, tax_rates: BTreeMap<TaxTier, Decimal>) -> Self {
        Self {
            acquiring_rate,
            tax_rates,
        }
    }

    /// Rate for a tier, if the schedule defines one.
    pub fn tax_rate(&self, tier: TaxTier) -> Option<Decimal> {
        self.tax_rates.get(&tier).copied()
    }

    /// Tiers in ascending tier order.
    pub fn tiers(&self) -> impl Iterator<Item = (TaxTier, Decimal)> + '_ {
        self.tax_rates.iter().map(|(tier, rate)| (*tier, *rate))
    }
}

impl Default for RateSchedule {
    /// 2.5% acquiring, 2% / 5% / 7% tax tiers.
    fn default() -> Self {
        Self {
            acquiring_rate: Decimal::new(RustDecimal::new(25, 3)),
            tax_rates: BTreeMap::from([
                (TaxTier::Low, Decimal::new(RustDecimal::new(2, 2))),
                (TaxTier::Medium, Decimal::new(RustDecimal::new(5, 2))),
                (TaxTier::High, Decimal::new(RustDecimal::new(7, 2))),
            ]),
        }
    }
}
