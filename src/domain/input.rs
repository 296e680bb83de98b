//! Calculator inputs: the display-form values a seller types in, and the
//! canonical per-unit parameter set the engine consumes.

use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::domain::{Decimal, UnitCount};

/// Canonical per-unit parameters. Rates are fractions in `[0, 1]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitEconomicsInput {
    pub units_sold: UnitCount,
    pub logistics_cost: Decimal,
    pub fulfillment_cost: Decimal,
    pub storage_cost: Decimal,
    pub advertising_cost: Decimal,
    pub purchase_price: Decimal,
    pub selling_price: Decimal,
    /// Marketplace commission on realized revenue.
    pub commission_rate: Decimal,
    /// Share of sold units the buyer keeps (not returned).
    pub redemption_rate: Decimal,
}

impl UnitEconomicsInput {
    /// Build the canonical input from display-form values.
    ///
    /// This is the only place percentages become fractions. The form is
    /// validated first, so a count that is not a whole number within
    /// [`MAX_UNITS_SOLD`] is reported instead of being rounded or clamped.
    pub fn from_form(form: &EconomicsForm) -> Result<Self, Vec<&'static str>> {
        form.validate()?;
        let units_sold = form
            .units_sold
            .inner()
            .to_u64()
            .map(UnitCount::new)
            .ok_or_else(|| vec!["unitsSold"])?;

        Ok(Self {
            units_sold,
            logistics_cost: form.logistics,
            fulfillment_cost: form.fulfillment,
            storage_cost: form.storage_cost,
            advertising_cost: form.advertising,
            purchase_price: form.purchase_price,
            selling_price: form.selling_price,
            commission_rate: form.wb_commission.percent_to_fraction(),
            redemption_rate: form.redemption_rate.percent_to_fraction(),
        })
    }
}

/// Raw calculator form as entered by a seller.
///
/// `wbCommission` and `redemptionRate` are percentages (`15.5` means 15.5%).
/// Absent fields read as zero, same as an empty input box.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EconomicsForm {
    pub units_sold: Decimal,
    pub logistics: Decimal,
    pub fulfillment: Decimal,
    pub wb_commission: Decimal,
    pub storage_cost: Decimal,
    pub advertising: Decimal,
    pub purchase_price: Decimal,
    pub selling_price: Decimal,
    pub redemption_rate: Decimal,
}

/// Form fields that must be strictly positive, keyed by their JSON names.
pub const REQUIRED_FIELDS: [&str; 3] = ["unitsSold", "purchasePrice", "sellingPrice"];

/// Largest accepted `unitsSold` (one billion).
pub const MAX_UNITS_SOLD: u64 = 1_000_000_000;

/// Largest accepted magnitude of a per-unit money field (one trillion).
///
/// With percentages capped at 100 and counts at [`MAX_UNITS_SOLD`], every
/// total stays below 1e22.
pub const MAX_MONEY: u64 = 1_000_000_000_000;

/// Largest accepted percentage for `wbCommission` and `redemptionRate`.
pub const MAX_PERCENT: u64 = 100;

impl EconomicsForm {
    /// Sample data matching a typical Wildberries listing.
    pub fn example() -> Self {
        let d = |s: &str| Decimal::from_str_canonical(s).unwrap_or_default();
        Self {
            units_sold: d("100"),
            logistics: d("25.50"),
            fulfillment: d("15.00"),
            wb_commission: d("15.5"),
            storage_cost: d("5.00"),
            advertising: d("50.00"),
            purchase_price: d("200.00"),
            selling_price: d("450.00"),
            redemption_rate: d("85"),
        }
    }

    /// Check every field; returns the failing field names in form order.
    ///
    /// Required fields must be strictly positive and `unitsSold` a whole
    /// number. Every field must also stay within its bound: [`MAX_UNITS_SOLD`]
    /// for the count, [`MAX_MONEY`] in magnitude for money, and
    /// `0..=`[`MAX_PERCENT`] for percentages.
    pub fn validate(&self) -> Result<(), Vec<&'static str>> {
        let invalid: Vec<&'static str> = self
            .fields()
            .into_iter()
            .filter(|(name, value)| !field_ok(*name, *value))
            .map(|(name, _)| name)
            .collect();

        if invalid.is_empty() {
            Ok(())
        } else {
            Err(invalid)
        }
    }

    fn fields(&self) -> [(&'static str, Decimal); 9] {
        [
            ("unitsSold", self.units_sold),
            ("logistics", self.logistics),
            ("fulfillment", self.fulfillment),
            ("wbCommission", self.wb_commission),
            ("storageCost", self.storage_cost),
            ("advertising", self.advertising),
            ("purchasePrice", self.purchase_price),
            ("sellingPrice", self.selling_price),
            ("redemptionRate", self.redemption_rate),
        ]
    }
}

fn field_ok(name: &'static str, value: Decimal) -> bool {
    if REQUIRED_FIELDS.contains(&name) && !value.is_positive() {
        return false;
    }
    match name {
        "unitsSold" => value.is_integer() && value <= Decimal::from(MAX_UNITS_SOLD),
        "wbCommission" | "redemptionRate" => {
            !value.is_negative() && value <= Decimal::from(MAX_PERCENT)
        }
        _ => value.abs() <= Decimal::from(MAX_MONEY),
    }
}
