//! Human-readable summary for sharing a calculation in a chat.

use serde::{Deserialize, Serialize};

use crate::domain::{EconomicsForm, TaxTier, TotalResult, UnitResult};
use crate::report::{ExportRecord, NumberFormat};

/// Payload type tag understood by the chat bot.
pub const SHARE_PAYLOAD_TYPE: &str = "unit_economics_results";

/// Message plus the structured record it summarizes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SharePayload {
    #[serde(rename = "type")]
    pub kind: String,
    pub data: ExportRecord,
    pub message: String,
}

impl SharePayload {
    pub fn new(data: ExportRecord, message: String) -> Self {
        Self {
            kind: SHARE_PAYLOAD_TYPE.to_string(),
            data,
            message,
        }
    }
}

/// Render a Markdown summary of a calculation.
///
/// Tier profits are labelled with the rate that produced them, taken from
/// the tax amount relative to revenue so custom schedules label correctly.
pub fn share_message(
    form: &EconomicsForm,
    unit: &UnitResult,
    total: &TotalResult,
    fmt: &NumberFormat,
    signature: Option<&str>,
) -> String {
    let mut lines = vec![
        "📊 *Unit economics results*".to_string(),
        String::new(),
        "💰 *Key parameters:*".to_string(),
        format!("• Units sold: {}", form.units_sold),
        format!("• Selling price: {}", fmt.money(form.selling_price)),
        format!("• Purchase price: {}", fmt.money(form.purchase_price)),
        format!("• Marketplace commission: {}", fmt.percent(form.wb_commission)),
        format!("• Redemption rate: {}", fmt.percent(form.redemption_rate)),
        String::new(),
        "📈 *Results per unit:*".to_string(),
        format!("• Margin: {}", fmt.percent(unit.margin_percent)),
        format!("• Profitability: {}", fmt.percent(unit.profitability_percent)),
    ];

    for (tier, profit) in &unit.profit_by_tier {
        lines.push(format!(
            "• Profit ({}): {}",
            tier_label(*tier, unit, fmt),
            fmt.money(*profit)
        ));
    }

    lines.push(String::new());
    lines.push(format!("📦 *Totals ({} units):*", form.units_sold));
    lines.push(format!("• Revenue: {}", fmt.money(total.total_revenue)));
    lines.push(format!("• Costs: {}", fmt.money(total.total_cost)));
    lines.push(format!(
        "• Profit before tax: {}",
        fmt.money(total.total_profit_before_tax)
    ));
    if let Some((tier, best)) = total.best_profit() {
        lines.push(format!(
            "• Best profit ({}): {}",
            tier_label(tier, unit, fmt),
            fmt.money(best)
        ));
    }

    if let Some(signature) = signature.map(str::trim).filter(|s| !s.is_empty()) {
        lines.push(String::new());
        lines.push(format!("🤖 *Calculator:* {}", signature));
    }

    lines.join("\n")
}

fn tier_label(tier: TaxTier, unit: &UnitResult, fmt: &NumberFormat) -> String {
    if unit.revenue.is_zero() {
        return tier.to_string();
    }
    let rate = unit.tax(tier) / unit.revenue;
    format!("{}%", fmt.number(rate.fraction_to_percent(), 0))
}
