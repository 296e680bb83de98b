//! Locale-aware rendering of money and percentages.

use serde::{Deserialize, Serialize};

use crate::domain::Decimal;

/// Number rendering conventions for a display locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NumberFormat {
    pub group_separator: char,
    pub decimal_separator: char,
    pub currency_suffix: String,
}

/// Supported number locales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumberLocale {
    Ru,
    En,
}

impl NumberLocale {
    pub fn format(&self) -> NumberFormat {
        match self {
            NumberLocale::Ru => NumberFormat {
                group_separator: '\u{a0}',
                decimal_separator: ',',
                currency_suffix: "руб.".to_string(),
            },
            NumberLocale::En => NumberFormat {
                group_separator: ',',
                decimal_separator: '.',
                currency_suffix: "RUB".to_string(),
            },
        }
    }
}

impl Default for NumberFormat {
    fn default() -> Self {
        NumberLocale::Ru.format()
    }
}

impl NumberFormat {
    pub fn with_currency_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.currency_suffix = suffix.into();
        self
    }

    /// Render with exactly `decimals` fraction digits and thousands grouping.
    pub fn number(&self, value: Decimal, decimals: u32) -> String {
        let rounded = value.round_half_up(decimals).inner();
        let negative = rounded.is_sign_negative() && !rounded.is_zero();
        let digits = format!("{:.*}", decimals as usize, rounded.abs());

        let (int_part, frac_part) = match digits.split_once('.') {
            Some((int_part, frac_part)) => (int_part, Some(frac_part)),
            None => (digits.as_str(), None),
        };

        let mut out = String::with_capacity(digits.len() + 8);
        if negative {
            out.push('-');
        }
        for (i, ch) in int_part.chars().enumerate() {
            if i > 0 && (int_part.len() - i) % 3 == 0 {
                out.push(self.group_separator);
            }
            out.push(ch);
        }
        if let Some(frac_part) = frac_part {
            out.push(self.decimal_separator);
            out.push_str(frac_part);
        }
        out
    }

    /// Money amount with two decimals and the currency suffix: `1 234,50 руб.`
    pub fn money(&self, value: Decimal) -> String {
        format!("{} {}", self.number(value, 2), self.currency_suffix)
    }

    /// Percentage value (already scaled to 0–100) with two decimals: `4,75%`
    pub fn percent(&self, value: Decimal) -> String {
        format!("{}%", self.number(value, 2))
    }
}
