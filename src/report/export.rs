//! Export records for downloading or archiving a calculation.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::domain::{Calculation, EconomicsForm, TotalResult, UnitEconomicsInput, UnitResult};

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("serialization failed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("csv encoding failed: {0}")]
    Csv(#[from] csv::Error),
    #[error("csv buffer: {0}")]
    CsvBuffer(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Output encoding for an export.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Json,
    Csv,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            ExportFormat::Json => "application/json",
            ExportFormat::Csv => "text/csv; charset=utf-8",
        }
    }
}

/// A self-contained snapshot of one calculation.
///
/// `input`, `unit` and `total` use the engine's own field names so a record
/// can be read back with serde.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportRecord {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub form: EconomicsForm,
    pub input: UnitEconomicsInput,
    pub unit: UnitResult,
    pub total: TotalResult,
}

impl ExportRecord {
    pub fn new(form: EconomicsForm, input: UnitEconomicsInput, calculation: Calculation) -> Self {
        Self::at(Utc::now(), form, input, calculation)
    }

    pub fn at(
        timestamp: DateTime<Utc>,
        form: EconomicsForm,
        input: UnitEconomicsInput,
        calculation: Calculation,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp,
            form,
            input,
            unit: calculation.unit,
            total: calculation.total,
        }
    }

    /// `unit-economics-YYYY-MM-DD.<ext>`, dated by the record timestamp.
    pub fn file_name(&self, format: ExportFormat) -> String {
        format!(
            "unit-economics-{}.{}",
            self.timestamp.format("%Y-%m-%d"),
            format.extension()
        )
    }

    pub fn to_json_pretty(&self) -> Result<String, ExportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn render(&self, format: ExportFormat) -> Result<String, ExportError> {
        match format {
            ExportFormat::Json => self.to_json_pretty(),
            ExportFormat::Csv => self.to_csv(),
        }
    }

    /// Flat CSV: one header row and one value row. Tier maps expand to
    /// `taxLow`, `profitHigh`, `totalTaxMedium` and so on.
    pub fn to_csv(&self) -> Result<String, ExportError> {
        let mut header: Vec<String> = Vec::new();
        let mut row: Vec<String> = Vec::new();
        let mut push = |name: String, value: String| {
            header.push(name);
            row.push(value);
        };

        push("id".to_string(), self.id.to_string());
        push("timestamp".to_string(), self.timestamp.to_rfc3339());

        let input = &self.input;
        push("unitsSold".to_string(), input.units_sold.to_string());
        push("logisticsCost".to_string(), input.logistics_cost.to_string());
        push("fulfillmentCost".to_string(), input.fulfillment_cost.to_string());
        push("storageCost".to_string(), input.storage_cost.to_string());
        push("advertisingCost".to_string(), input.advertising_cost.to_string());
        push("purchasePrice".to_string(), input.purchase_price.to_string());
        push("sellingPrice".to_string(), input.selling_price.to_string());
        push("commissionRate".to_string(), input.commission_rate.to_string());
        push("redemptionRate".to_string(), input.redemption_rate.to_string());

        let unit = &self.unit;
        push("revenue".to_string(), unit.revenue.to_string());
        push("commissionAmount".to_string(), unit.commission_amount.to_string());
        push("acquiringFeeAmount".to_string(), unit.acquiring_fee_amount.to_string());
        push("totalUnitCost".to_string(), unit.total_unit_cost.to_string());
        for (tier, tax) in &unit.tax_by_tier {
            push(format!("tax{}", tier.label()), tax.to_string());
        }
        push("profitBeforeTax".to_string(), unit.profit_before_tax.to_string());
        for (tier, profit) in &unit.profit_by_tier {
            push(format!("profit{}", tier.label()), profit.to_string());
        }
        push("marginPercent".to_string(), unit.margin_percent.to_string());
        push(
            "profitabilityPercent".to_string(),
            unit.profitability_percent.to_string(),
        );

        let total = &self.total;
        push("totalRevenue".to_string(), total.total_revenue.to_string());
        push("totalCommission".to_string(), total.total_commission.to_string());
        push("totalAcquiringFee".to_string(), total.total_acquiring_fee.to_string());
        push("totalCost".to_string(), total.total_cost.to_string());
        for (tier, tax) in &total.total_tax_by_tier {
            push(format!("totalTax{}", tier.label()), tax.to_string());
        }
        push(
            "totalProfitBeforeTax".to_string(),
            total.total_profit_before_tax.to_string(),
        );
        for (tier, profit) in &total.total_profit_by_tier {
            push(format!("totalProfit{}", tier.label()), profit.to_string());
        }

        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(&header)?;
        writer.write_record(&row)?;
        let bytes = writer
            .into_inner()
            .map_err(|e| ExportError::CsvBuffer(e.to_string()))?;
        String::from_utf8(bytes).map_err(|e| ExportError::CsvBuffer(e.to_string()))
    }

    /// Write the record into `dir`, named by date and id so same-day exports
    /// do not overwrite each other.
    pub async fn write_to_dir(
        &self,
        dir: &Path,
        format: ExportFormat,
    ) -> Result<PathBuf, ExportError> {
        tokio::fs::create_dir_all(dir).await?;
        let file_name = format!(
            "unit-economics-{}-{}.{}",
            self.timestamp.format("%Y-%m-%d"),
            self.id.simple(),
            format.extension()
        );
        let path = dir.join(file_name);
        tokio::fs::write(&path, self.render(format)?).await?;
        tracing::info!(path = %path.display(), "export written");
        Ok(path)
    }
}
