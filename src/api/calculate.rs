use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::api::AppState;
use crate::domain::{Calculation, EconomicsForm, TotalResult, UnitEconomicsInput, UnitResult};
use crate::error::AppError;
use crate::report::DisplaySummary;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculateResponse {
    pub input: UnitEconomicsInput,
    pub unit: UnitResult,
    pub total: TotalResult,
    pub display: DisplaySummary,
}

/// Unwrap a JSON body, turning extractor rejections into JSON errors.
pub(crate) fn parse_form(
    body: Result<Json<EconomicsForm>, JsonRejection>,
) -> Result<EconomicsForm, AppError> {
    body.map(|Json(form)| form)
        .map_err(|rejection| AppError::BadRequest(rejection.body_text()))
}

/// Validate a form and run it through the calculator.
pub(crate) fn evaluate_form(
    state: &AppState,
    form: &EconomicsForm,
) -> Result<(UnitEconomicsInput, Calculation), AppError> {
    let input = UnitEconomicsInput::from_form(form).map_err(|fields| {
        tracing::debug!(?fields, "rejected calculator form");
        AppError::validation(&fields)
    })?;

    let calculation = state.calculator.evaluate(&input).map_err(|err| {
        tracing::warn!(error = %err, "calculation out of range");
        AppError::from(err)
    })?;

    tracing::debug!(
        units_sold = %input.units_sold,
        revenue = %calculation.unit.revenue,
        profit_before_tax = %calculation.unit.profit_before_tax,
        "calculated unit economics"
    );

    Ok((input, calculation))
}

pub async fn post_calculate(
    State(state): State<AppState>,
    body: Result<Json<EconomicsForm>, JsonRejection>,
) -> Result<Json<CalculateResponse>, AppError> {
    let form = parse_form(body)?;
    let (input, calculation) = evaluate_form(&state, &form)?;
    let display = DisplaySummary::new(&calculation, &state.config.number_format);

    Ok(Json(CalculateResponse {
        input,
        unit: calculation.unit,
        total: calculation.total,
        display,
    }))
}
