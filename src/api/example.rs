use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::api::calculate::{evaluate_form, CalculateResponse};
use crate::api::AppState;
use crate::domain::EconomicsForm;
use crate::error::AppError;
use crate::report::DisplaySummary;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExampleResponse {
    pub form: EconomicsForm,
    #[serde(flatten)]
    pub result: CalculateResponse,
}

/// Sample form values together with their calculation.
pub async fn get_example(State(state): State<AppState>) -> Result<Json<ExampleResponse>, AppError> {
    let form = EconomicsForm::example();
    let (input, calculation) = evaluate_form(&state, &form)?;
    let display = DisplaySummary::new(&calculation, &state.config.number_format);

    Ok(Json(ExampleResponse {
        form,
        result: CalculateResponse {
            input,
            unit: calculation.unit,
            total: calculation.total,
            display,
        },
    }))
}
