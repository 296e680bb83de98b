use axum::extract::State;
use axum::Json;

use crate::api::AppState;
use crate::domain::RateSchedule;

/// Active acquiring and tax rates, as fractions.
pub async fn get_rates(State(state): State<AppState>) -> Json<RateSchedule> {
    Json(state.calculator.rates().clone())
}
