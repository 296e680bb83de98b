use axum::extract::State;
use axum::Json;

use crate::api::AppState;

pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// Ready once a rate schedule with at least one tax tier is loaded.
pub async fn ready(State(state): State<AppState>) -> Json<serde_json::Value> {
    let tiers = state.calculator.rates().tax_rates.len();
    let status = if tiers > 0 { "ready" } else { "not_ready" };
    Json(serde_json::json!({"status": status, "taxTiers": tiers}))
}
