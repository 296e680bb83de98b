use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;

use crate::api::calculate::{evaluate_form, parse_form};
use crate::api::AppState;
use crate::domain::EconomicsForm;
use crate::error::AppError;
use crate::report::{share_message, ExportRecord, SharePayload};

/// Build the chat share payload for a calculation. Nothing is sent.
pub async fn post_share(
    State(state): State<AppState>,
    body: Result<Json<EconomicsForm>, JsonRejection>,
) -> Result<Json<SharePayload>, AppError> {
    let form = parse_form(body)?;
    let (input, calculation) = evaluate_form(&state, &form)?;

    let message = share_message(
        &form,
        &calculation.unit,
        &calculation.total,
        &state.config.number_format,
        state.config.share_signature.as_deref(),
    );
    let record = ExportRecord::new(form, input, calculation);

    Ok(Json(SharePayload::new(record, message)))
}
