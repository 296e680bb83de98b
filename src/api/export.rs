use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;

use crate::api::calculate::{evaluate_form, parse_form};
use crate::api::AppState;
use crate::domain::EconomicsForm;
use crate::error::AppError;
use crate::report::{ExportFormat, ExportRecord};

#[derive(Debug, Deserialize)]
pub struct ExportQuery {
    #[serde(default)]
    pub format: ExportFormat,
}

/// Export a calculation as a downloadable JSON or CSV file.
///
/// When an export directory is configured the JSON record is also saved there.
pub async fn post_export(
    State(state): State<AppState>,
    Query(query): Query<ExportQuery>,
    body: Result<Json<EconomicsForm>, JsonRejection>,
) -> Result<Response, AppError> {
    let form = parse_form(body)?;
    let (input, calculation) = evaluate_form(&state, &form)?;
    let record = ExportRecord::new(form, input, calculation);

    if let Some(dir) = &state.config.export_dir {
        record.write_to_dir(dir, ExportFormat::Json).await?;
    }

    let body = record.render(query.format)?;
    let disposition = format!(
        "attachment; filename=\"{}\"",
        record.file_name(query.format)
    );

    Ok((
        [
            (header::CONTENT_TYPE, query.format.content_type().to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        body,
    )
        .into_response())
}
