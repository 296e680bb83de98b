use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Internal server error: {0}")]
    Internal(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Bad request: {0}")]
    BadRequest(String),
    #[error("Invalid fields: {}", .fields.join(", "))]
    Validation { fields: Vec<String> },
}

impl AppError {
    pub fn validation(fields: &[&str]) -> Self {
        AppError::Validation {
            fields: fields.iter().map(|f| f.to_string()).collect(),
        }
    }
}

impl From<crate::engine::CalculationError> for AppError {
    fn from(err: crate::engine::CalculationError) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

impl From<crate::report::ExportError> for AppError {
    fn from(err: crate::report::ExportError) -> Self {
        AppError::Internal(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, json!({ "error": msg })),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, json!({ "error": msg })),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, json!({ "error": msg })),
            AppError::Validation { fields } => (
                StatusCode::BAD_REQUEST,
                json!({
                    "error": "Required fields must be positive and every field within its bounds",
                    "fields": fields,
                }),
            ),
        };

        (status, Json(body)).into_response()
    }
}
