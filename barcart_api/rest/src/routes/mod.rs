use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use barcart_models::contact::ValidationErrors;

use crate::models::{ApiError, ApiValidationError};

pub mod contact;
pub mod health;

pub fn internal_server_error(err: impl Into<anyhow::Error>) -> Response {
    let err = err.into();
    tracing::error!("internal server error: {err}");
    error(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
}

fn error(code: StatusCode, detail: &'static str) -> Response {
    (code, Json(ApiError { detail })).into_response()
}

/// 400 with one message per offending field, so a client can render every
/// error at once.
fn validation_error(errors: &ValidationErrors) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ApiValidationError {
            detail: "Validation failed",
            errors: errors.messages().collect(),
        }),
    )
        .into_response()
}
