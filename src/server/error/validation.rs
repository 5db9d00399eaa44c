use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Boundary validation failures.
///
/// Malformed input is rejected before any data-access code runs; the score
/// calculator and repositories only ever see values inside their declared
/// domains.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Field {field} is out of range: {reason}")]
    OutOfRange {
        field: &'static str,
        reason: String,
    },
    #[error("Field {0} must not be empty")]
    Empty(&'static str),
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        (
            StatusCode::BAD_REQUEST,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
