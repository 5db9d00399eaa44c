//! Error types for the Wellspring server.
//!
//! Domain-specific error enums live in submodules and are aggregated into a
//! single [`Error`] type via `thiserror`'s `#[from]` conversions. Every error
//! implements `IntoResponse` so handlers can return `Result<_, Error>` and
//! have failures mapped to the right HTTP status. Handlers perform no
//! recovery; a failure is logged and surfaces directly at the HTTP boundary.

pub mod config;
pub mod record;
pub mod validation;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{config::ConfigError, record::RecordError, validation::ValidationError},
};

/// Main error type for the Wellspring server.
///
/// # Error Categories
/// - Configuration errors (missing/invalid environment variables)
/// - Validation errors (out-of-range or empty request fields, 400)
/// - Record errors (missing parents or targets, duplicate natural keys; 404/409)
/// - Database errors (query failures, connection issues; 500)
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Request field rejected at the boundary before any handler logic ran.
    #[error(transparent)]
    ValidationError(#[from] ValidationError),
    /// A referenced record is absent or a natural key is already taken.
    #[error(transparent)]
    RecordError(#[from] RecordError),
    /// Database error (query failures, connection issues, constraint violations
    /// that were not translated to a [`RecordError`]).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For validation failures
/// - 404 Not Found / 409 Conflict - For record errors
/// - 500 Internal Server Error - For everything else (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::ValidationError(err) => err.into_response(),
            Self::RecordError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal
/// Server Error response.
///
/// Logs the full error message for debugging, but returns a generic error
/// message to the client to avoid exposing internal implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
