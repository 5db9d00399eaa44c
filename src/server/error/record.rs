use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Errors for records that are absent or collide on a natural key.
///
/// Parent existence is enforced by the foreign-key constraint on the insert
/// itself rather than a separate lookup, so a rejected insert is reported
/// here as the parent being not found.
#[derive(Error, Debug)]
pub enum RecordError {
    #[error("User ID {0} not found")]
    UserNotFound(i32),
    #[error("Wellness entry ID {entry_id} not found for user ID {user_id}")]
    EntryNotFound { user_id: i32, entry_id: i32 },
    #[error("Flashcard ID {card_id} not found for user ID {user_id}")]
    CardNotFound { user_id: i32, card_id: i32 },
    #[error("User with display name {0:?} already exists")]
    DuplicateDisplayName(String),
    #[error("User ID {user_id} already has a wellness entry for {entry_date}")]
    DuplicateEntryDate {
        user_id: i32,
        entry_date: chrono::NaiveDate,
    },
    #[error("User ID {user_id} already has a flashcard with front {front:?}")]
    DuplicateCardFront { user_id: i32, front: String },
}

impl RecordError {
    fn not_found(message: &str) -> Response {
        (
            StatusCode::NOT_FOUND,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }

    fn conflict(message: &str) -> Response {
        (
            StatusCode::CONFLICT,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}

impl IntoResponse for RecordError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::UserNotFound(_) => Self::not_found("User not found"),
            Self::EntryNotFound { .. } => Self::not_found("Wellness entry not found"),
            Self::CardNotFound { .. } => Self::not_found("Flashcard not found"),
            Self::DuplicateDisplayName(_) => {
                Self::conflict("A user with this display name already exists")
            }
            Self::DuplicateEntryDate { .. } => {
                Self::conflict("A wellness entry already exists for this date")
            }
            Self::DuplicateCardFront { .. } => {
                Self::conflict("A flashcard with this front already exists")
            }
        }
    }
}
