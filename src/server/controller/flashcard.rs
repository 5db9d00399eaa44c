use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        flashcard::{CreateFlashcardDto, FlashcardDto, UpdateFlashcardDto},
    },
    server::{error::Error, model::app::AppState, service::flashcard::FlashcardService},
};

pub static FLASHCARD_TAG: &str = "flashcard";

/// Create a flashcard for a user
///
/// New cards have no scheduled review and are due immediately.
#[utoipa::path(
    post,
    path = "/api/users/{user_id}/cards",
    tag = FLASHCARD_TAG,
    params(
        ("user_id" = i32, Path, description = "ID of the owning user")
    ),
    request_body = CreateFlashcardDto,
    responses(
        (status = 201, description = "Card created", body = FlashcardDto),
        (status = 400, description = "Empty front or back", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 409, description = "Card with this front already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_card(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
    Json(card): Json<CreateFlashcardDto>,
) -> Result<impl IntoResponse + std::fmt::Debug, Error> {
    let flashcard_service = FlashcardService::new(&state.db);

    let card = flashcard_service.create_card(user_id, card).await?;

    Ok((StatusCode::CREATED, Json(card)).into_response())
}

/// List all of a user's flashcards, newest first
#[utoipa::path(
    get,
    path = "/api/users/{user_id}/cards",
    tag = FLASHCARD_TAG,
    params(
        ("user_id" = i32, Path, description = "ID of the owning user")
    ),
    responses(
        (status = 200, description = "Success when retrieving cards", body = Vec<FlashcardDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_cards(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse + std::fmt::Debug, Error> {
    let flashcard_service = FlashcardService::new(&state.db);

    let cards = flashcard_service.list_cards(user_id).await?;

    Ok((StatusCode::OK, Json(cards)).into_response())
}

/// List a user's due flashcards
///
/// Cards that were never reviewed or whose scheduled review time has elapsed,
/// never-reviewed and longest-overdue first.
#[utoipa::path(
    get,
    path = "/api/users/{user_id}/cards/due",
    tag = FLASHCARD_TAG,
    params(
        ("user_id" = i32, Path, description = "ID of the owning user")
    ),
    responses(
        (status = 200, description = "Success when retrieving due cards", body = Vec<FlashcardDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn due_cards(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse + std::fmt::Debug, Error> {
    let flashcard_service = FlashcardService::new(&state.db);

    let cards = flashcard_service.due_cards(user_id).await?;

    Ok((StatusCode::OK, Json(cards)).into_response())
}

/// Update a flashcard's text
#[utoipa::path(
    patch,
    path = "/api/users/{user_id}/cards/{card_id}",
    tag = FLASHCARD_TAG,
    params(
        ("user_id" = i32, Path, description = "ID of the owning user"),
        ("card_id" = i32, Path, description = "ID of the card")
    ),
    request_body = UpdateFlashcardDto,
    responses(
        (status = 200, description = "Card updated", body = FlashcardDto),
        (status = 400, description = "Empty front or back", body = ErrorDto),
        (status = 404, description = "Card not found for this user", body = ErrorDto),
        (status = 409, description = "Card with this front already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_card(
    State(state): State<AppState>,
    Path((user_id, card_id)): Path<(i32, i32)>,
    Json(update): Json<UpdateFlashcardDto>,
) -> Result<impl IntoResponse + std::fmt::Debug, Error> {
    let flashcard_service = FlashcardService::new(&state.db);

    let card = flashcard_service
        .update_card(user_id, card_id, update)
        .await?;

    Ok((StatusCode::OK, Json(card)).into_response())
}

/// Record a completed review for a flashcard
///
/// Bumps the review count and schedules the next review on the 1, 2, 4, 7,
/// 14, 30 day ladder.
#[utoipa::path(
    post,
    path = "/api/users/{user_id}/cards/{card_id}/review",
    tag = FLASHCARD_TAG,
    params(
        ("user_id" = i32, Path, description = "ID of the owning user"),
        ("card_id" = i32, Path, description = "ID of the card")
    ),
    responses(
        (status = 200, description = "Review recorded", body = FlashcardDto),
        (status = 404, description = "Card not found for this user", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn review_card(
    State(state): State<AppState>,
    Path((user_id, card_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse + std::fmt::Debug, Error> {
    let flashcard_service = FlashcardService::new(&state.db);

    let card = flashcard_service.record_review(user_id, card_id).await?;

    Ok((StatusCode::OK, Json(card)).into_response())
}

/// Delete a flashcard
#[utoipa::path(
    delete,
    path = "/api/users/{user_id}/cards/{card_id}",
    tag = FLASHCARD_TAG,
    params(
        ("user_id" = i32, Path, description = "ID of the owning user"),
        ("card_id" = i32, Path, description = "ID of the card")
    ),
    responses(
        (status = 204, description = "Card deleted"),
        (status = 404, description = "Card not found for this user", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_card(
    State(state): State<AppState>,
    Path((user_id, card_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse + std::fmt::Debug, Error> {
    let flashcard_service = FlashcardService::new(&state.db);

    flashcard_service.delete_card(user_id, card_id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
