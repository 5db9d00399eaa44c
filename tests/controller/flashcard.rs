//! Tests for flashcard controller endpoints.
//!
//! This module verifies the flashcard endpoints' HTTP behavior: status codes
//! for creation, listing, the due filter, partial updates, review recording,
//! deletion, and the error mapping for missing records and duplicates.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use wellspring::{
    model::flashcard::{CreateFlashcardDto, UpdateFlashcardDto},
    server::controller::flashcard::{
        create_card, delete_card, due_cards, list_cards, review_card, update_card,
    },
};
use wellspring_test_utils::prelude::*;

fn card_input(front: &str) -> CreateFlashcardDto {
    CreateFlashcardDto {
        front: front.to_string(),
        back: format!("{} (reading)", front),
    }
}

/// Tests creating a card over the HTTP boundary.
///
/// Expected: Ok with 201 Created
#[tokio::test]
async fn create_returns_created() -> Result<(), TestError> {
    let test = TestBuilder::new().with_wellspring_tables().build().await?;
    let user = test.insert_mock_user("aki").await?;

    let result = create_card(State(test.state()), Path(user.id), Json(card_input("水"))).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    Ok(())
}

/// Tests creating a card for a nonexistent user.
///
/// Expected: Err mapping to 404 Not Found
#[tokio::test]
async fn create_returns_not_found_for_missing_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_wellspring_tables().build().await?;

    let result = create_card(State(test.state()), Path(42), Json(card_input("水"))).await;

    assert!(result.is_err());
    let resp = result.unwrap_err().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Tests creating a card with a front the user already holds.
///
/// Expected: Err mapping to 409 Conflict
#[tokio::test]
async fn create_rejects_duplicate_front() -> Result<(), TestError> {
    let test = TestBuilder::new().with_wellspring_tables().build().await?;
    let user = test.insert_mock_user("aki").await?;
    test.insert_mock_card(user.id, "水", None).await?;

    let result = create_card(State(test.state()), Path(user.id), Json(card_input("水"))).await;

    assert!(result.is_err());
    let resp = result.unwrap_err().into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    Ok(())
}

/// Tests listing a user's cards.
///
/// Expected: Ok with 200 OK
#[tokio::test]
async fn list_returns_ok() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_wellspring_tables()
        .with_user("aki")
        .with_card(1, "水")
        .build()
        .await?;

    let result = list_cards(State(test.state()), Path(1)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Tests listing a user's due cards.
///
/// Expected: Ok with 200 OK
#[tokio::test]
async fn due_returns_ok() -> Result<(), TestError> {
    let test = TestBuilder::new().with_wellspring_tables().build().await?;
    let user = test.insert_mock_user("aki").await?;
    test.insert_mock_card(user.id, "水", None).await?;

    let result = due_cards(State(test.state()), Path(user.id)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Tests updating a card's text.
///
/// Expected: Ok with 200 OK
#[tokio::test]
async fn update_returns_ok() -> Result<(), TestError> {
    let test = TestBuilder::new().with_wellspring_tables().build().await?;
    let user = test.insert_mock_user("aki").await?;
    let card = test.insert_mock_card(user.id, "水", None).await?;

    let result = update_card(
        State(test.state()),
        Path((user.id, card.id)),
        Json(UpdateFlashcardDto {
            back: Some("water".to_string()),
            ..Default::default()
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Tests updating a nonexistent card.
///
/// Expected: Err mapping to 404 Not Found
#[tokio::test]
async fn update_returns_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_wellspring_tables().build().await?;
    let user = test.insert_mock_user("aki").await?;

    let result = update_card(
        State(test.state()),
        Path((user.id, 1)),
        Json(UpdateFlashcardDto::default()),
    )
    .await;

    assert!(result.is_err());
    let resp = result.unwrap_err().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Tests recording a review for a card.
///
/// Expected: Ok with 200 OK
#[tokio::test]
async fn review_returns_ok() -> Result<(), TestError> {
    let test = TestBuilder::new().with_wellspring_tables().build().await?;
    let user = test.insert_mock_user("aki").await?;
    let card = test.insert_mock_card(user.id, "水", None).await?;

    let result = review_card(State(test.state()), Path((user.id, card.id))).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Tests recording a review for a nonexistent card.
///
/// Expected: Err mapping to 404 Not Found
#[tokio::test]
async fn review_returns_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_wellspring_tables().build().await?;
    let user = test.insert_mock_user("aki").await?;

    let result = review_card(State(test.state()), Path((user.id, 1))).await;

    assert!(result.is_err());
    let resp = result.unwrap_err().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Tests deleting a card.
///
/// Expected: Ok with 204 No Content
#[tokio::test]
async fn delete_returns_no_content() -> Result<(), TestError> {
    let test = TestBuilder::new().with_wellspring_tables().build().await?;
    let user = test.insert_mock_user("aki").await?;
    let card = test.insert_mock_card(user.id, "水", None).await?;

    let result = delete_card(State(test.state()), Path((user.id, card.id))).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    Ok(())
}

/// Tests deleting a nonexistent card.
///
/// Expected: Err mapping to 404 Not Found
#[tokio::test]
async fn delete_returns_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_wellspring_tables().build().await?;
    let user = test.insert_mock_user("aki").await?;

    let result = delete_card(State(test.state()), Path((user.id, 1))).await;

    assert!(result.is_err());
    let resp = result.unwrap_err().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
