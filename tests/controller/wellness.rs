//! Tests for wellness controller endpoints.
//!
//! This module verifies the wellness entry endpoints' HTTP behavior: status
//! codes for creation, listing, partial updates, deletion, and the error
//! mapping for out-of-range inputs, missing users, and duplicate dates.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::NaiveDate;
use wellspring::{
    model::wellness::{CreateWellnessEntryDto, UpdateWellnessEntryDto},
    server::controller::wellness::{create_entry, delete_entry, list_entries, update_entry},
};
use wellspring_test_utils::prelude::*;

fn entry_input(day: u32) -> CreateWellnessEntryDto {
    CreateWellnessEntryDto {
        entry_date: NaiveDate::from_ymd_opt(2026, 8, day).unwrap(),
        sleep_hours: 8.0,
        stress_level: 2,
        caffeine_intake: 100,
        alcohol_intake: 0,
    }
}

/// Tests creating an entry over the HTTP boundary.
///
/// Expected: Ok with 201 Created
#[tokio::test]
async fn create_returns_created() -> Result<(), TestError> {
    let test = TestBuilder::new().with_wellspring_tables().build().await?;
    let user = test.insert_mock_user("aki").await?;

    let result = create_entry(State(test.state()), Path(user.id), Json(entry_input(1))).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    Ok(())
}

/// Tests creating an entry with an out-of-range input.
///
/// Expected: Err mapping to 400 Bad Request
#[tokio::test]
async fn create_rejects_out_of_range_input() -> Result<(), TestError> {
    let test = TestBuilder::new().with_wellspring_tables().build().await?;
    let user = test.insert_mock_user("aki").await?;

    let input = CreateWellnessEntryDto {
        stress_level: 11,
        ..entry_input(1)
    };
    let result = create_entry(State(test.state()), Path(user.id), Json(input)).await;

    assert!(result.is_err());
    let resp = result.unwrap_err().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Tests creating an entry for a nonexistent user.
///
/// Expected: Err mapping to 404 Not Found
#[tokio::test]
async fn create_returns_not_found_for_missing_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_wellspring_tables().build().await?;

    let result = create_entry(State(test.state()), Path(42), Json(entry_input(1))).await;

    assert!(result.is_err());
    let resp = result.unwrap_err().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Tests creating a second entry for the same date.
///
/// Expected: Err mapping to 409 Conflict
#[tokio::test]
async fn create_rejects_duplicate_date() -> Result<(), TestError> {
    let test = TestBuilder::new().with_wellspring_tables().build().await?;
    let user = test.insert_mock_user("aki").await?;
    test.insert_mock_entry(user.id, NaiveDate::from_ymd_opt(2026, 8, 1).unwrap())
        .await?;

    let result = create_entry(State(test.state()), Path(user.id), Json(entry_input(1))).await;

    assert!(result.is_err());
    let resp = result.unwrap_err().into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    Ok(())
}

/// Tests listing a user's entries.
///
/// Expected: Ok with 200 OK
#[tokio::test]
async fn list_returns_ok() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_wellspring_tables()
        .with_user("aki")
        .with_entry(1, NaiveDate::from_ymd_opt(2026, 8, 1).unwrap())
        .build()
        .await?;

    let result = list_entries(State(test.state()), Path(1)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Tests updating an entry's inputs.
///
/// Expected: Ok with 200 OK
#[tokio::test]
async fn update_returns_ok() -> Result<(), TestError> {
    let test = TestBuilder::new().with_wellspring_tables().build().await?;
    let user = test.insert_mock_user("aki").await?;
    let entry = test
        .insert_mock_entry(user.id, NaiveDate::from_ymd_opt(2026, 8, 1).unwrap())
        .await?;

    let result = update_entry(
        State(test.state()),
        Path((user.id, entry.id)),
        Json(UpdateWellnessEntryDto {
            sleep_hours: Some(6.5),
            ..Default::default()
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Tests updating a nonexistent entry.
///
/// Expected: Err mapping to 404 Not Found
#[tokio::test]
async fn update_returns_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_wellspring_tables().build().await?;
    let user = test.insert_mock_user("aki").await?;

    let result = update_entry(
        State(test.state()),
        Path((user.id, 1)),
        Json(UpdateWellnessEntryDto::default()),
    )
    .await;

    assert!(result.is_err());
    let resp = result.unwrap_err().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Tests deleting an entry.
///
/// Expected: Ok with 204 No Content
#[tokio::test]
async fn delete_returns_no_content() -> Result<(), TestError> {
    let test = TestBuilder::new().with_wellspring_tables().build().await?;
    let user = test.insert_mock_user("aki").await?;
    let entry = test
        .insert_mock_entry(user.id, NaiveDate::from_ymd_opt(2026, 8, 1).unwrap())
        .await?;

    let result = delete_entry(State(test.state()), Path((user.id, entry.id))).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    Ok(())
}

/// Tests deleting a nonexistent entry.
///
/// Expected: Err mapping to 404 Not Found
#[tokio::test]
async fn delete_returns_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_wellspring_tables().build().await?;
    let user = test.insert_mock_user("aki").await?;

    let result = delete_entry(State(test.state()), Path((user.id, 1))).await;

    assert!(result.is_err());
    let resp = result.unwrap_err().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
