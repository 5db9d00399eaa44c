//! Tests for WellnessService methods.
//!
//! This module verifies wellness entry management: creation with input
//! validation and score computation, the one-entry-per-date rule, listing
//! order, partial updates with score recomputation, and deletion.

use chrono::NaiveDate;
use wellspring::{
    model::wellness::{CreateWellnessEntryDto, UpdateWellnessEntryDto},
    server::{
        error::{record::RecordError, Error},
        service::wellness::WellnessService,
    },
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

/// Tests creating an entry and persisting its computed score.
///
/// Inputs of 8h sleep, stress 2, 100mg caffeine, and no alcohol score
/// 30 + 26.67 + 20 + 20 points.
///
/// Expected: Ok with wellness_score 96.67
#[tokio::test]
async fn creates_entry_with_computed_score() -> Result<(), TestError> {
    let test = TestBuilder::new().with_wellspring_tables().build().await?;
    let user = test.insert_mock_user("aki").await?;

    let wellness_service = WellnessService::new(&test.state.db);
    let result = wellness_service.create_entry(user.id, entry_input(1)).await;

    assert!(result.is_ok(), "Error: {:?}", result.err());
    let entry = result.unwrap();
    assert_eq!(entry.user_id, user.id);
    assert_eq!(entry.wellness_score, 96.67);

    Ok(())
}

/// Tests creating an entry for a user that does not exist.
///
/// Expected: Err with RecordError::UserNotFound
#[tokio::test]
async fn fails_for_nonexistent_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_wellspring_tables().build().await?;

    let wellness_service = WellnessService::new(&test.state.db);
    let result = wellness_service.create_entry(42, entry_input(1)).await;

    assert!(matches!(
        result,
        Err(Error::RecordError(RecordError::UserNotFound(42)))
    ));

    Ok(())
}

/// Tests the one-entry-per-user-per-date rule.
///
/// Expected: Err with RecordError::DuplicateEntryDate
#[tokio::test]
async fn rejects_second_entry_for_same_date() -> Result<(), TestError> {
    let test = TestBuilder::new().with_wellspring_tables().build().await?;
    let user = test.insert_mock_user("aki").await?;

    let wellness_service = WellnessService::new(&test.state.db);
    wellness_service
        .create_entry(user.id, entry_input(1))
        .await
        .unwrap();
    let result = wellness_service.create_entry(user.id, entry_input(1)).await;

    assert!(matches!(
        result,
        Err(Error::RecordError(RecordError::DuplicateEntryDate { .. }))
    ));

    Ok(())
}

/// Tests rejecting out-of-range lifestyle inputs.
///
/// Expected: Err with ValidationError for each bad input
#[tokio::test]
async fn rejects_out_of_range_inputs() -> Result<(), TestError> {
    let test = TestBuilder::new().with_wellspring_tables().build().await?;
    let user = test.insert_mock_user("aki").await?;

    let wellness_service = WellnessService::new(&test.state.db);

    let bad_inputs = [
        CreateWellnessEntryDto {
            sleep_hours: -1.0,
            ..entry_input(1)
        },
        CreateWellnessEntryDto {
            stress_level: 0,
            ..entry_input(2)
        },
        CreateWellnessEntryDto {
            stress_level: 11,
            ..entry_input(3)
        },
        CreateWellnessEntryDto {
            caffeine_intake: -10,
            ..entry_input(4)
        },
        CreateWellnessEntryDto {
            alcohol_intake: -1,
            ..entry_input(5)
        },
    ];

    for input in bad_inputs {
        let result = wellness_service.create_entry(user.id, input).await;
        assert!(matches!(result, Err(Error::ValidationError(_))));
    }

    Ok(())
}

/// Tests listing entries in reverse date order.
///
/// Expected: Ok with entry dates descending
#[tokio::test]
async fn lists_entries_newest_date_first() -> Result<(), TestError> {
    let test = TestBuilder::new().with_wellspring_tables().build().await?;
    let user = test.insert_mock_user("aki").await?;

    let wellness_service = WellnessService::new(&test.state.db);
    for day in [1, 3, 2] {
        wellness_service
            .create_entry(user.id, entry_input(day))
            .await
            .unwrap();
    }

    let entries = wellness_service.list_entries(user.id).await.unwrap();
    let days: Vec<u32> = entries
        .iter()
        .map(|e| chrono::Datelike::day(&e.entry_date))
        .collect();
    assert_eq!(days, vec![3, 2, 1]);

    Ok(())
}

/// Tests that listing entries for an unknown user yields an empty list
/// rather than an error.
///
/// Expected: Ok with an empty Vec
#[tokio::test]
async fn lists_nothing_for_unknown_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_wellspring_tables().build().await?;

    let wellness_service = WellnessService::new(&test.state.db);
    let entries = wellness_service.list_entries(42).await.unwrap();

    assert!(entries.is_empty());

    Ok(())
}

/// Tests a partial update recomputing the score from merged inputs.
///
/// Raising stress from 2 to 8 on an otherwise perfect entry drops the
/// stress sub-score to 6.67 points.
///
/// Expected: Ok with wellness_score 76.67 and other inputs unchanged
#[tokio::test]
async fn update_recomputes_score_from_merged_inputs() -> Result<(), TestError> {
    let test = TestBuilder::new().with_wellspring_tables().build().await?;
    let user = test.insert_mock_user("aki").await?;

    let wellness_service = WellnessService::new(&test.state.db);
    let entry = wellness_service
        .create_entry(user.id, entry_input(1))
        .await
        .unwrap();

    let updated = wellness_service
        .update_entry(
            user.id,
            entry.id,
            UpdateWellnessEntryDto {
                stress_level: Some(8),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.stress_level, 8);
    assert_eq!(updated.sleep_hours, 8.0);
    assert_eq!(updated.entry_date, entry.entry_date);
    assert_eq!(updated.wellness_score, 76.67);

    Ok(())
}

/// Tests rejecting an out-of-range value in a partial update.
///
/// Expected: Err with ValidationError, entry unchanged
#[tokio::test]
async fn update_rejects_out_of_range_input() -> Result<(), TestError> {
    let test = TestBuilder::new().with_wellspring_tables().build().await?;
    let user = test.insert_mock_user("aki").await?;

    let wellness_service = WellnessService::new(&test.state.db);
    let entry = wellness_service
        .create_entry(user.id, entry_input(1))
        .await
        .unwrap();

    let result = wellness_service
        .update_entry(
            user.id,
            entry.id,
            UpdateWellnessEntryDto {
                stress_level: Some(11),
                ..Default::default()
            },
        )
        .await;
    assert!(matches!(result, Err(Error::ValidationError(_))));

    let entries = wellness_service.list_entries(user.id).await.unwrap();
    assert_eq!(entries[0].stress_level, 2);

    Ok(())
}

/// Tests updating an entry that does not belong to the user.
///
/// Expected: Err with RecordError::EntryNotFound
#[tokio::test]
async fn update_fails_for_wrong_owner() -> Result<(), TestError> {
    let test = TestBuilder::new().with_wellspring_tables().build().await?;
    let owner = test.insert_mock_user("aki").await?;
    let other = test.insert_mock_user("ren").await?;

    let wellness_service = WellnessService::new(&test.state.db);
    let entry = wellness_service
        .create_entry(owner.id, entry_input(1))
        .await
        .unwrap();

    let result = wellness_service
        .update_entry(other.id, entry.id, UpdateWellnessEntryDto::default())
        .await;

    assert!(matches!(
        result,
        Err(Error::RecordError(RecordError::EntryNotFound { .. }))
    ));

    Ok(())
}

/// Tests deleting an entry, and that deleting it twice fails.
///
/// Expected: Ok, then Err with RecordError::EntryNotFound
#[tokio::test]
async fn deletes_entry_once() -> Result<(), TestError> {
    let test = TestBuilder::new().with_wellspring_tables().build().await?;
    let user = test.insert_mock_user("aki").await?;

    let wellness_service = WellnessService::new(&test.state.db);
    let entry = wellness_service
        .create_entry(user.id, entry_input(1))
        .await
        .unwrap();

    wellness_service
        .delete_entry(user.id, entry.id)
        .await
        .unwrap();

    let result = wellness_service.delete_entry(user.id, entry.id).await;
    assert!(matches!(
        result,
        Err(Error::RecordError(RecordError::EntryNotFound { .. }))
    ));

    Ok(())
}
