//! Wellness entry fixture utilities.

use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    constant::{TEST_ENTRY_INPUTS, TEST_ENTRY_SCORE},
    error::TestError,
    model::WellnessEntryModel,
    TestSetup,
};

impl TestSetup {
    /// Insert a wellness entry for a user with standard lifestyle inputs.
    pub async fn insert_mock_entry(
        &self,
        user_id: i32,
        entry_date: NaiveDate,
    ) -> Result<WellnessEntryModel, TestError> {
        let now = Utc::now().naive_utc();
        let (sleep_hours, stress_level, caffeine_intake, alcohol_intake) = TEST_ENTRY_INPUTS;

        Ok(
            entity::prelude::WellnessEntry::insert(entity::wellness_entry::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                entry_date: ActiveValue::Set(entry_date),
                sleep_hours: ActiveValue::Set(sleep_hours),
                stress_level: ActiveValue::Set(stress_level),
                caffeine_intake: ActiveValue::Set(caffeine_intake),
                alcohol_intake: ActiveValue::Set(alcohol_intake),
                wellness_score: ActiveValue::Set(TEST_ENTRY_SCORE),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.state.db)
            .await?,
        )
    }
}

/// Create an in-memory wellness entry model with standard test values.
///
/// No database interaction; suitable for unit tests.
pub fn mock_entry_model(user_id: i32, entry_date: NaiveDate) -> WellnessEntryModel {
    let now = Utc::now().naive_utc();
    let (sleep_hours, stress_level, caffeine_intake, alcohol_intake) = TEST_ENTRY_INPUTS;

    WellnessEntryModel {
        id: 1,
        user_id,
        entry_date,
        sleep_hours,
        stress_level,
        caffeine_intake,
        alcohol_intake,
        wellness_score: TEST_ENTRY_SCORE,
        created_at: now,
        updated_at: now,
    }
}
