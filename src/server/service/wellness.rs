use sea_orm::{DatabaseConnection, SqlErr};

use crate::{
    model::wellness::{CreateWellnessEntryDto, UpdateWellnessEntryDto, WellnessEntryDto},
    server::{
        data::wellness_entry::WellnessEntryRepository,
        error::{record::RecordError, validation::ValidationError, Error},
        service::score::calculate_wellness_score,
    },
};

/// Service for managing daily wellness entries.
///
/// The derived wellness score is computed here and persisted by the
/// repository alongside the raw inputs, on every create and update.
pub struct WellnessService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> WellnessService<'a> {
    /// Creates a new instance of [`WellnessService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a wellness entry for a user.
    ///
    /// The parent user's existence is enforced by the foreign key constraint
    /// on the insert; a rejected insert is reported as the user not being
    /// found rather than checked with a separate query beforehand.
    ///
    /// # Returns
    /// - `Ok(WellnessEntryDto)` - Entry created with its computed score
    /// - `Err(Error::ValidationError)` - An input is outside its declared bounds
    /// - `Err(Error::RecordError)` - User absent, or an entry already exists
    ///   for this date
    pub async fn create_entry(
        &self,
        user_id: i32,
        entry: CreateWellnessEntryDto,
    ) -> Result<WellnessEntryDto, Error> {
        validate_entry_bounds(
            entry.sleep_hours,
            entry.stress_level,
            entry.caffeine_intake,
            entry.alcohol_intake,
        )?;

        let score = calculate_wellness_score(
            entry.sleep_hours,
            entry.stress_level,
            entry.caffeine_intake,
            entry.alcohol_intake,
        );

        let entry_repo = WellnessEntryRepository::new(self.db);

        match entry_repo.create(user_id, &entry, score).await {
            Ok(model) => Ok(model.into()),
            Err(err) => match err.sql_err() {
                Some(SqlErr::ForeignKeyConstraintViolation(_)) => {
                    Err(RecordError::UserNotFound(user_id).into())
                }
                Some(SqlErr::UniqueConstraintViolation(_)) => Err(RecordError::DuplicateEntryDate {
                    user_id,
                    entry_date: entry.entry_date,
                }
                .into()),
                _ => Err(err.into()),
            },
        }
    }

    /// Lists a user's entries, most recent entry date first.
    pub async fn list_entries(&self, user_id: i32) -> Result<Vec<WellnessEntryDto>, Error> {
        let entry_repo = WellnessEntryRepository::new(self.db);

        let entries = entry_repo.list_by_user(user_id).await?;

        Ok(entries.into_iter().map(WellnessEntryDto::from).collect())
    }

    /// Applies a partial update to an entry and recomputes its score.
    ///
    /// Omitted fields keep their stored values; provided fields are validated
    /// against the same bounds as on create. The score is always recomputed
    /// from the merged inputs and persisted.
    ///
    /// # Returns
    /// - `Ok(WellnessEntryDto)` - Updated entry with its recomputed score
    /// - `Err(Error::ValidationError)` - A provided field is out of bounds
    /// - `Err(Error::RecordError)` - No entry with this ID owned by this user
    pub async fn update_entry(
        &self,
        user_id: i32,
        entry_id: i32,
        update: UpdateWellnessEntryDto,
    ) -> Result<WellnessEntryDto, Error> {
        let entry_repo = WellnessEntryRepository::new(self.db);

        let model = entry_repo
            .get_by_id_and_user(entry_id, user_id)
            .await?
            .ok_or(RecordError::EntryNotFound { user_id, entry_id })?;

        let sleep_hours = update.sleep_hours.unwrap_or(model.sleep_hours);
        let stress_level = update.stress_level.unwrap_or(model.stress_level);
        let caffeine_intake = update.caffeine_intake.unwrap_or(model.caffeine_intake);
        let alcohol_intake = update.alcohol_intake.unwrap_or(model.alcohol_intake);

        validate_entry_bounds(sleep_hours, stress_level, caffeine_intake, alcohol_intake)?;

        let score =
            calculate_wellness_score(sleep_hours, stress_level, caffeine_intake, alcohol_intake);

        let updated = entry_repo
            .update(
                model,
                sleep_hours,
                stress_level,
                caffeine_intake,
                alcohol_intake,
                score,
            )
            .await?;

        Ok(updated.into())
    }

    /// Deletes an entry scoped to its owning user.
    ///
    /// # Returns
    /// - `Ok(())` - Entry deleted
    /// - `Err(Error::RecordError)` - No entry with this ID owned by this user
    pub async fn delete_entry(&self, user_id: i32, entry_id: i32) -> Result<(), Error> {
        let entry_repo = WellnessEntryRepository::new(self.db);

        let result = entry_repo.delete_by_id_and_user(entry_id, user_id).await?;
        if result.rows_affected == 0 {
            return Err(RecordError::EntryNotFound { user_id, entry_id }.into());
        }

        Ok(())
    }
}

/// Rejects lifestyle inputs outside the score calculator's declared domain.
fn validate_entry_bounds(
    sleep_hours: f64,
    stress_level: i16,
    caffeine_intake: i32,
    alcohol_intake: i32,
) -> Result<(), ValidationError> {
    if !sleep_hours.is_finite() || sleep_hours < 0.0 {
        return Err(ValidationError::OutOfRange {
            field: "sleep_hours",
            reason: "must be a non-negative number".to_string(),
        });
    }

    if !(1..=10).contains(&stress_level) {
        return Err(ValidationError::OutOfRange {
            field: "stress_level",
            reason: "must be between 1 and 10".to_string(),
        });
    }

    if caffeine_intake < 0 {
        return Err(ValidationError::OutOfRange {
            field: "caffeine_intake",
            reason: "must be zero or more milligrams".to_string(),
        });
    }

    if alcohol_intake < 0 {
        return Err(ValidationError::OutOfRange {
            field: "alcohol_intake",
            reason: "must be zero or more units".to_string(),
        });
    }

    Ok(())
}
