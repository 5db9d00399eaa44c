use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, DeleteResult,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::model::wellness::CreateWellnessEntryDto;

pub struct WellnessEntryRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> WellnessEntryRepository<'a> {
    /// Creates a new instance of [`WellnessEntryRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a wellness entry for a user with its precomputed score.
    ///
    /// The insert itself enforces the parent user's existence through the
    /// foreign key constraint; there is no separate existence check. A
    /// missing user or a duplicate (user, entry_date) pair surfaces as a
    /// constraint violation in the returned [`DbErr`].
    pub async fn create(
        &self,
        user_id: i32,
        entry: &CreateWellnessEntryDto,
        wellness_score: f64,
    ) -> Result<entity::wellness_entry::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let entry = entity::wellness_entry::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            entry_date: ActiveValue::Set(entry.entry_date),
            sleep_hours: ActiveValue::Set(entry.sleep_hours),
            stress_level: ActiveValue::Set(entry.stress_level),
            caffeine_intake: ActiveValue::Set(entry.caffeine_intake),
            alcohol_intake: ActiveValue::Set(entry.alcohol_intake),
            wellness_score: ActiveValue::Set(wellness_score),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        entry.insert(self.db).await
    }

    /// Fetches an entry by ID, scoped to its owning user.
    pub async fn get_by_id_and_user(
        &self,
        entry_id: i32,
        user_id: i32,
    ) -> Result<Option<entity::wellness_entry::Model>, DbErr> {
        entity::prelude::WellnessEntry::find_by_id(entry_id)
            .filter(entity::wellness_entry::Column::UserId.eq(user_id))
            .one(self.db)
            .await
    }

    /// Lists a user's entries, most recent entry date first.
    pub async fn list_by_user(
        &self,
        user_id: i32,
    ) -> Result<Vec<entity::wellness_entry::Model>, DbErr> {
        entity::prelude::WellnessEntry::find()
            .filter(entity::wellness_entry::Column::UserId.eq(user_id))
            .order_by_desc(entity::wellness_entry::Column::EntryDate)
            .all(self.db)
            .await
    }

    /// Persists the merged lifestyle inputs and the recomputed score.
    pub async fn update(
        &self,
        model: entity::wellness_entry::Model,
        sleep_hours: f64,
        stress_level: i16,
        caffeine_intake: i32,
        alcohol_intake: i32,
        wellness_score: f64,
    ) -> Result<entity::wellness_entry::Model, DbErr> {
        let mut entry: entity::wellness_entry::ActiveModel = model.into();

        entry.sleep_hours = ActiveValue::Set(sleep_hours);
        entry.stress_level = ActiveValue::Set(stress_level);
        entry.caffeine_intake = ActiveValue::Set(caffeine_intake);
        entry.alcohol_intake = ActiveValue::Set(alcohol_intake);
        entry.wellness_score = ActiveValue::Set(wellness_score);
        entry.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        entry.update(self.db).await
    }

    /// Deletes an entry scoped to its owning user.
    ///
    /// Returns OK regardless of the entry existing; check
    /// [`DeleteResult::rows_affected`] for the outcome.
    pub async fn delete_by_id_and_user(
        &self,
        entry_id: i32,
        user_id: i32,
    ) -> Result<DeleteResult, DbErr> {
        entity::prelude::WellnessEntry::delete_many()
            .filter(entity::wellness_entry::Column::Id.eq(entry_id))
            .filter(entity::wellness_entry::Column::UserId.eq(user_id))
            .exec(self.db)
            .await
    }
}
