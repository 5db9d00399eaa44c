use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A daily wellness entry with its derived score.
///
/// The score is persisted alongside the four lifestyle inputs it was computed
/// from and is recomputed on every create and update.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct WellnessEntryDto {
    pub id: i32,
    pub user_id: i32,
    pub entry_date: NaiveDate,
    pub sleep_hours: f64,
    pub stress_level: i16,
    pub caffeine_intake: i32,
    pub alcohol_intake: i32,
    pub wellness_score: f64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateWellnessEntryDto {
    pub entry_date: NaiveDate,
    /// Hours slept, 0 or more
    pub sleep_hours: f64,
    /// Self-reported stress on a 1-10 scale
    pub stress_level: i16,
    /// Caffeine consumed in milligrams
    pub caffeine_intake: i32,
    /// Alcohol consumed in standard units
    pub alcohol_intake: i32,
}

/// Partial update of a wellness entry; omitted fields keep their stored value.
/// The entry date is the natural key and cannot be changed.
#[derive(Clone, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UpdateWellnessEntryDto {
    pub sleep_hours: Option<f64>,
    pub stress_level: Option<i16>,
    pub caffeine_intake: Option<i32>,
    pub alcohol_intake: Option<i32>,
}

impl From<entity::wellness_entry::Model> for WellnessEntryDto {
    fn from(model: entity::wellness_entry::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            entry_date: model.entry_date,
            sleep_hours: model.sleep_hours,
            stress_level: model.stress_level,
            caffeine_intake: model.caffeine_intake,
            alcohol_intake: model.alcohol_intake,
            wellness_score: model.wellness_score,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
