//! Flashcard fixture utilities.

use chrono::{NaiveDateTime, Utc};
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, model::FlashcardModel, TestSetup};

impl TestSetup {
    /// Insert a flashcard for a user.
    ///
    /// A `next_review` of `None` leaves the card immediately due, matching a
    /// freshly created card.
    pub async fn insert_mock_card(
        &self,
        user_id: i32,
        front: &str,
        next_review: Option<NaiveDateTime>,
    ) -> Result<FlashcardModel, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::Flashcard::insert(entity::flashcard::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                front: ActiveValue::Set(front.to_string()),
                back: ActiveValue::Set(format!("{} (back)", front)),
                review_count: ActiveValue::Set(0),
                last_reviewed_at: ActiveValue::Set(None),
                next_review: ActiveValue::Set(next_review),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.state.db)
            .await?,
        )
    }
}

/// Create an in-memory flashcard model with standard test values.
///
/// No database interaction; suitable for unit tests.
pub fn mock_card_model(user_id: i32, front: &str) -> FlashcardModel {
    let now = Utc::now().naive_utc();

    FlashcardModel {
        id: 1,
        user_id,
        front: front.to_string(),
        back: format!("{} (back)", front),
        review_count: 0,
        last_reviewed_at: None,
        next_review: None,
        created_at: now,
        updated_at: now,
    }
}
