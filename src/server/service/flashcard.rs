use chrono::{Duration, Utc};
use sea_orm::{DatabaseConnection, SqlErr};

use crate::{
    model::flashcard::{CreateFlashcardDto, FlashcardDto, UpdateFlashcardDto},
    server::{
        data::flashcard::FlashcardRepository,
        error::{record::RecordError, validation::ValidationError, Error},
    },
};

/// Review interval ladder in days, indexed by the number of completed
/// reviews before the current one. Cards reviewed more than five times
/// stay on the 30-day interval.
const REVIEW_INTERVAL_DAYS: [i64; 6] = [1, 2, 4, 7, 14, 30];

/// Service for managing flashcards and their review schedule.
pub struct FlashcardService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FlashcardService<'a> {
    /// Creates a new instance of [`FlashcardService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a flashcard for a user.
    ///
    /// New cards have no `next_review`, which makes them due immediately.
    /// The parent user's existence is enforced by the foreign key constraint
    /// on the insert.
    ///
    /// # Returns
    /// - `Ok(FlashcardDto)` - Card created
    /// - `Err(Error::ValidationError)` - Front or back empty after trimming
    /// - `Err(Error::RecordError)` - User absent, or a card with this front
    ///   already exists for the user
    pub async fn create_card(
        &self,
        user_id: i32,
        card: CreateFlashcardDto,
    ) -> Result<FlashcardDto, Error> {
        let card = CreateFlashcardDto {
            front: non_empty(&card.front, "front")?,
            back: non_empty(&card.back, "back")?,
        };

        let card_repo = FlashcardRepository::new(self.db);

        match card_repo.create(user_id, &card).await {
            Ok(model) => Ok(model.into()),
            Err(err) => match err.sql_err() {
                Some(SqlErr::ForeignKeyConstraintViolation(_)) => {
                    Err(RecordError::UserNotFound(user_id).into())
                }
                Some(SqlErr::UniqueConstraintViolation(_)) => {
                    Err(RecordError::DuplicateCardFront {
                        user_id,
                        front: card.front,
                    }
                    .into())
                }
                _ => Err(err.into()),
            },
        }
    }

    /// Lists all of a user's cards, newest first.
    pub async fn list_cards(&self, user_id: i32) -> Result<Vec<FlashcardDto>, Error> {
        let card_repo = FlashcardRepository::new(self.db);

        let cards = card_repo.list_by_user(user_id).await?;

        Ok(cards.into_iter().map(FlashcardDto::from).collect())
    }

    /// Lists a user's due cards: never reviewed or already past their
    /// scheduled review time, never-reviewed and longest-overdue first.
    pub async fn due_cards(&self, user_id: i32) -> Result<Vec<FlashcardDto>, Error> {
        let card_repo = FlashcardRepository::new(self.db);

        let cards = card_repo
            .list_due_by_user(user_id, Utc::now().naive_utc())
            .await?;

        Ok(cards.into_iter().map(FlashcardDto::from).collect())
    }

    /// Applies a partial update to a card's text.
    ///
    /// # Returns
    /// - `Ok(FlashcardDto)` - Updated card
    /// - `Err(Error::ValidationError)` - A provided field is empty after trimming
    /// - `Err(Error::RecordError)` - No card with this ID owned by this user,
    ///   or the new front collides with another card
    pub async fn update_card(
        &self,
        user_id: i32,
        card_id: i32,
        update: UpdateFlashcardDto,
    ) -> Result<FlashcardDto, Error> {
        let card_repo = FlashcardRepository::new(self.db);

        let model = card_repo
            .get_by_id_and_user(card_id, user_id)
            .await?
            .ok_or(RecordError::CardNotFound { user_id, card_id })?;

        let front = match update.front {
            Some(front) => non_empty(&front, "front")?,
            None => model.front.clone(),
        };
        let back = match update.back {
            Some(back) => non_empty(&back, "back")?,
            None => model.back.clone(),
        };

        match card_repo.update_text(model, front.clone(), back).await {
            Ok(updated) => Ok(updated.into()),
            Err(err) => match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => {
                    Err(RecordError::DuplicateCardFront { user_id, front }.into())
                }
                _ => Err(err.into()),
            },
        }
    }

    /// Records a completed review for a card.
    ///
    /// Increments the review count, stamps `last_reviewed_at`, and schedules
    /// `next_review` by the interval ladder: 1, 2, 4, 7, 14, then 30 days.
    ///
    /// # Returns
    /// - `Ok(FlashcardDto)` - Reviewed card with its new schedule
    /// - `Err(Error::RecordError)` - No card with this ID owned by this user
    pub async fn record_review(&self, user_id: i32, card_id: i32) -> Result<FlashcardDto, Error> {
        let card_repo = FlashcardRepository::new(self.db);

        let model = card_repo
            .get_by_id_and_user(card_id, user_id)
            .await?
            .ok_or(RecordError::CardNotFound { user_id, card_id })?;

        let now = Utc::now().naive_utc();
        let next_review = now + next_review_interval(model.review_count);

        let reviewed = card_repo.record_review(model, now, next_review).await?;

        Ok(reviewed.into())
    }

    /// Deletes a card scoped to its owning user.
    ///
    /// # Returns
    /// - `Ok(())` - Card deleted
    /// - `Err(Error::RecordError)` - No card with this ID owned by this user
    pub async fn delete_card(&self, user_id: i32, card_id: i32) -> Result<(), Error> {
        let card_repo = FlashcardRepository::new(self.db);

        let result = card_repo.delete_by_id_and_user(card_id, user_id).await?;
        if result.rows_affected == 0 {
            return Err(RecordError::CardNotFound { user_id, card_id }.into());
        }

        Ok(())
    }
}

/// Interval until the next review for a card with `review_count` completed
/// reviews so far.
fn next_review_interval(review_count: i32) -> Duration {
    let step = usize::try_from(review_count.max(0)).unwrap_or(usize::MAX);
    let days = REVIEW_INTERVAL_DAYS[step.min(REVIEW_INTERVAL_DAYS.len() - 1)];

    Duration::days(days)
}

fn non_empty(value: &str, field: &'static str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty(field));
    }

    Ok(trimmed.to_string())
}
