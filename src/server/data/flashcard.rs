use chrono::{NaiveDateTime, Utc};
use sea_orm::{
    sea_query::NullOrdering, ActiveModelTrait, ActiveValue, ColumnTrait, Condition,
    DatabaseConnection, DbErr, DeleteResult, EntityTrait, Order, QueryFilter, QueryOrder,
};

use crate::model::flashcard::CreateFlashcardDto;

pub struct FlashcardRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FlashcardRepository<'a> {
    /// Creates a new instance of [`FlashcardRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a flashcard for a user.
    ///
    /// New cards start with `next_review` unset, which makes them due
    /// immediately. The parent user's existence is enforced by the foreign
    /// key constraint on the insert; a missing user or duplicate
    /// (user, front) pair surfaces as a constraint violation.
    pub async fn create(
        &self,
        user_id: i32,
        card: &CreateFlashcardDto,
    ) -> Result<entity::flashcard::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let card = entity::flashcard::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            front: ActiveValue::Set(card.front.clone()),
            back: ActiveValue::Set(card.back.clone()),
            review_count: ActiveValue::Set(0),
            last_reviewed_at: ActiveValue::Set(None),
            next_review: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        card.insert(self.db).await
    }

    /// Fetches a card by ID, scoped to its owning user.
    pub async fn get_by_id_and_user(
        &self,
        card_id: i32,
        user_id: i32,
    ) -> Result<Option<entity::flashcard::Model>, DbErr> {
        entity::prelude::Flashcard::find_by_id(card_id)
            .filter(entity::flashcard::Column::UserId.eq(user_id))
            .one(self.db)
            .await
    }

    /// Lists all of a user's cards, newest first.
    pub async fn list_by_user(&self, user_id: i32) -> Result<Vec<entity::flashcard::Model>, DbErr> {
        entity::prelude::Flashcard::find()
            .filter(entity::flashcard::Column::UserId.eq(user_id))
            .order_by_desc(entity::flashcard::Column::Id)
            .all(self.db)
            .await
    }

    /// Lists a user's due cards: `next_review` unset or already elapsed.
    ///
    /// Ordered ascending by `next_review` with nulls first, so never-reviewed
    /// cards come before the longest-overdue ones.
    pub async fn list_due_by_user(
        &self,
        user_id: i32,
        now: NaiveDateTime,
    ) -> Result<Vec<entity::flashcard::Model>, DbErr> {
        entity::prelude::Flashcard::find()
            .filter(entity::flashcard::Column::UserId.eq(user_id))
            .filter(
                Condition::any()
                    .add(entity::flashcard::Column::NextReview.is_null())
                    .add(entity::flashcard::Column::NextReview.lte(now)),
            )
            .order_by_with_nulls(
                entity::flashcard::Column::NextReview,
                Order::Asc,
                NullOrdering::First,
            )
            .all(self.db)
            .await
    }

    /// Persists updated card text.
    pub async fn update_text(
        &self,
        model: entity::flashcard::Model,
        front: String,
        back: String,
    ) -> Result<entity::flashcard::Model, DbErr> {
        let mut card: entity::flashcard::ActiveModel = model.into();

        card.front = ActiveValue::Set(front);
        card.back = ActiveValue::Set(back);
        card.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        card.update(self.db).await
    }

    /// Records a completed review: bumps the count and reschedules the card.
    pub async fn record_review(
        &self,
        model: entity::flashcard::Model,
        reviewed_at: NaiveDateTime,
        next_review: NaiveDateTime,
    ) -> Result<entity::flashcard::Model, DbErr> {
        let review_count = model.review_count + 1;
        let mut card: entity::flashcard::ActiveModel = model.into();

        card.review_count = ActiveValue::Set(review_count);
        card.last_reviewed_at = ActiveValue::Set(Some(reviewed_at));
        card.next_review = ActiveValue::Set(Some(next_review));
        card.updated_at = ActiveValue::Set(reviewed_at);

        card.update(self.db).await
    }

    /// Deletes a card scoped to its owning user.
    ///
    /// Returns OK regardless of the card existing; check
    /// [`DeleteResult::rows_affected`] for the outcome.
    pub async fn delete_by_id_and_user(
        &self,
        card_id: i32,
        user_id: i32,
    ) -> Result<DeleteResult, DbErr> {
        entity::prelude::Flashcard::delete_many()
            .filter(entity::flashcard::Column::Id.eq(card_id))
            .filter(entity::flashcard::Column::UserId.eq(user_id))
            .exec(self.db)
            .await
    }
}
