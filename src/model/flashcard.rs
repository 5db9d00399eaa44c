use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct FlashcardDto {
    pub id: i32,
    pub user_id: i32,
    pub front: String,
    pub back: String,
    pub review_count: i32,
    pub last_reviewed_at: Option<NaiveDateTime>,
    /// When the card next becomes due; `None` means it has never been
    /// reviewed and is due immediately.
    pub next_review: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateFlashcardDto {
    pub front: String,
    pub back: String,
}

/// Partial update of a flashcard's text; omitted fields keep their stored value.
#[derive(Clone, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UpdateFlashcardDto {
    pub front: Option<String>,
    pub back: Option<String>,
}

impl From<entity::flashcard::Model> for FlashcardDto {
    fn from(model: entity::flashcard::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            front: model.front,
            back: model.back,
            review_count: model.review_count,
            last_reviewed_at: model.last_reviewed_at,
            next_review: model.next_review,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
