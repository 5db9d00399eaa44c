use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260815_000001_create_wellspring_user_table::WellspringUser;

static IDX_FLASHCARD_USER_ID_FRONT: &str = "uq_flashcard_user_id_front";
static IDX_FLASHCARD_NEXT_REVIEW: &str = "idx_flashcard_next_review";
static FK_FLASHCARD_USER_ID: &str = "fk_flashcard_user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Flashcard::Table)
                    .if_not_exists()
                    .col(pk_auto(Flashcard::Id))
                    .col(integer(Flashcard::UserId))
                    .col(string(Flashcard::Front))
                    .col(string(Flashcard::Back))
                    .col(integer(Flashcard::ReviewCount).default(0))
                    .col(timestamp_null(Flashcard::LastReviewedAt))
                    .col(timestamp_null(Flashcard::NextReview))
                    .col(timestamp(Flashcard::CreatedAt))
                    .col(timestamp(Flashcard::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        // One card per prompt per user.
        manager
            .create_index(
                Index::create()
                    .name(IDX_FLASHCARD_USER_ID_FRONT)
                    .table(Flashcard::Table)
                    .col(Flashcard::UserId)
                    .col(Flashcard::Front)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // The due-card query filters and orders on next_review.
        manager
            .create_index(
                Index::create()
                    .name(IDX_FLASHCARD_NEXT_REVIEW)
                    .table(Flashcard::Table)
                    .col(Flashcard::NextReview)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_FLASHCARD_USER_ID)
                    .from_tbl(Flashcard::Table)
                    .from_col(Flashcard::UserId)
                    .to_tbl(WellspringUser::Table)
                    .to_col(WellspringUser::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .on_update(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_FLASHCARD_USER_ID)
                    .table(Flashcard::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_FLASHCARD_NEXT_REVIEW)
                    .table(Flashcard::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_FLASHCARD_USER_ID_FRONT)
                    .table(Flashcard::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Flashcard::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Flashcard {
    Table,
    Id,
    UserId,
    Front,
    Back,
    ReviewCount,
    LastReviewedAt,
    NextReview,
    CreatedAt,
    UpdatedAt,
}
