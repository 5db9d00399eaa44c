use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260815_000001_create_wellspring_user_table::WellspringUser;

static IDX_WELLNESS_ENTRY_USER_ID_ENTRY_DATE: &str = "uq_wellness_entry_user_id_entry_date";
static FK_WELLNESS_ENTRY_USER_ID: &str = "fk_wellness_entry_user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(WellnessEntry::Table)
                    .if_not_exists()
                    .col(pk_auto(WellnessEntry::Id))
                    .col(integer(WellnessEntry::UserId))
                    .col(date(WellnessEntry::EntryDate))
                    .col(double(WellnessEntry::SleepHours))
                    .col(small_integer(WellnessEntry::StressLevel))
                    .col(integer(WellnessEntry::CaffeineIntake))
                    .col(integer(WellnessEntry::AlcoholIntake))
                    .col(double(WellnessEntry::WellnessScore))
                    .col(timestamp(WellnessEntry::CreatedAt))
                    .col(timestamp(WellnessEntry::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        // One entry per user per day; duplicate inserts surface as a
        // unique constraint violation.
        manager
            .create_index(
                Index::create()
                    .name(IDX_WELLNESS_ENTRY_USER_ID_ENTRY_DATE)
                    .table(WellnessEntry::Table)
                    .col(WellnessEntry::UserId)
                    .col(WellnessEntry::EntryDate)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_WELLNESS_ENTRY_USER_ID)
                    .from_tbl(WellnessEntry::Table)
                    .from_col(WellnessEntry::UserId)
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
                    .name(FK_WELLNESS_ENTRY_USER_ID)
                    .table(WellnessEntry::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_WELLNESS_ENTRY_USER_ID_ENTRY_DATE)
                    .table(WellnessEntry::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(WellnessEntry::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum WellnessEntry {
    Table,
    Id,
    UserId,
    EntryDate,
    SleepHours,
    StressLevel,
    CaffeineIntake,
    AlcoholIntake,
    WellnessScore,
    CreatedAt,
    UpdatedAt,
}
