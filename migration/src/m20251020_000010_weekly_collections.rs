use sea_orm_migration::{prelude::*, schema::*};

static IDX_WEEKLY_COLLECTIONS_YEAR_WEEK_NUMBER: &str = "idx-weekly_collections-year-week_number";
static IDX_WEEKLY_COLLECTIONS_WEEK_START_DATE: &str = "idx-weekly_collections-week_start_date";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(WeeklyCollections::Table)
                    .if_not_exists()
                    .col(pk_auto(WeeklyCollections::Id))
                    .col(small_integer(WeeklyCollections::WeekNumber))
                    .col(small_integer(WeeklyCollections::Year))
                    .col(date(WeeklyCollections::WeekStartDate))
                    .col(decimal_len(WeeklyCollections::TotalCollection, 10, 2).default(0))
                    .col(timestamp(WeeklyCollections::CreatedAt))
                    .col(timestamp(WeeklyCollections::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_WEEKLY_COLLECTIONS_YEAR_WEEK_NUMBER)
                    .table(WeeklyCollections::Table)
                    .col(WeeklyCollections::Year)
                    .col(WeeklyCollections::WeekNumber)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_WEEKLY_COLLECTIONS_WEEK_START_DATE)
                    .table(WeeklyCollections::Table)
                    .col(WeeklyCollections::WeekStartDate)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_WEEKLY_COLLECTIONS_WEEK_START_DATE)
                    .table(WeeklyCollections::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_WEEKLY_COLLECTIONS_YEAR_WEEK_NUMBER)
                    .table(WeeklyCollections::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(WeeklyCollections::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum WeeklyCollections {
    Table,
    Id,
    WeekNumber,
    Year,
    WeekStartDate,
    TotalCollection,
    CreatedAt,
    UpdatedAt,
}
