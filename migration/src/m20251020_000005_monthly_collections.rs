use sea_orm_migration::{prelude::*, schema::*};

static IDX_MONTHLY_COLLECTIONS_YEAR_MONTH: &str = "idx-monthly_collections-year-month";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MonthlyCollections::Table)
                    .if_not_exists()
                    .col(pk_auto(MonthlyCollections::Id))
                    .col(small_integer(MonthlyCollections::Month))
                    .col(small_integer(MonthlyCollections::Year))
                    .col(decimal_len(MonthlyCollections::TotalAmount, 10, 2).default(0))
                    .col(timestamp(MonthlyCollections::CreatedAt))
                    .col(timestamp(MonthlyCollections::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_MONTHLY_COLLECTIONS_YEAR_MONTH)
                    .table(MonthlyCollections::Table)
                    .col(MonthlyCollections::Year)
                    .col(MonthlyCollections::Month)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_MONTHLY_COLLECTIONS_YEAR_MONTH)
                    .table(MonthlyCollections::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(MonthlyCollections::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum MonthlyCollections {
    Table,
    Id,
    Month,
    Year,
    TotalAmount,
    CreatedAt,
    UpdatedAt,
}
