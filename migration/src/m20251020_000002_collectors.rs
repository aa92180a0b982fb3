use sea_orm_migration::{prelude::*, schema::*};

static IDX_COLLECTORS_NAME: &str = "idx-collectors-name";
static IDX_COLLECTORS_ASSIGNED_TOWN: &str = "idx-collectors-assigned_town";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Collectors::Table)
                    .if_not_exists()
                    .col(pk_auto(Collectors::Id))
                    .col(string_len(Collectors::Name, 255))
                    .col(string_len(Collectors::AssignedTown, 120))
                    .col(integer(Collectors::ActiveClients).default(0))
                    .col(date_null(Collectors::LastCollectionDate))
                    .col(decimal_len(Collectors::PerformanceScore, 5, 2).default(0))
                    .col(decimal_len_null(Collectors::Latitude, 9, 6))
                    .col(decimal_len_null(Collectors::Longitude, 9, 6))
                    .col(timestamp(Collectors::CreatedAt))
                    .col(timestamp(Collectors::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_COLLECTORS_NAME)
                    .table(Collectors::Table)
                    .col(Collectors::Name)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_COLLECTORS_ASSIGNED_TOWN)
                    .table(Collectors::Table)
                    .col(Collectors::AssignedTown)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_COLLECTORS_ASSIGNED_TOWN)
                    .table(Collectors::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_COLLECTORS_NAME)
                    .table(Collectors::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Collectors::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Collectors {
    Table,
    Id,
    Name,
    AssignedTown,
    ActiveClients,
    LastCollectionDate,
    PerformanceScore,
    Latitude,
    Longitude,
    CreatedAt,
    UpdatedAt,
}
