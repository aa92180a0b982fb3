use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251020_000002_collectors::Collectors;

static IDX_COLLECTOR_PERFORMANCE_COLLECTOR_ID: &str = "idx-collector_performance-collector_id";
static IDX_COLLECTOR_PERFORMANCE_PERIOD: &str =
    "idx-collector_performance-period_start-period_end";
static IDX_COLLECTOR_PERFORMANCE_COLLECTED_AMOUNT: &str =
    "idx-collector_performance-collected_amount";
static FK_COLLECTOR_PERFORMANCE_COLLECTOR_ID: &str = "fk-collector_performance-collector_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CollectorPerformance::Table)
                    .if_not_exists()
                    .col(pk_auto(CollectorPerformance::Id))
                    .col(integer(CollectorPerformance::CollectorId))
                    .col(date(CollectorPerformance::PeriodStart))
                    .col(date(CollectorPerformance::PeriodEnd))
                    .col(decimal_len(CollectorPerformance::CollectedAmount, 10, 2).default(0))
                    .col(integer(CollectorPerformance::ClientsServed).default(0))
                    .col(decimal_len(CollectorPerformance::AverageRating, 3, 1).default(0))
                    .col(timestamp(CollectorPerformance::CreatedAt))
                    .col(timestamp(CollectorPerformance::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_COLLECTOR_PERFORMANCE_COLLECTOR_ID)
                            .from(CollectorPerformance::Table, CollectorPerformance::CollectorId)
                            .to(Collectors::Table, Collectors::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_COLLECTOR_PERFORMANCE_COLLECTOR_ID)
                    .table(CollectorPerformance::Table)
                    .col(CollectorPerformance::CollectorId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_COLLECTOR_PERFORMANCE_PERIOD)
                    .table(CollectorPerformance::Table)
                    .col(CollectorPerformance::PeriodStart)
                    .col(CollectorPerformance::PeriodEnd)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_COLLECTOR_PERFORMANCE_COLLECTED_AMOUNT)
                    .table(CollectorPerformance::Table)
                    .col(CollectorPerformance::CollectedAmount)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for name in [
            IDX_COLLECTOR_PERFORMANCE_COLLECTED_AMOUNT,
            IDX_COLLECTOR_PERFORMANCE_PERIOD,
            IDX_COLLECTOR_PERFORMANCE_COLLECTOR_ID,
        ] {
            manager
                .drop_index(
                    Index::drop()
                        .name(name)
                        .table(CollectorPerformance::Table)
                        .to_owned(),
                )
                .await?;
        }

        manager
            .drop_table(Table::drop().table(CollectorPerformance::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum CollectorPerformance {
    Table,
    Id,
    CollectorId,
    PeriodStart,
    PeriodEnd,
    CollectedAmount,
    ClientsServed,
    AverageRating,
    CreatedAt,
    UpdatedAt,
}
