use sea_orm_migration::{prelude::*, schema::*};

static IDX_DASHBOARD_METRICS_DATE: &str = "idx-dashboard_metrics-date";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DashboardMetrics::Table)
                    .if_not_exists()
                    .col(pk_auto(DashboardMetrics::Id))
                    .col(date(DashboardMetrics::Date))
                    .col(integer(DashboardMetrics::ActiveUsers).default(0))
                    .col(integer(DashboardMetrics::OverdueAccounts).default(0))
                    .col(integer(DashboardMetrics::DisconnectedAccounts).default(0))
                    .col(decimal_len(DashboardMetrics::CollectorPerformance, 5, 2).default(0))
                    .col(timestamp(DashboardMetrics::CreatedAt))
                    .col(timestamp(DashboardMetrics::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_DASHBOARD_METRICS_DATE)
                    .table(DashboardMetrics::Table)
                    .col(DashboardMetrics::Date)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_DASHBOARD_METRICS_DATE)
                    .table(DashboardMetrics::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(DashboardMetrics::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum DashboardMetrics {
    Table,
    Id,
    Date,
    ActiveUsers,
    OverdueAccounts,
    DisconnectedAccounts,
    CollectorPerformance,
    CreatedAt,
    UpdatedAt,
}
