use sea_orm_migration::{prelude::*, schema::*};

static IDX_DASHBOARD_SNAPSHOTS_SNAPSHOT_DATE: &str = "idx-dashboard_snapshots-snapshot_date";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DashboardSnapshots::Table)
                    .if_not_exists()
                    .col(pk_auto(DashboardSnapshots::Id))
                    .col(timestamp(DashboardSnapshots::SnapshotDate))
                    .col(integer(DashboardSnapshots::ActiveUsers).default(0))
                    .col(integer(DashboardSnapshots::OverdueAccounts).default(0))
                    .col(integer(DashboardSnapshots::DisconnectedAccounts).default(0))
                    .col(decimal_len(DashboardSnapshots::CollectorPerformance, 5, 2).default(0))
                    .col(json(DashboardSnapshots::ActiveDevicesTrend))
                    .col(json(DashboardSnapshots::WeeklyCollections))
                    .col(timestamp(DashboardSnapshots::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_DASHBOARD_SNAPSHOTS_SNAPSHOT_DATE)
                    .table(DashboardSnapshots::Table)
                    .col(DashboardSnapshots::SnapshotDate)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_DASHBOARD_SNAPSHOTS_SNAPSHOT_DATE)
                    .table(DashboardSnapshots::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(DashboardSnapshots::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum DashboardSnapshots {
    Table,
    Id,
    SnapshotDate,
    ActiveUsers,
    OverdueAccounts,
    DisconnectedAccounts,
    CollectorPerformance,
    ActiveDevicesTrend,
    WeeklyCollections,
    CreatedAt,
}
