use sea_orm_migration::{prelude::*, schema::*};

static IDX_ACTIVE_DEVICES_TREND_WEEK_START_DATE: &str = "idx-active_devices_trend-week_start_date";
static IDX_ACTIVE_DEVICES_TREND_DAY_OF_WEEK: &str = "idx-active_devices_trend-day_of_week";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ActiveDevicesTrend::Table)
                    .if_not_exists()
                    .col(pk_auto(ActiveDevicesTrend::Id))
                    .col(date(ActiveDevicesTrend::WeekStartDate))
                    .col(string_len(ActiveDevicesTrend::DayOfWeek, 10))
                    .col(integer(ActiveDevicesTrend::ActiveDevicesCount).default(0))
                    .col(timestamp(ActiveDevicesTrend::CreatedAt))
                    .col(timestamp(ActiveDevicesTrend::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ACTIVE_DEVICES_TREND_WEEK_START_DATE)
                    .table(ActiveDevicesTrend::Table)
                    .col(ActiveDevicesTrend::WeekStartDate)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ACTIVE_DEVICES_TREND_DAY_OF_WEEK)
                    .table(ActiveDevicesTrend::Table)
                    .col(ActiveDevicesTrend::DayOfWeek)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ACTIVE_DEVICES_TREND_DAY_OF_WEEK)
                    .table(ActiveDevicesTrend::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ACTIVE_DEVICES_TREND_WEEK_START_DATE)
                    .table(ActiveDevicesTrend::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ActiveDevicesTrend::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum ActiveDevicesTrend {
    Table,
    Id,
    WeekStartDate,
    DayOfWeek,
    ActiveDevicesCount,
    CreatedAt,
    UpdatedAt,
}
