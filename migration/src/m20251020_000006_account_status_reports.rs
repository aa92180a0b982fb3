use sea_orm_migration::{prelude::*, schema::*};

static IDX_ACCOUNT_STATUS_REPORTS_REPORT_DATE: &str = "idx-account_status_reports-report_date";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AccountStatusReports::Table)
                    .if_not_exists()
                    .col(pk_auto(AccountStatusReports::Id))
                    .col(date(AccountStatusReports::ReportDate))
                    .col(integer(AccountStatusReports::TotalAccounts))
                    .col(integer(AccountStatusReports::ActiveAccounts))
                    .col(integer(AccountStatusReports::OverdueAccounts))
                    .col(integer(AccountStatusReports::DisconnectedAccounts))
                    .col(timestamp(AccountStatusReports::CreatedAt))
                    .col(timestamp(AccountStatusReports::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ACCOUNT_STATUS_REPORTS_REPORT_DATE)
                    .table(AccountStatusReports::Table)
                    .col(AccountStatusReports::ReportDate)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ACCOUNT_STATUS_REPORTS_REPORT_DATE)
                    .table(AccountStatusReports::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(AccountStatusReports::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum AccountStatusReports {
    Table,
    Id,
    ReportDate,
    TotalAccounts,
    ActiveAccounts,
    OverdueAccounts,
    DisconnectedAccounts,
    CreatedAt,
    UpdatedAt,
}
