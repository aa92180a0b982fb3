use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20251020_000001_clients::Clients, m20251020_000002_collectors::Collectors};

static IDX_PAYMENT_RECORDS_CLIENT_ID: &str = "idx-payment_records-client_id";
static IDX_PAYMENT_RECORDS_DATE: &str = "idx-payment_records-date";
static IDX_PAYMENT_RECORDS_STATUS: &str = "idx-payment_records-status";
static IDX_PAYMENT_RECORDS_COLLECTOR_ID: &str = "idx-payment_records-collector_id";
static IDX_PAYMENT_RECORDS_MODE: &str = "idx-payment_records-mode";
static FK_PAYMENT_RECORDS_CLIENT_ID: &str = "fk-payment_records-client_id";
static FK_PAYMENT_RECORDS_COLLECTOR_ID: &str = "fk-payment_records-collector_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PaymentRecords::Table)
                    .if_not_exists()
                    .col(pk_auto(PaymentRecords::Id))
                    .col(integer(PaymentRecords::ClientId))
                    .col(decimal_len(PaymentRecords::Amount, 10, 2))
                    .col(string_len(PaymentRecords::Mode, 20))
                    .col(date(PaymentRecords::Date))
                    .col(integer_null(PaymentRecords::CollectorId))
                    .col(string_len(PaymentRecords::Status, 10).default("paid"))
                    .col(string_len_null(PaymentRecords::ReferenceNumber, 50).unique_key())
                    .col(text(PaymentRecords::Notes).default(""))
                    .col(timestamp(PaymentRecords::CreatedAt))
                    .col(timestamp(PaymentRecords::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_PAYMENT_RECORDS_CLIENT_ID)
                            .from(PaymentRecords::Table, PaymentRecords::ClientId)
                            .to(Clients::Table, Clients::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_PAYMENT_RECORDS_COLLECTOR_ID)
                            .from(PaymentRecords::Table, PaymentRecords::CollectorId)
                            .to(Collectors::Table, Collectors::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        for (name, column) in [
            (IDX_PAYMENT_RECORDS_CLIENT_ID, PaymentRecords::ClientId),
            (IDX_PAYMENT_RECORDS_DATE, PaymentRecords::Date),
            (IDX_PAYMENT_RECORDS_STATUS, PaymentRecords::Status),
            (IDX_PAYMENT_RECORDS_COLLECTOR_ID, PaymentRecords::CollectorId),
            (IDX_PAYMENT_RECORDS_MODE, PaymentRecords::Mode),
        ] {
            manager
                .create_index(
                    Index::create()
                        .name(name)
                        .table(PaymentRecords::Table)
                        .col(column)
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for name in [
            IDX_PAYMENT_RECORDS_MODE,
            IDX_PAYMENT_RECORDS_COLLECTOR_ID,
            IDX_PAYMENT_RECORDS_STATUS,
            IDX_PAYMENT_RECORDS_DATE,
            IDX_PAYMENT_RECORDS_CLIENT_ID,
        ] {
            manager
                .drop_index(
                    Index::drop()
                        .name(name)
                        .table(PaymentRecords::Table)
                        .to_owned(),
                )
                .await?;
        }

        manager
            .drop_table(Table::drop().table(PaymentRecords::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum PaymentRecords {
    Table,
    Id,
    ClientId,
    Amount,
    Mode,
    Date,
    CollectorId,
    Status,
    ReferenceNumber,
    Notes,
    CreatedAt,
    UpdatedAt,
}
