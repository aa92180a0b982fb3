use sea_orm_migration::{prelude::*, schema::*};

static IDX_CLIENTS_NAME: &str = "idx-clients-name";
static IDX_CLIENTS_TOWN: &str = "idx-clients-town";
static IDX_CLIENTS_PLAN: &str = "idx-clients-plan";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Clients::Table)
                    .if_not_exists()
                    .col(pk_auto(Clients::Id))
                    .col(string_len(Clients::Name, 255))
                    .col(string_len(Clients::Town, 120))
                    .col(string_len(Clients::Plan, 20))
                    .col(string_len(Clients::PaymentStatus, 10).default("pending"))
                    .col(string_len(Clients::RouterStatus, 10).default("offline"))
                    .col(date_null(Clients::LastPayment))
                    .col(timestamp(Clients::CreatedAt))
                    .col(timestamp(Clients::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        for (name, column) in [
            (IDX_CLIENTS_NAME, Clients::Name),
            (IDX_CLIENTS_TOWN, Clients::Town),
            (IDX_CLIENTS_PLAN, Clients::Plan),
        ] {
            manager
                .create_index(
                    Index::create()
                        .name(name)
                        .table(Clients::Table)
                        .col(column)
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for name in [IDX_CLIENTS_PLAN, IDX_CLIENTS_TOWN, IDX_CLIENTS_NAME] {
            manager
                .drop_index(Index::drop().name(name).table(Clients::Table).to_owned())
                .await?;
        }

        manager
            .drop_table(Table::drop().table(Clients::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Clients {
    Table,
    Id,
    Name,
    Town,
    Plan,
    PaymentStatus,
    RouterStatus,
    LastPayment,
    CreatedAt,
    UpdatedAt,
}
