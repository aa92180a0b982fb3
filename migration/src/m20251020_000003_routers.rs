use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251020_000001_clients::Clients;

static IDX_ROUTERS_ROUTER_ID: &str = "idx-routers-router_id";
static IDX_ROUTERS_STATUS: &str = "idx-routers-status";
static IDX_ROUTERS_LOCATION: &str = "idx-routers-location";
static IDX_ROUTERS_CLIENT_ID: &str = "idx-routers-client_id";
static FK_ROUTERS_CLIENT_ID: &str = "fk-routers-client_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Routers::Table)
                    .if_not_exists()
                    .col(pk_auto(Routers::Id))
                    .col(string_len_uniq(Routers::RouterId, 10))
                    .col(integer(Routers::ClientId))
                    .col(string_len(Routers::Status, 12).default("offline"))
                    .col(big_integer_null(Routers::Uptime))
                    .col(double_null(Routers::SignalStrength))
                    .col(string_len(Routers::Location, 10))
                    .col(timestamp(Routers::CreatedAt))
                    .col(timestamp(Routers::UpdatedAt))
                    .col(timestamp_null(Routers::LastSeen))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_ROUTERS_CLIENT_ID)
                            .from(Routers::Table, Routers::ClientId)
                            .to(Clients::Table, Clients::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        for (name, column) in [
            (IDX_ROUTERS_ROUTER_ID, Routers::RouterId),
            (IDX_ROUTERS_STATUS, Routers::Status),
            (IDX_ROUTERS_LOCATION, Routers::Location),
            (IDX_ROUTERS_CLIENT_ID, Routers::ClientId),
        ] {
            manager
                .create_index(
                    Index::create()
                        .name(name)
                        .table(Routers::Table)
                        .col(column)
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for name in [
            IDX_ROUTERS_CLIENT_ID,
            IDX_ROUTERS_LOCATION,
            IDX_ROUTERS_STATUS,
            IDX_ROUTERS_ROUTER_ID,
        ] {
            manager
                .drop_index(Index::drop().name(name).table(Routers::Table).to_owned())
                .await?;
        }

        manager
            .drop_table(Table::drop().table(Routers::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Routers {
    Table,
    Id,
    RouterId,
    ClientId,
    Status,
    Uptime,
    SignalStrength,
    Location,
    CreatedAt,
    UpdatedAt,
    LastSeen,
}
