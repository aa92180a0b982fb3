use migration::{Migrator, MigratorTrait};
use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait,
};

use crate::{config::Config, error::Error};

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    let mut opt = ConnectOptions::new(&config.database_url);
    opt.max_connections(config.database_max_connections)
        .sqlx_logging(config.database_sql_logging);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    tracing::info!("Connected to database, migrations are up to date");

    Ok(db)
}

/// Counts the rows of every table, in migration order
pub async fn table_summary<C: ConnectionTrait>(db: &C) -> Result<Vec<(&'static str, u64)>, DbErr> {
    Ok(vec![
        ("clients", count(db, entity::prelude::Client).await?),
        ("collectors", count(db, entity::prelude::Collector).await?),
        ("routers", count(db, entity::prelude::Router).await?),
        ("payment_records", count(db, entity::prelude::PaymentRecord).await?),
        (
            "monthly_collections",
            count(db, entity::prelude::MonthlyCollection).await?,
        ),
        (
            "account_status_reports",
            count(db, entity::prelude::AccountStatusReport).await?,
        ),
        (
            "collector_performance",
            count(db, entity::prelude::CollectorPerformance).await?,
        ),
        (
            "dashboard_metrics",
            count(db, entity::prelude::DashboardMetrics).await?,
        ),
        (
            "active_devices_trend",
            count(db, entity::prelude::ActiveDevicesTrend).await?,
        ),
        (
            "weekly_collections",
            count(db, entity::prelude::WeeklyCollection).await?,
        ),
        (
            "dashboard_snapshots",
            count(db, entity::prelude::DashboardSnapshot).await?,
        ),
    ])
}

async fn count<C, E>(db: &C, _: E) -> Result<u64, DbErr>
where
    C: ConnectionTrait,
    E: EntityTrait,
    E::Model: Sync,
{
    E::find().count(db).await
}
