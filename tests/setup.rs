use sea_orm::DatabaseConnection;
use smart_isp::{config::Config, error::Error, startup::connect_to_database};

/// Connects to a fresh in-memory SQLite database with every migration applied
pub async fn migrated_database() -> Result<DatabaseConnection, Error> {
    let config = Config {
        database_url: "sqlite::memory:".to_string(),
        database_max_connections: 1,
        database_sql_logging: false,
    };

    connect_to_database(&config).await
}
