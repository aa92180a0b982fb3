use smart_isp::{config::Config, startup};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let db = match startup::connect_to_database(&config).await {
        Ok(db) => db,
        Err(e) => {
            tracing::error!("Failed to prepare database: {}", e);
            std::process::exit(1);
        }
    };

    match startup::table_summary(&db).await {
        Ok(summary) => {
            for (table, rows) in summary {
                tracing::info!("{}: {} rows", table, rows);
            }
        }
        Err(e) => {
            tracing::error!("Failed to count table rows: {}", e);
            std::process::exit(1);
        }
    }
}
