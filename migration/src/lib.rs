pub use sea_orm_migration::prelude::*;

mod m20251020_000001_clients;
mod m20251020_000002_collectors;
mod m20251020_000003_routers;
mod m20251020_000004_payment_records;
mod m20251020_000005_monthly_collections;
mod m20251020_000006_account_status_reports;
mod m20251020_000007_collector_performance;
mod m20251020_000008_dashboard_metrics;
mod m20251020_000009_active_devices_trend;
mod m20251020_000010_weekly_collections;
mod m20251020_000011_dashboard_snapshots;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251020_000001_clients::Migration),
            Box::new(m20251020_000002_collectors::Migration),
            Box::new(m20251020_000003_routers::Migration),
            Box::new(m20251020_000004_payment_records::Migration),
            Box::new(m20251020_000005_monthly_collections::Migration),
            Box::new(m20251020_000006_account_status_reports::Migration),
            Box::new(m20251020_000007_collector_performance::Migration),
            Box::new(m20251020_000008_dashboard_metrics::Migration),
            Box::new(m20251020_000009_active_devices_trend::Migration),
            Box::new(m20251020_000010_weekly_collections::Migration),
            Box::new(m20251020_000011_dashboard_snapshots::Migration),
        ]
    }
}
