//! Database model type aliases.
//!
//! Short names for the SeaORM models of the `entity` crate, used in
//! repository and service signatures.

pub type ClientModel = entity::client::Model;

pub type CollectorModel = entity::collector::Model;

/// Router row, always owned by exactly one client.
pub type RouterModel = entity::router::Model;

/// Payment row, owned by a client and optionally linked to the collector who
/// processed it.
pub type PaymentRecordModel = entity::payment_record::Model;

pub type MonthlyCollectionModel = entity::monthly_collection::Model;

pub type AccountStatusReportModel = entity::account_status_report::Model;

pub type CollectorPerformanceModel = entity::collector_performance::Model;

pub type DashboardMetricsModel = entity::dashboard_metrics::Model;

pub type ActiveDevicesTrendModel = entity::active_devices_trend::Model;

pub type WeeklyCollectionModel = entity::weekly_collection::Model;

pub type DashboardSnapshotModel = entity::dashboard_snapshot::Model;
