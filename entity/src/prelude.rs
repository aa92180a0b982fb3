pub use super::account_status_report::Entity as AccountStatusReport;
pub use super::active_devices_trend::Entity as ActiveDevicesTrend;
pub use super::client::Entity as Client;
pub use super::collector::Entity as Collector;
pub use super::collector_performance::Entity as CollectorPerformance;
pub use super::dashboard_metrics::Entity as DashboardMetrics;
pub use super::dashboard_snapshot::Entity as DashboardSnapshot;
pub use super::monthly_collection::Entity as MonthlyCollection;
pub use super::payment_record::Entity as PaymentRecord;
pub use super::router::Entity as Router;
pub use super::weekly_collection::Entity as WeeklyCollection;
