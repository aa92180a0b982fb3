//! SeaORM entities for the Smart ISP data layer.
//!
//! Each module maps one table. Choice fields are closed enums stored as their
//! snake_case string value, and every entity carries the display helpers the
//! dashboard and report views read.

pub mod prelude;

pub mod account_status_report;
pub mod active_devices_trend;
pub mod client;
pub mod collector;
pub mod collector_performance;
pub mod dashboard_metrics;
pub mod dashboard_snapshot;
pub mod format;
pub mod monthly_collection;
pub mod payment_record;
pub mod router;
pub mod weekly_collection;
