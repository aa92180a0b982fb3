//! Repositories of the cached dashboard tables.

pub mod active_devices_trend;
pub mod metrics;
pub mod snapshot;
pub mod weekly_collection;
