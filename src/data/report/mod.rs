//! Repositories of the periodic report tables.

pub mod account_status;
pub mod collector_performance;
pub mod monthly_collection;
