//! Test fixture modules for database row creation.
//!
//! Each submodule adds an accessor to [`TestContext`](crate::TestContext) returning a
//! fixture helper that inserts rows with standard test values:
//!
//! - `client` - Subscriber accounts
//! - `collector` - Field collectors
//! - `router` - Client routers
//! - `payment` - Payment records
//! - `report` - Monthly collections, account status reports and collector performance
//! - `dashboard` - Active devices trend and weekly collections
//!
//! `factory` builds in-memory models without touching the database.

pub mod client;
pub mod collector;
pub mod dashboard;
pub mod factory;
pub mod payment;
pub mod report;
pub mod router;
