//! Data access layer repositories.
//!
//! One repository per table, each generic over [`sea_orm::ConnectionTrait`] so the
//! same code runs against a pooled connection or inside a transaction. Repositories
//! stamp `created_at`/`updated_at` themselves and carry the delete side effects the
//! schema declares (cascade and set-null), so a delete behaves the same whether or
//! not the backend enforces foreign keys.

pub mod client;
pub mod collector;
pub mod dashboard;
pub mod payment;
pub mod report;
pub mod router;
