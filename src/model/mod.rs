//! Input parameter types and their validation rules.
//!
//! Every writable entity has a `*Params` struct carrying the caller supplied
//! fields with the same defaults the schema declares. Services call
//! [`Validate::validate`] before handing params to a repository, so a record
//! that violates a field rule never reaches the database.

pub mod client;
pub mod collector;
pub mod dashboard;
pub mod db;
pub mod payment;
pub mod report;
pub mod router;
pub mod validate;

pub use validate::{parse_choice, Validate};
