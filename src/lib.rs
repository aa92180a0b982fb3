//! Data layer of the Smart ISP administration tool.
//!
//! Stores clients, field collectors, routers, payments and the precomputed
//! report and dashboard aggregates in a relational database through SeaORM.
//!
//! - [`model`] holds the input params of every writable record and their validation rules
//! - [`data`] holds one repository per table
//! - [`service`] combines both, checking references and running cascading deletes in a transaction
//! - [`startup`] connects to the database and applies the `migration` crate

pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod service;
pub mod startup;
