//! Error types for the Smart ISP data layer.
//!
//! Domain failures are split into configuration errors raised at startup and
//! validation errors raised before a record is written. Both convert into the
//! crate-wide [`Error`] through `thiserror`'s `#[from]`, so repositories and
//! services can propagate with `?`.

pub mod config;
pub mod validation;

use thiserror::Error;

use crate::error::{config::ConfigError, validation::ValidationError};

/// Main error type for the Smart ISP data layer.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// A record failed field or cross-field validation and was not written.
    #[error(transparent)]
    ValidationError(#[from] ValidationError),
    /// A record referenced by the operation does not exist.
    #[error("{entity} with ID {id} not found")]
    NotFound { entity: &'static str, id: i32 },
    /// Internal error indicating a bug in the data layer.
    #[error("Internal error in the Smart ISP data layer, this indicates a bug: {0:?}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
}
