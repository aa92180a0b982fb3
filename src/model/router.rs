use chrono::NaiveDateTime;
use entity::router::{Location, Status};
use serde::{Deserialize, Serialize};

use crate::{
    error::validation::ValidationError,
    model::{
        db::RouterModel,
        validate::{max_length, min_value, range, required, Validate},
    },
};

pub const SIGNAL_STRENGTH_MIN_DBM: f64 = -120.0;
pub const SIGNAL_STRENGTH_MAX_DBM: f64 = -30.0;

/// Writable fields of a router.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouterParams {
    pub router_id: String,
    pub client_id: i32,
    #[serde(default)]
    pub status: Status,
    /// Continuous uptime in whole seconds
    #[serde(default)]
    pub uptime: Option<i64>,
    #[serde(default)]
    pub signal_strength: Option<f64>,
    pub location: Location,
    #[serde(default)]
    pub last_seen: Option<NaiveDateTime>,
}

impl RouterParams {
    /// Creates params for an offline router with no telemetry yet.
    pub fn new(router_id: impl Into<String>, client_id: i32, location: Location) -> Self {
        Self {
            router_id: router_id.into(),
            client_id,
            status: Status::default(),
            uptime: None,
            signal_strength: None,
            location,
            last_seen: None,
        }
    }
}

impl From<&RouterModel> for RouterParams {
    fn from(router: &RouterModel) -> Self {
        Self {
            router_id: router.router_id.clone(),
            client_id: router.client_id,
            status: router.status,
            uptime: router.uptime,
            signal_strength: router.signal_strength,
            location: router.location,
            last_seen: router.last_seen,
        }
    }
}

impl Validate for RouterParams {
    fn validate(&self) -> Result<(), ValidationError> {
        required("router_id", &self.router_id)?;
        max_length("router_id", &self.router_id, 10)?;

        if let Some(uptime) = self.uptime {
            min_value("uptime", uptime, 0)?;
        }

        if let Some(signal_strength) = self.signal_strength {
            if signal_strength.is_nan() {
                return Err(ValidationError::BelowMinimum {
                    field: "signal_strength",
                    min: SIGNAL_STRENGTH_MIN_DBM.to_string(),
                });
            }
            range(
                "signal_strength",
                signal_strength,
                SIGNAL_STRENGTH_MIN_DBM,
                SIGNAL_STRENGTH_MAX_DBM,
            )?;
        }

        Ok(())
    }
}
