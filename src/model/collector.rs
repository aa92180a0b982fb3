use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{
    error::validation::ValidationError,
    model::{
        db::CollectorModel,
        validate::{decimal_digits, max_length, min_value, range, required, Validate},
    },
};

/// Writable fields of a collector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectorParams {
    pub name: String,
    pub assigned_town: String,
    #[serde(default)]
    pub active_clients: i32,
    #[serde(default)]
    pub last_collection_date: Option<NaiveDate>,
    #[serde(default)]
    pub performance_score: Decimal,
    #[serde(default)]
    pub latitude: Option<Decimal>,
    #[serde(default)]
    pub longitude: Option<Decimal>,
}

impl CollectorParams {
    pub fn new(name: impl Into<String>, assigned_town: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            assigned_town: assigned_town.into(),
            active_clients: 0,
            last_collection_date: None,
            performance_score: Decimal::ZERO,
            latitude: None,
            longitude: None,
        }
    }
}

impl From<&CollectorModel> for CollectorParams {
    fn from(collector: &CollectorModel) -> Self {
        Self {
            name: collector.name.clone(),
            assigned_town: collector.assigned_town.clone(),
            active_clients: collector.active_clients,
            last_collection_date: collector.last_collection_date,
            performance_score: collector.performance_score,
            latitude: collector.latitude,
            longitude: collector.longitude,
        }
    }
}

impl Validate for CollectorParams {
    fn validate(&self) -> Result<(), ValidationError> {
        required("name", &self.name)?;
        max_length("name", &self.name, 255)?;
        required("assigned_town", &self.assigned_town)?;
        max_length("assigned_town", &self.assigned_town, 120)?;
        min_value("active_clients", self.active_clients, 0)?;

        decimal_digits("performance_score", &self.performance_score, 5, 2)?;
        range(
            "performance_score",
            self.performance_score,
            Decimal::ZERO,
            Decimal::ONE_HUNDRED,
        )?;

        if let Some(latitude) = &self.latitude {
            decimal_digits("latitude", latitude, 9, 6)?;
        }
        if let Some(longitude) = &self.longitude {
            decimal_digits("longitude", longitude, 9, 6)?;
        }

        Ok(())
    }
}
