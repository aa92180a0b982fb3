use chrono::{NaiveDate, NaiveDateTime, Utc};
use entity::active_devices_trend::DayOfWeek;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    error::validation::ValidationError,
    model::validate::{decimal_digits, min_value, range, Validate},
};

/// Writable fields of a daily KPI row. The date defaults to today (UTC).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardMetricsParams {
    pub date: NaiveDate,
    pub active_users: i32,
    pub overdue_accounts: i32,
    pub disconnected_accounts: i32,
    pub collector_performance: Decimal,
}

impl Default for DashboardMetricsParams {
    fn default() -> Self {
        Self {
            date: Utc::now().date_naive(),
            active_users: 0,
            overdue_accounts: 0,
            disconnected_accounts: 0,
            collector_performance: Decimal::ZERO,
        }
    }
}

impl Validate for DashboardMetricsParams {
    fn validate(&self) -> Result<(), ValidationError> {
        min_value("active_users", self.active_users, 0)?;
        min_value("overdue_accounts", self.overdue_accounts, 0)?;
        min_value("disconnected_accounts", self.disconnected_accounts, 0)?;
        decimal_digits("collector_performance", &self.collector_performance, 5, 2)?;
        range(
            "collector_performance",
            self.collector_performance,
            Decimal::ZERO,
            Decimal::ONE_HUNDRED,
        )?;

        Ok(())
    }
}

/// Writable fields of one day of the active devices trend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActiveDevicesTrendParams {
    pub week_start_date: NaiveDate,
    pub day_of_week: DayOfWeek,
    #[serde(default)]
    pub active_devices_count: i32,
}

impl Validate for ActiveDevicesTrendParams {
    fn validate(&self) -> Result<(), ValidationError> {
        min_value("active_devices_count", self.active_devices_count, 0)
    }
}

/// Writable fields of a weekly collection total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyCollectionParams {
    pub week_number: i16,
    pub year: i16,
    pub week_start_date: NaiveDate,
    #[serde(default)]
    pub total_collection: Decimal,
}

impl Validate for WeeklyCollectionParams {
    fn validate(&self) -> Result<(), ValidationError> {
        range("week_number", self.week_number, 1, 53)?;
        min_value("year", self.year, 0)?;
        decimal_digits("total_collection", &self.total_collection, 10, 2)?;
        min_value("total_collection", self.total_collection, Decimal::ZERO)?;

        Ok(())
    }
}

/// Writable fields of a dashboard snapshot. The timestamp defaults to now and
/// both chart series default to an empty JSON object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardSnapshotParams {
    pub snapshot_date: NaiveDateTime,
    pub active_users: i32,
    pub overdue_accounts: i32,
    pub disconnected_accounts: i32,
    pub collector_performance: Decimal,
    pub active_devices_trend: Value,
    pub weekly_collections: Value,
}

impl Default for DashboardSnapshotParams {
    fn default() -> Self {
        Self {
            snapshot_date: Utc::now().naive_utc(),
            active_users: 0,
            overdue_accounts: 0,
            disconnected_accounts: 0,
            collector_performance: Decimal::ZERO,
            active_devices_trend: Value::Object(Default::default()),
            weekly_collections: Value::Object(Default::default()),
        }
    }
}

impl Validate for DashboardSnapshotParams {
    fn validate(&self) -> Result<(), ValidationError> {
        min_value("active_users", self.active_users, 0)?;
        min_value("overdue_accounts", self.overdue_accounts, 0)?;
        min_value("disconnected_accounts", self.disconnected_accounts, 0)?;
        decimal_digits("collector_performance", &self.collector_performance, 5, 2)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, Utc};
    use rust_decimal::Decimal;
    use serde_json::json;

    use super::{DashboardMetricsParams, DashboardSnapshotParams, WeeklyCollectionParams};
    use crate::{error::validation::ValidationError, model::Validate};

    #[test]
    fn metrics_default_to_today() {
        let params = DashboardMetricsParams::default();

        assert_eq!(params.date, Utc::now().date_naive());
        assert_eq!(params.collector_performance, Decimal::ZERO);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn rejects_collector_performance_above_one_hundred() {
        let params = DashboardMetricsParams {
            collector_performance: Decimal::new(10050, 2),
            ..Default::default()
        };

        assert!(matches!(
            params.validate(),
            Err(ValidationError::AboveMaximum {
                field: "collector_performance",
                ..
            })
        ));
    }

    #[test]
    fn snapshot_series_default_to_empty_objects() {
        let params = DashboardSnapshotParams::default();

        assert_eq!(params.active_devices_trend, json!({}));
        assert_eq!(params.weekly_collections, json!({}));
    }

    #[test]
    fn limits_week_number() {
        let mut params = WeeklyCollectionParams {
            week_number: 53,
            year: 2026,
            week_start_date: NaiveDate::from_ymd_opt(2026, 12, 28).unwrap(),
            total_collection: Decimal::ZERO,
        };
        assert!(params.validate().is_ok());

        params.week_number = 54;
        assert!(params.validate().is_err());
        params.week_number = 0;
        assert!(params.validate().is_err());
    }
}
