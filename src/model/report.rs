use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{
    error::validation::ValidationError,
    model::validate::{decimal_digits, min_value, range, Validate},
};

/// Writable fields of a monthly collection summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyCollectionParams {
    pub month: i16,
    pub year: i16,
    #[serde(default)]
    pub total_amount: Decimal,
}

impl Validate for MonthlyCollectionParams {
    fn validate(&self) -> Result<(), ValidationError> {
        range("month", self.month, 1, 12)?;
        min_value("year", self.year, 0)?;
        decimal_digits("total_amount", &self.total_amount, 10, 2)?;
        min_value("total_amount", self.total_amount, Decimal::ZERO)?;

        Ok(())
    }
}

/// Writable fields of an account status breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountStatusParams {
    pub report_date: NaiveDate,
    pub total_accounts: i32,
    pub active_accounts: i32,
    pub overdue_accounts: i32,
    pub disconnected_accounts: i32,
}

impl Validate for AccountStatusParams {
    /// Besides the non-negative counts, the three account types must add up
    /// to `total_accounts`.
    fn validate(&self) -> Result<(), ValidationError> {
        min_value("total_accounts", self.total_accounts, 0)?;
        min_value("active_accounts", self.active_accounts, 0)?;
        min_value("overdue_accounts", self.overdue_accounts, 0)?;
        min_value("disconnected_accounts", self.disconnected_accounts, 0)?;

        let sum = i64::from(self.active_accounts)
            + i64::from(self.overdue_accounts)
            + i64::from(self.disconnected_accounts);

        if sum != i64::from(self.total_accounts) {
            return Err(ValidationError::AccountTotalMismatch {
                total: self.total_accounts,
                sum,
            });
        }

        Ok(())
    }
}

/// Writable fields of a collector performance record.
///
/// `period_end` is not checked against `period_start`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectorPerformanceParams {
    pub collector_id: i32,
    pub period_start: NaiveDate,
    pub period_end: NaiveDate,
    #[serde(default)]
    pub collected_amount: Decimal,
    #[serde(default)]
    pub clients_served: i32,
    #[serde(default)]
    pub average_rating: Decimal,
}

impl CollectorPerformanceParams {
    pub fn new(collector_id: i32, period_start: NaiveDate, period_end: NaiveDate) -> Self {
        Self {
            collector_id,
            period_start,
            period_end,
            collected_amount: Decimal::ZERO,
            clients_served: 0,
            average_rating: Decimal::ZERO,
        }
    }
}

impl Validate for CollectorPerformanceParams {
    fn validate(&self) -> Result<(), ValidationError> {
        decimal_digits("collected_amount", &self.collected_amount, 10, 2)?;
        min_value("collected_amount", self.collected_amount, Decimal::ZERO)?;
        min_value("clients_served", self.clients_served, 0)?;
        decimal_digits("average_rating", &self.average_rating, 3, 1)?;
        range(
            "average_rating",
            self.average_rating,
            Decimal::ZERO,
            Decimal::new(5, 0),
        )?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    use super::{AccountStatusParams, CollectorPerformanceParams, MonthlyCollectionParams};
    use crate::{error::validation::ValidationError, model::Validate};

    fn account_status(total: i32, active: i32, overdue: i32, disconnected: i32) -> AccountStatusParams {
        AccountStatusParams {
            report_date: NaiveDate::from_ymd_opt(2025, 10, 1).unwrap(),
            total_accounts: total,
            active_accounts: active,
            overdue_accounts: overdue,
            disconnected_accounts: disconnected,
        }
    }

    #[test]
    fn accepts_consistent_account_totals() {
        assert!(account_status(200, 150, 30, 20).validate().is_ok());
        assert!(account_status(0, 0, 0, 0).validate().is_ok());
    }

    #[test]
    fn rejects_account_totals_that_do_not_add_up() {
        assert_eq!(
            account_status(200, 150, 30, 10).validate(),
            Err(ValidationError::AccountTotalMismatch {
                total: 200,
                sum: 190
            })
        );
    }

    #[test]
    fn rejects_negative_account_counts() {
        assert!(matches!(
            account_status(10, 15, -5, 0).validate(),
            Err(ValidationError::BelowMinimum {
                field: "overdue_accounts",
                ..
            })
        ));
    }

    #[test]
    fn limits_month_to_calendar() {
        let mut params = MonthlyCollectionParams {
            month: 12,
            year: 2025,
            total_amount: Decimal::new(4500000, 2),
        };
        assert!(params.validate().is_ok());

        params.month = 0;
        assert!(params.validate().is_err());
        params.month = 13;
        assert!(params.validate().is_err());
    }

    #[test]
    fn limits_rating_to_five() {
        let mut params = CollectorPerformanceParams::new(
            1,
            NaiveDate::from_ymd_opt(2025, 9, 1).unwrap(),
            NaiveDate::from_ymd_opt(2025, 9, 30).unwrap(),
        );

        params.average_rating = Decimal::new(50, 1);
        assert!(params.validate().is_ok());

        params.average_rating = Decimal::new(51, 1);
        assert!(matches!(
            params.validate(),
            Err(ValidationError::AboveMaximum {
                field: "average_rating",
                ..
            })
        ));
    }

    #[test]
    fn allows_period_end_before_start() {
        let params = CollectorPerformanceParams::new(
            1,
            NaiveDate::from_ymd_opt(2025, 9, 30).unwrap(),
            NaiveDate::from_ymd_opt(2025, 9, 1).unwrap(),
        );

        assert!(params.validate().is_ok());
    }
}
