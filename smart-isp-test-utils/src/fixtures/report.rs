use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn report(&self) -> ReportFixtures<'_> {
        ReportFixtures { test: self }
    }
}

pub struct ReportFixtures<'a> {
    test: &'a TestContext,
}

impl<'a> ReportFixtures<'a> {
    /// Insert a monthly collection summary of $25,000.00
    pub async fn insert_mock_monthly_collection(
        &self,
        year: i16,
        month: i16,
    ) -> Result<entity::monthly_collection::Model, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::MonthlyCollection::insert(entity::monthly_collection::ActiveModel {
                month: ActiveValue::Set(month),
                year: ActiveValue::Set(year),
                total_amount: ActiveValue::Set(Decimal::new(2500000, 2)),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.test.db)
            .await?,
        )
    }

    /// Insert an account status report with the given counts
    ///
    /// Counts are stored as given, the total is not checked against the parts.
    pub async fn insert_mock_account_status(
        &self,
        report_date: NaiveDate,
        total_accounts: i32,
        active_accounts: i32,
        overdue_accounts: i32,
        disconnected_accounts: i32,
    ) -> Result<entity::account_status_report::Model, TestError> {
        let now = Utc::now().naive_utc();

        Ok(entity::prelude::AccountStatusReport::insert(
            entity::account_status_report::ActiveModel {
                report_date: ActiveValue::Set(report_date),
                total_accounts: ActiveValue::Set(total_accounts),
                active_accounts: ActiveValue::Set(active_accounts),
                overdue_accounts: ActiveValue::Set(overdue_accounts),
                disconnected_accounts: ActiveValue::Set(disconnected_accounts),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            },
        )
        .exec_with_returning(&self.test.db)
        .await?)
    }

    /// Insert a September 2025 performance record for the collector
    ///
    /// The collector must already exist.
    pub async fn insert_mock_collector_performance(
        &self,
        collector_id: i32,
    ) -> Result<entity::collector_performance::Model, TestError> {
        let now = Utc::now().naive_utc();
        let period_start = NaiveDate::from_ymd_opt(2025, 9, 1).unwrap_or_default();
        let period_end = NaiveDate::from_ymd_opt(2025, 9, 30).unwrap_or_default();

        Ok(entity::prelude::CollectorPerformance::insert(
            entity::collector_performance::ActiveModel {
                collector_id: ActiveValue::Set(collector_id),
                period_start: ActiveValue::Set(period_start),
                period_end: ActiveValue::Set(period_end),
                collected_amount: ActiveValue::Set(Decimal::new(1200000, 2)),
                clients_served: ActiveValue::Set(24),
                average_rating: ActiveValue::Set(Decimal::new(45, 1)),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            },
        )
        .exec_with_returning(&self.test.db)
        .await?)
    }
}
