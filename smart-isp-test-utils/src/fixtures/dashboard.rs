use chrono::{NaiveDate, Utc, Weekday};
use entity::active_devices_trend::DayOfWeek;
use rust_decimal::Decimal;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn dashboard(&self) -> DashboardFixtures<'_> {
        DashboardFixtures { test: self }
    }
}

pub struct DashboardFixtures<'a> {
    test: &'a TestContext,
}

impl<'a> DashboardFixtures<'a> {
    /// Insert the active device count of one day
    pub async fn insert_mock_device_count(
        &self,
        week_start_date: NaiveDate,
        day_of_week: DayOfWeek,
        active_devices_count: i32,
    ) -> Result<entity::active_devices_trend::Model, TestError> {
        let now = Utc::now().naive_utc();

        Ok(entity::prelude::ActiveDevicesTrend::insert(
            entity::active_devices_trend::ActiveModel {
                week_start_date: ActiveValue::Set(week_start_date),
                day_of_week: ActiveValue::Set(day_of_week),
                active_devices_count: ActiveValue::Set(active_devices_count),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            },
        )
        .exec_with_returning(&self.test.db)
        .await?)
    }

    /// Insert a weekly collection of $6,250.00 starting on the Monday of the ISO week
    pub async fn insert_mock_weekly_collection(
        &self,
        year: i16,
        week_number: i16,
    ) -> Result<entity::weekly_collection::Model, TestError> {
        let now = Utc::now().naive_utc();
        let week_start_date =
            NaiveDate::from_isoywd_opt(i32::from(year), week_number as u32, Weekday::Mon)
                .unwrap_or_default();

        Ok(
            entity::prelude::WeeklyCollection::insert(entity::weekly_collection::ActiveModel {
                week_number: ActiveValue::Set(week_number),
                year: ActiveValue::Set(year),
                week_start_date: ActiveValue::Set(week_start_date),
                total_collection: ActiveValue::Set(Decimal::new(625000, 2)),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.test.db)
            .await?,
        )
    }
}
