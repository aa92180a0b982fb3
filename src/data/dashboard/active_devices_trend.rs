use chrono::{NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::model::{dashboard::ActiveDevicesTrendParams, db::ActiveDevicesTrendModel};

pub struct ActiveDevicesTrendRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ActiveDevicesTrendRepository<'a, C> {
    /// Creates a new instance of [`ActiveDevicesTrendRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        params: &ActiveDevicesTrendParams,
    ) -> Result<ActiveDevicesTrendModel, DbErr> {
        let now = Utc::now().naive_utc();
        let trend = entity::active_devices_trend::ActiveModel {
            week_start_date: ActiveValue::Set(params.week_start_date),
            day_of_week: ActiveValue::Set(params.day_of_week),
            active_devices_count: ActiveValue::Set(params.active_devices_count),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        trend.insert(self.db).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<ActiveDevicesTrendModel>, DbErr> {
        entity::prelude::ActiveDevicesTrend::find_by_id(id)
            .one(self.db)
            .await
    }

    /// Lists all counts by week, Monday through Sunday within a week
    ///
    /// Days are in calendar order, not the alphabetical order of their stored
    /// names that a plain `ORDER BY day_of_week` would give.
    pub async fn list(&self) -> Result<Vec<ActiveDevicesTrendModel>, DbErr> {
        let mut trend = entity::prelude::ActiveDevicesTrend::find()
            .order_by_asc(entity::active_devices_trend::Column::WeekStartDate)
            .order_by_asc(entity::active_devices_trend::Column::Id)
            .all(self.db)
            .await?;

        // Weekdays are stored by name, so the column sorts alphabetically
        trend.sort_by_key(|day| (day.week_start_date, day.day_of_week));

        Ok(trend)
    }

    /// Lists the counts of one week, Monday through Sunday
    ///
    /// Calendar order, as in [`Self::list`].
    pub async fn list_for_week(
        &self,
        week_start_date: NaiveDate,
    ) -> Result<Vec<ActiveDevicesTrendModel>, DbErr> {
        let mut trend = entity::prelude::ActiveDevicesTrend::find()
            .filter(entity::active_devices_trend::Column::WeekStartDate.eq(week_start_date))
            .order_by_asc(entity::active_devices_trend::Column::Id)
            .all(self.db)
            .await?;

        trend.sort_by_key(|day| day.day_of_week);

        Ok(trend)
    }

    /// Returns `Ok(None)` if no row exists with the provided ID.
    pub async fn update(
        &self,
        id: i32,
        params: &ActiveDevicesTrendParams,
    ) -> Result<Option<ActiveDevicesTrendModel>, DbErr> {
        let trend = match entity::prelude::ActiveDevicesTrend::find_by_id(id)
            .one(self.db)
            .await?
        {
            Some(trend) => trend,
            None => return Ok(None),
        };

        let mut trend_am = trend.into_active_model();
        trend_am.week_start_date = ActiveValue::Set(params.week_start_date);
        trend_am.day_of_week = ActiveValue::Set(params.day_of_week);
        trend_am.active_devices_count = ActiveValue::Set(params.active_devices_count);
        trend_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let trend = trend_am.update(self.db).await?;

        Ok(Some(trend))
    }

    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::ActiveDevicesTrend::delete_by_id(id)
            .exec(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use entity::active_devices_trend::DayOfWeek;
    use smart_isp_test_utils::prelude::*;

    use crate::data::dashboard::active_devices_trend::ActiveDevicesTrendRepository;

    /// Expect one week's counts in weekday order rather than alphabetical order
    #[tokio::test]
    async fn lists_week_in_weekday_order() -> Result<(), TestError> {
        let test = test_setup_with_isp_tables!()?;
        let week = NaiveDate::from_ymd_opt(2025, 10, 13).unwrap();
        let previous_week = NaiveDate::from_ymd_opt(2025, 10, 6).unwrap();
        for (day, count) in [
            (DayOfWeek::Sunday, 90),
            (DayOfWeek::Friday, 120),
            (DayOfWeek::Monday, 110),
        ] {
            test.dashboard().insert_mock_device_count(week, day, count).await?;
        }
        test.dashboard()
            .insert_mock_device_count(previous_week, DayOfWeek::Monday, 100)
            .await?;

        let repo = ActiveDevicesTrendRepository::new(&test.db);
        let days: Vec<&str> = repo
            .list_for_week(week)
            .await?
            .iter()
            .map(|day| day.day_abbreviation())
            .collect();

        assert_eq!(days, vec!["Mon", "Fri", "Sun"]);
        assert_eq!(repo.list().await?.len(), 4);
        assert_eq!(repo.list().await?[0].week_start_date, previous_week);

        Ok(())
    }
}
