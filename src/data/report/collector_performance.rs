use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder, Select,
};

use crate::model::{db::CollectorPerformanceModel, report::CollectorPerformanceParams};

pub struct CollectorPerformanceRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CollectorPerformanceRepository<'a, C> {
    /// Creates a new instance of [`CollectorPerformanceRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        params: &CollectorPerformanceParams,
    ) -> Result<CollectorPerformanceModel, DbErr> {
        let now = Utc::now().naive_utc();
        let performance = entity::collector_performance::ActiveModel {
            collector_id: ActiveValue::Set(params.collector_id),
            period_start: ActiveValue::Set(params.period_start),
            period_end: ActiveValue::Set(params.period_end),
            collected_amount: ActiveValue::Set(params.collected_amount),
            clients_served: ActiveValue::Set(params.clients_served),
            average_rating: ActiveValue::Set(params.average_rating),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        performance.insert(self.db).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<CollectorPerformanceModel>, DbErr> {
        entity::prelude::CollectorPerformance::find_by_id(id)
            .one(self.db)
            .await
    }

    /// Lists all records, latest period first and highest amount first within a period
    pub async fn list(&self) -> Result<Vec<CollectorPerformanceModel>, DbErr> {
        latest_first(entity::prelude::CollectorPerformance::find())
            .all(self.db)
            .await
    }

    pub async fn list_by_collector(
        &self,
        collector_id: i32,
    ) -> Result<Vec<CollectorPerformanceModel>, DbErr> {
        latest_first(
            entity::prelude::CollectorPerformance::find()
                .filter(entity::collector_performance::Column::CollectorId.eq(collector_id)),
        )
        .all(self.db)
        .await
    }

    /// Returns `Ok(None)` if no record exists with the provided ID.
    pub async fn update(
        &self,
        id: i32,
        params: &CollectorPerformanceParams,
    ) -> Result<Option<CollectorPerformanceModel>, DbErr> {
        let performance = match entity::prelude::CollectorPerformance::find_by_id(id)
            .one(self.db)
            .await?
        {
            Some(performance) => performance,
            None => return Ok(None),
        };

        let mut performance_am = performance.into_active_model();
        performance_am.collector_id = ActiveValue::Set(params.collector_id);
        performance_am.period_start = ActiveValue::Set(params.period_start);
        performance_am.period_end = ActiveValue::Set(params.period_end);
        performance_am.collected_amount = ActiveValue::Set(params.collected_amount);
        performance_am.clients_served = ActiveValue::Set(params.clients_served);
        performance_am.average_rating = ActiveValue::Set(params.average_rating);
        performance_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let performance = performance_am.update(self.db).await?;

        Ok(Some(performance))
    }

    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::CollectorPerformance::delete_by_id(id)
            .exec(self.db)
            .await
    }

    /// Deletes every performance record of a collector
    pub async fn delete_by_collector(&self, collector_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::CollectorPerformance::delete_many()
            .filter(entity::collector_performance::Column::CollectorId.eq(collector_id))
            .exec(self.db)
            .await
    }
}

fn latest_first(
    select: Select<entity::collector_performance::Entity>,
) -> Select<entity::collector_performance::Entity> {
    select
        .order_by_desc(entity::collector_performance::Column::PeriodEnd)
        .order_by_desc(entity::collector_performance::Column::CollectedAmount)
        .order_by_desc(entity::collector_performance::Column::Id)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use smart_isp_test_utils::prelude::*;

    use crate::{
        data::report::collector_performance::CollectorPerformanceRepository,
        model::report::CollectorPerformanceParams,
    };

    /// Expect only records of the requested collector
    #[tokio::test]
    async fn lists_records_of_collector() -> Result<(), TestError> {
        let test = test_setup_with_isp_tables!()?;
        let collector = test.collector().insert_mock_collector("Juan Dela Cruz", "Poblacion").await?;
        let other = test.collector().insert_mock_collector("Rosa Lim", "San Isidro").await?;
        let performance = test.report().insert_mock_collector_performance(collector.id).await?;
        test.report().insert_mock_collector_performance(other.id).await?;

        let repo = CollectorPerformanceRepository::new(&test.db);
        let records = repo.list_by_collector(collector.id).await?;

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, performance.id);
        assert_eq!(records[0].label(&collector), performance.label(&collector));

        Ok(())
    }

    /// Expect Error when the collector does not exist
    #[tokio::test]
    async fn fails_for_nonexistent_collector() -> Result<(), TestError> {
        let test = test_setup_with_isp_tables!()?;

        let repo = CollectorPerformanceRepository::new(&test.db);
        let params = CollectorPerformanceParams::new(
            1,
            NaiveDate::from_ymd_opt(2025, 9, 1).unwrap(),
            NaiveDate::from_ymd_opt(2025, 9, 30).unwrap(),
        );
        let result = repo.create(&params).await;

        assert!(result.is_err());

        Ok(())
    }
}
