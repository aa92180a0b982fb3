use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryOrder,
};

use crate::model::{dashboard::DashboardMetricsParams, db::DashboardMetricsModel};

pub struct DashboardMetricsRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> DashboardMetricsRepository<'a, C> {
    /// Creates a new instance of [`DashboardMetricsRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        params: &DashboardMetricsParams,
    ) -> Result<DashboardMetricsModel, DbErr> {
        let now = Utc::now().naive_utc();
        let metrics = entity::dashboard_metrics::ActiveModel {
            date: ActiveValue::Set(params.date),
            active_users: ActiveValue::Set(params.active_users),
            overdue_accounts: ActiveValue::Set(params.overdue_accounts),
            disconnected_accounts: ActiveValue::Set(params.disconnected_accounts),
            collector_performance: ActiveValue::Set(params.collector_performance),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        metrics.insert(self.db).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<DashboardMetricsModel>, DbErr> {
        entity::prelude::DashboardMetrics::find_by_id(id)
            .one(self.db)
            .await
    }

    /// Gets the KPI row of the most recent date
    pub async fn get_latest(&self) -> Result<Option<DashboardMetricsModel>, DbErr> {
        entity::prelude::DashboardMetrics::find()
            .order_by_desc(entity::dashboard_metrics::Column::Date)
            .order_by_desc(entity::dashboard_metrics::Column::Id)
            .one(self.db)
            .await
    }

    /// Lists all KPI rows, most recent first
    pub async fn list(&self) -> Result<Vec<DashboardMetricsModel>, DbErr> {
        entity::prelude::DashboardMetrics::find()
            .order_by_desc(entity::dashboard_metrics::Column::Date)
            .order_by_desc(entity::dashboard_metrics::Column::Id)
            .all(self.db)
            .await
    }

    /// Returns `Ok(None)` if no row exists with the provided ID.
    pub async fn update(
        &self,
        id: i32,
        params: &DashboardMetricsParams,
    ) -> Result<Option<DashboardMetricsModel>, DbErr> {
        let metrics = match entity::prelude::DashboardMetrics::find_by_id(id)
            .one(self.db)
            .await?
        {
            Some(metrics) => metrics,
            None => return Ok(None),
        };

        let mut metrics_am = metrics.into_active_model();
        metrics_am.date = ActiveValue::Set(params.date);
        metrics_am.active_users = ActiveValue::Set(params.active_users);
        metrics_am.overdue_accounts = ActiveValue::Set(params.overdue_accounts);
        metrics_am.disconnected_accounts = ActiveValue::Set(params.disconnected_accounts);
        metrics_am.collector_performance = ActiveValue::Set(params.collector_performance);
        metrics_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let metrics = metrics_am.update(self.db).await?;

        Ok(Some(metrics))
    }

    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::DashboardMetrics::delete_by_id(id)
            .exec(self.db)
            .await
    }
}
