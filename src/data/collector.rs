use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryOrder,
};

use crate::{
    data::{
        payment::PaymentRepository, report::collector_performance::CollectorPerformanceRepository,
    },
    model::{collector::CollectorParams, db::CollectorModel},
};

pub struct CollectorRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CollectorRepository<'a, C> {
    /// Creates a new instance of [`CollectorRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new collector
    pub async fn create(&self, params: &CollectorParams) -> Result<CollectorModel, DbErr> {
        let now = Utc::now().naive_utc();
        let collector = entity::collector::ActiveModel {
            name: ActiveValue::Set(params.name.clone()),
            assigned_town: ActiveValue::Set(params.assigned_town.clone()),
            active_clients: ActiveValue::Set(params.active_clients),
            last_collection_date: ActiveValue::Set(params.last_collection_date),
            performance_score: ActiveValue::Set(params.performance_score),
            latitude: ActiveValue::Set(params.latitude),
            longitude: ActiveValue::Set(params.longitude),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        collector.insert(self.db).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<CollectorModel>, DbErr> {
        entity::prelude::Collector::find_by_id(id).one(self.db).await
    }

    /// Lists all collectors ordered by name
    pub async fn list(&self) -> Result<Vec<CollectorModel>, DbErr> {
        entity::prelude::Collector::find()
            .order_by_asc(entity::collector::Column::Name)
            .order_by_asc(entity::collector::Column::Id)
            .all(self.db)
            .await
    }

    /// Overwrites every writable field of a collector
    ///
    /// Returns `Ok(None)` if no collector exists with the provided ID.
    pub async fn update(
        &self,
        id: i32,
        params: &CollectorParams,
    ) -> Result<Option<CollectorModel>, DbErr> {
        let collector = match entity::prelude::Collector::find_by_id(id)
            .one(self.db)
            .await?
        {
            Some(collector) => collector,
            None => return Ok(None),
        };

        let mut collector_am = collector.into_active_model();
        collector_am.name = ActiveValue::Set(params.name.clone());
        collector_am.assigned_town = ActiveValue::Set(params.assigned_town.clone());
        collector_am.active_clients = ActiveValue::Set(params.active_clients);
        collector_am.last_collection_date = ActiveValue::Set(params.last_collection_date);
        collector_am.performance_score = ActiveValue::Set(params.performance_score);
        collector_am.latitude = ActiveValue::Set(params.latitude);
        collector_am.longitude = ActiveValue::Set(params.longitude);
        collector_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let collector = collector_am.update(self.db).await?;

        Ok(Some(collector))
    }

    /// Deletes a collector
    ///
    /// Payments the collector processed are kept with their collector cleared,
    /// performance records of the collector are deleted. Run this inside a
    /// transaction to make the delete atomic.
    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        let payments = PaymentRepository::new(self.db).clear_collector(id).await?;
        let performance = CollectorPerformanceRepository::new(self.db)
            .delete_by_collector(id)
            .await?;

        tracing::debug!(
            "Detached {} payment records and removed {} performance records of collector ID {}",
            payments.rows_affected,
            performance.rows_affected,
            id
        );

        entity::prelude::Collector::delete_by_id(id)
            .exec(self.db)
            .await
    }
}
