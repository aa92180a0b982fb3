use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryOrder,
};

use crate::model::{dashboard::DashboardSnapshotParams, db::DashboardSnapshotModel};

pub struct DashboardSnapshotRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> DashboardSnapshotRepository<'a, C> {
    /// Creates a new instance of [`DashboardSnapshotRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        params: &DashboardSnapshotParams,
    ) -> Result<DashboardSnapshotModel, DbErr> {
        let snapshot = entity::dashboard_snapshot::ActiveModel {
            snapshot_date: ActiveValue::Set(params.snapshot_date),
            active_users: ActiveValue::Set(params.active_users),
            overdue_accounts: ActiveValue::Set(params.overdue_accounts),
            disconnected_accounts: ActiveValue::Set(params.disconnected_accounts),
            collector_performance: ActiveValue::Set(params.collector_performance),
            active_devices_trend: ActiveValue::Set(params.active_devices_trend.clone()),
            weekly_collections: ActiveValue::Set(params.weekly_collections.clone()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        snapshot.insert(self.db).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<DashboardSnapshotModel>, DbErr> {
        entity::prelude::DashboardSnapshot::find_by_id(id)
            .one(self.db)
            .await
    }

    /// Gets the most recent snapshot
    pub async fn get_latest(&self) -> Result<Option<DashboardSnapshotModel>, DbErr> {
        entity::prelude::DashboardSnapshot::find()
            .order_by_desc(entity::dashboard_snapshot::Column::SnapshotDate)
            .order_by_desc(entity::dashboard_snapshot::Column::Id)
            .one(self.db)
            .await
    }

    /// Lists all snapshots, most recent first
    pub async fn list(&self) -> Result<Vec<DashboardSnapshotModel>, DbErr> {
        entity::prelude::DashboardSnapshot::find()
            .order_by_desc(entity::dashboard_snapshot::Column::SnapshotDate)
            .order_by_desc(entity::dashboard_snapshot::Column::Id)
            .all(self.db)
            .await
    }

    /// Snapshots have no `updated_at`, an update only rewrites the captured values.
    ///
    /// Returns `Ok(None)` if no snapshot exists with the provided ID.
    pub async fn update(
        &self,
        id: i32,
        params: &DashboardSnapshotParams,
    ) -> Result<Option<DashboardSnapshotModel>, DbErr> {
        let snapshot = match entity::prelude::DashboardSnapshot::find_by_id(id)
            .one(self.db)
            .await?
        {
            Some(snapshot) => snapshot,
            None => return Ok(None),
        };

        let mut snapshot_am = snapshot.into_active_model();
        snapshot_am.snapshot_date = ActiveValue::Set(params.snapshot_date);
        snapshot_am.active_users = ActiveValue::Set(params.active_users);
        snapshot_am.overdue_accounts = ActiveValue::Set(params.overdue_accounts);
        snapshot_am.disconnected_accounts = ActiveValue::Set(params.disconnected_accounts);
        snapshot_am.collector_performance = ActiveValue::Set(params.collector_performance);
        snapshot_am.active_devices_trend = ActiveValue::Set(params.active_devices_trend.clone());
        snapshot_am.weekly_collections = ActiveValue::Set(params.weekly_collections.clone());

        let snapshot = snapshot_am.update(self.db).await?;

        Ok(Some(snapshot))
    }

    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::DashboardSnapshot::delete_by_id(id)
            .exec(self.db)
            .await
    }
}
