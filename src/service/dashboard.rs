//! Cached dashboard values: daily KPIs, the weekly active devices trend,
//! weekly collection totals and point-in-time snapshots.

use chrono::NaiveDate;
use sea_orm::DatabaseConnection;

use crate::{
    data::dashboard::{
        active_devices_trend::ActiveDevicesTrendRepository, metrics::DashboardMetricsRepository,
        snapshot::DashboardSnapshotRepository, weekly_collection::WeeklyCollectionRepository,
    },
    error::Error,
    model::{
        dashboard::{
            ActiveDevicesTrendParams, DashboardMetricsParams, DashboardSnapshotParams,
            WeeklyCollectionParams,
        },
        db::{
            ActiveDevicesTrendModel, DashboardMetricsModel, DashboardSnapshotModel,
            WeeklyCollectionModel,
        },
    },
    service::validate,
};

pub struct DashboardService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DashboardService<'a> {
    /// Creates a new instance of DashboardService.
    ///
    /// # Arguments
    /// - `db` - Database connection reference
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn record_metrics(
        &self,
        params: &DashboardMetricsParams,
    ) -> Result<DashboardMetricsModel, Error> {
        validate("dashboard metrics", params)?;

        let metrics = DashboardMetricsRepository::new(self.db).create(params).await?;

        tracing::info!("Recorded dashboard metrics ID {} for {}", metrics.id, metrics.date);

        Ok(metrics)
    }

    /// Gets the KPI row of the most recent date, `None` before the first batch run
    pub async fn latest_metrics(&self) -> Result<Option<DashboardMetricsModel>, Error> {
        Ok(DashboardMetricsRepository::new(self.db).get_latest().await?)
    }

    pub async fn list_metrics(&self) -> Result<Vec<DashboardMetricsModel>, Error> {
        Ok(DashboardMetricsRepository::new(self.db).list().await?)
    }

    pub async fn update_metrics(
        &self,
        id: i32,
        params: &DashboardMetricsParams,
    ) -> Result<DashboardMetricsModel, Error> {
        validate("dashboard metrics", params)?;

        let metrics = DashboardMetricsRepository::new(self.db)
            .update(id, params)
            .await?
            .ok_or(Error::NotFound {
                entity: "dashboard metrics",
                id,
            })?;

        tracing::info!("Updated dashboard metrics ID {}", id);

        Ok(metrics)
    }

    pub async fn delete_metrics(&self, id: i32) -> Result<(), Error> {
        let result = DashboardMetricsRepository::new(self.db).delete(id).await?;
        if result.rows_affected == 0 {
            return Err(Error::NotFound {
                entity: "dashboard metrics",
                id,
            });
        }

        tracing::info!("Deleted dashboard metrics ID {}", id);

        Ok(())
    }

    pub async fn record_device_count(
        &self,
        params: &ActiveDevicesTrendParams,
    ) -> Result<ActiveDevicesTrendModel, Error> {
        validate("active devices trend", params)?;

        let trend = ActiveDevicesTrendRepository::new(self.db)
            .create(params)
            .await?;

        tracing::info!("Recorded active devices ID {} ({})", trend.id, trend);

        Ok(trend)
    }

    /// Gets the device counts of one week, Monday first
    pub async fn device_trend_for_week(
        &self,
        week_start_date: NaiveDate,
    ) -> Result<Vec<ActiveDevicesTrendModel>, Error> {
        Ok(ActiveDevicesTrendRepository::new(self.db)
            .list_for_week(week_start_date)
            .await?)
    }

    pub async fn list_device_trend(&self) -> Result<Vec<ActiveDevicesTrendModel>, Error> {
        Ok(ActiveDevicesTrendRepository::new(self.db).list().await?)
    }

    pub async fn update_device_count(
        &self,
        id: i32,
        params: &ActiveDevicesTrendParams,
    ) -> Result<ActiveDevicesTrendModel, Error> {
        validate("active devices trend", params)?;

        let trend = ActiveDevicesTrendRepository::new(self.db)
            .update(id, params)
            .await?
            .ok_or(Error::NotFound {
                entity: "active devices trend",
                id,
            })?;

        tracing::info!("Updated active devices ID {}", id);

        Ok(trend)
    }

    pub async fn delete_device_count(&self, id: i32) -> Result<(), Error> {
        let result = ActiveDevicesTrendRepository::new(self.db).delete(id).await?;
        if result.rows_affected == 0 {
            return Err(Error::NotFound {
                entity: "active devices trend",
                id,
            });
        }

        tracing::info!("Deleted active devices ID {}", id);

        Ok(())
    }

    pub async fn record_weekly_collection(
        &self,
        params: &WeeklyCollectionParams,
    ) -> Result<WeeklyCollectionModel, Error> {
        validate("weekly collection", params)?;

        let collection = WeeklyCollectionRepository::new(self.db)
            .create(params)
            .await?;

        tracing::info!(
            "Recorded weekly collection ID {} ({} of {}: {})",
            collection.id,
            collection.week_display(),
            collection.year,
            collection.total_collection_display()
        );

        Ok(collection)
    }

    /// Lists weekly totals in calendar order, optionally limited to one year
    pub async fn list_weekly_collections(
        &self,
        year: Option<i16>,
    ) -> Result<Vec<WeeklyCollectionModel>, Error> {
        let repo = WeeklyCollectionRepository::new(self.db);

        let collections = match year {
            Some(year) => repo.list_by_year(year).await?,
            None => repo.list().await?,
        };

        Ok(collections)
    }

    pub async fn update_weekly_collection(
        &self,
        id: i32,
        params: &WeeklyCollectionParams,
    ) -> Result<WeeklyCollectionModel, Error> {
        validate("weekly collection", params)?;

        let collection = WeeklyCollectionRepository::new(self.db)
            .update(id, params)
            .await?
            .ok_or(Error::NotFound {
                entity: "weekly collection",
                id,
            })?;

        tracing::info!("Updated weekly collection ID {}", id);

        Ok(collection)
    }

    pub async fn delete_weekly_collection(&self, id: i32) -> Result<(), Error> {
        let result = WeeklyCollectionRepository::new(self.db).delete(id).await?;
        if result.rows_affected == 0 {
            return Err(Error::NotFound {
                entity: "weekly collection",
                id,
            });
        }

        tracing::info!("Deleted weekly collection ID {}", id);

        Ok(())
    }

    pub async fn create_snapshot(
        &self,
        params: &DashboardSnapshotParams,
    ) -> Result<DashboardSnapshotModel, Error> {
        validate("dashboard snapshot", params)?;

        let snapshot = DashboardSnapshotRepository::new(self.db)
            .create(params)
            .await?;

        tracing::info!("Created {} (ID {})", snapshot, snapshot.id);

        Ok(snapshot)
    }

    pub async fn latest_snapshot(&self) -> Result<Option<DashboardSnapshotModel>, Error> {
        Ok(DashboardSnapshotRepository::new(self.db).get_latest().await?)
    }

    pub async fn list_snapshots(&self) -> Result<Vec<DashboardSnapshotModel>, Error> {
        Ok(DashboardSnapshotRepository::new(self.db).list().await?)
    }

    pub async fn update_snapshot(
        &self,
        id: i32,
        params: &DashboardSnapshotParams,
    ) -> Result<DashboardSnapshotModel, Error> {
        validate("dashboard snapshot", params)?;

        let snapshot = DashboardSnapshotRepository::new(self.db)
            .update(id, params)
            .await?
            .ok_or(Error::NotFound {
                entity: "dashboard snapshot",
                id,
            })?;

        tracing::info!("Updated dashboard snapshot ID {}", id);

        Ok(snapshot)
    }

    pub async fn delete_snapshot(&self, id: i32) -> Result<(), Error> {
        let result = DashboardSnapshotRepository::new(self.db).delete(id).await?;
        if result.rows_affected == 0 {
            return Err(Error::NotFound {
                entity: "dashboard snapshot",
                id,
            });
        }

        tracing::info!("Deleted dashboard snapshot ID {}", id);

        Ok(())
    }
}
