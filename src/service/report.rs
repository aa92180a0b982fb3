//! Periodic report records: monthly collections, account status breakdowns and
//! collector performance. These rows are written by the reporting batch, the
//! service only guards their field rules.

use sea_orm::DatabaseConnection;

use crate::{
    data::{
        collector::CollectorRepository,
        report::{
            account_status::AccountStatusRepository,
            collector_performance::CollectorPerformanceRepository,
            monthly_collection::MonthlyCollectionRepository,
        },
    },
    error::Error,
    model::{
        db::{AccountStatusReportModel, CollectorPerformanceModel, MonthlyCollectionModel},
        report::{AccountStatusParams, CollectorPerformanceParams, MonthlyCollectionParams},
    },
    service::validate,
};

pub struct ReportService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReportService<'a> {
    /// Creates a new instance of ReportService.
    ///
    /// # Arguments
    /// - `db` - Database connection reference
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create_monthly_collection(
        &self,
        params: &MonthlyCollectionParams,
    ) -> Result<MonthlyCollectionModel, Error> {
        validate("monthly collection", params)?;

        let collection = MonthlyCollectionRepository::new(self.db)
            .create(params)
            .await?;

        tracing::info!("Created monthly collection ID {} ({})", collection.id, collection);

        Ok(collection)
    }

    pub async fn get_monthly_collection(
        &self,
        year: i16,
        month: i16,
    ) -> Result<Option<MonthlyCollectionModel>, Error> {
        Ok(MonthlyCollectionRepository::new(self.db)
            .get_by_period(year, month)
            .await?)
    }

    /// Lists monthly collections in calendar order, optionally limited to one year
    pub async fn list_monthly_collections(
        &self,
        year: Option<i16>,
    ) -> Result<Vec<MonthlyCollectionModel>, Error> {
        let repo = MonthlyCollectionRepository::new(self.db);

        let collections = match year {
            Some(year) => repo.list_by_year(year).await?,
            None => repo.list().await?,
        };

        Ok(collections)
    }

    pub async fn update_monthly_collection(
        &self,
        id: i32,
        params: &MonthlyCollectionParams,
    ) -> Result<MonthlyCollectionModel, Error> {
        validate("monthly collection", params)?;

        let collection = MonthlyCollectionRepository::new(self.db)
            .update(id, params)
            .await?
            .ok_or(Error::NotFound {
                entity: "monthly collection",
                id,
            })?;

        tracing::info!("Updated monthly collection ID {}", id);

        Ok(collection)
    }

    pub async fn delete_monthly_collection(&self, id: i32) -> Result<(), Error> {
        let result = MonthlyCollectionRepository::new(self.db).delete(id).await?;
        if result.rows_affected == 0 {
            return Err(Error::NotFound {
                entity: "monthly collection",
                id,
            });
        }

        tracing::info!("Deleted monthly collection ID {}", id);

        Ok(())
    }

    /// Stores an account status report.
    ///
    /// # Returns
    /// - `Ok(AccountStatusReportModel)` - The stored report
    /// - `Err(Error::ValidationError)` - A count is negative or the account types do not add up to the total
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create_account_status(
        &self,
        params: &AccountStatusParams,
    ) -> Result<AccountStatusReportModel, Error> {
        validate("account status report", params)?;

        let report = AccountStatusRepository::new(self.db).create(params).await?;

        tracing::info!("Created account status report ID {} ({})", report.id, report);

        Ok(report)
    }

    pub async fn latest_account_status(&self) -> Result<Option<AccountStatusReportModel>, Error> {
        Ok(AccountStatusRepository::new(self.db).get_latest().await?)
    }

    pub async fn list_account_status(&self) -> Result<Vec<AccountStatusReportModel>, Error> {
        Ok(AccountStatusRepository::new(self.db).list().await?)
    }

    pub async fn update_account_status(
        &self,
        id: i32,
        params: &AccountStatusParams,
    ) -> Result<AccountStatusReportModel, Error> {
        validate("account status report", params)?;

        let report = AccountStatusRepository::new(self.db)
            .update(id, params)
            .await?
            .ok_or(Error::NotFound {
                entity: "account status report",
                id,
            })?;

        tracing::info!("Updated account status report ID {}", id);

        Ok(report)
    }

    pub async fn delete_account_status(&self, id: i32) -> Result<(), Error> {
        let result = AccountStatusRepository::new(self.db).delete(id).await?;
        if result.rows_affected == 0 {
            return Err(Error::NotFound {
                entity: "account status report",
                id,
            });
        }

        tracing::info!("Deleted account status report ID {}", id);

        Ok(())
    }

    /// Stores a performance record of an existing collector.
    ///
    /// # Returns
    /// - `Ok(CollectorPerformanceModel)` - The stored record
    /// - `Err(Error::ValidationError)` - A field violates its rule, e.g. a rating above 5
    /// - `Err(Error::NotFound)` - The collector does not exist
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create_collector_performance(
        &self,
        params: &CollectorPerformanceParams,
    ) -> Result<CollectorPerformanceModel, Error> {
        validate("collector performance", params)?;
        self.ensure_collector_exists(params.collector_id).await?;

        let performance = CollectorPerformanceRepository::new(self.db)
            .create(params)
            .await?;

        tracing::info!(
            "Created collector performance ID {} for collector ID {} ({})",
            performance.id,
            performance.collector_id,
            performance.period_display()
        );

        Ok(performance)
    }

    /// Lists performance records, latest period first, optionally for one collector
    pub async fn list_collector_performance(
        &self,
        collector_id: Option<i32>,
    ) -> Result<Vec<CollectorPerformanceModel>, Error> {
        let repo = CollectorPerformanceRepository::new(self.db);

        let records = match collector_id {
            Some(collector_id) => repo.list_by_collector(collector_id).await?,
            None => repo.list().await?,
        };

        Ok(records)
    }

    pub async fn update_collector_performance(
        &self,
        id: i32,
        params: &CollectorPerformanceParams,
    ) -> Result<CollectorPerformanceModel, Error> {
        validate("collector performance", params)?;
        self.ensure_collector_exists(params.collector_id).await?;

        let performance = CollectorPerformanceRepository::new(self.db)
            .update(id, params)
            .await?
            .ok_or(Error::NotFound {
                entity: "collector performance",
                id,
            })?;

        tracing::info!("Updated collector performance ID {}", id);

        Ok(performance)
    }

    pub async fn delete_collector_performance(&self, id: i32) -> Result<(), Error> {
        let result = CollectorPerformanceRepository::new(self.db)
            .delete(id)
            .await?;
        if result.rows_affected == 0 {
            return Err(Error::NotFound {
                entity: "collector performance",
                id,
            });
        }

        tracing::info!("Deleted collector performance ID {}", id);

        Ok(())
    }

    async fn ensure_collector_exists(&self, collector_id: i32) -> Result<(), Error> {
        match CollectorRepository::new(self.db)
            .get_by_id(collector_id)
            .await?
        {
            Some(_) => Ok(()),
            None => Err(Error::NotFound {
                entity: "collector",
                id: collector_id,
            }),
        }
    }
}
