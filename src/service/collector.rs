use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    data::collector::CollectorRepository,
    error::Error,
    model::{collector::CollectorParams, db::CollectorModel},
    service::validate,
};

/// Service for managing field collectors.
pub struct CollectorService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CollectorService<'a> {
    /// Creates a new instance of CollectorService.
    ///
    /// # Arguments
    /// - `db` - Database connection reference
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Validates and stores a new collector.
    ///
    /// # Returns
    /// - `Ok(CollectorModel)` - The stored collector with its assigned ID
    /// - `Err(Error::ValidationError)` - A field violates its rule, e.g. a score above 100
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create(&self, params: &CollectorParams) -> Result<CollectorModel, Error> {
        validate("collector", params)?;

        let collector = CollectorRepository::new(self.db).create(params).await?;

        tracing::info!("Created collector ID {} ({})", collector.id, collector);

        Ok(collector)
    }

    pub async fn get(&self, id: i32) -> Result<Option<CollectorModel>, Error> {
        Ok(CollectorRepository::new(self.db).get_by_id(id).await?)
    }

    pub async fn list(&self) -> Result<Vec<CollectorModel>, Error> {
        Ok(CollectorRepository::new(self.db).list().await?)
    }

    /// Validates and overwrites an existing collector.
    ///
    /// # Returns
    /// - `Ok(CollectorModel)` - The updated collector
    /// - `Err(Error::ValidationError)` - A field violates its rule
    /// - `Err(Error::NotFound)` - No collector exists with the provided ID
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn update(&self, id: i32, params: &CollectorParams) -> Result<CollectorModel, Error> {
        validate("collector", params)?;

        let collector = CollectorRepository::new(self.db)
            .update(id, params)
            .await?
            .ok_or(Error::NotFound {
                entity: "collector",
                id,
            })?;

        tracing::info!("Updated collector ID {}", id);

        Ok(collector)
    }

    /// Deletes a collector in one transaction.
    ///
    /// Payments the collector processed are kept with no collector, the
    /// collector's performance records are deleted.
    ///
    /// # Returns
    /// - `Ok(())` - Collector deleted
    /// - `Err(Error::NotFound)` - No collector exists with the provided ID
    /// - `Err(Error::DbErr)` - Database operation failed, the transaction is rolled back
    pub async fn delete(&self, id: i32) -> Result<(), Error> {
        let txn = self.db.begin().await?;

        let result = CollectorRepository::new(&txn).delete(id).await?;
        if result.rows_affected == 0 {
            txn.rollback().await?;
            return Err(Error::NotFound {
                entity: "collector",
                id,
            });
        }

        txn.commit().await?;

        tracing::info!("Deleted collector ID {}", id);

        Ok(())
    }
}

#[cfg(test)]
mod tests {

    mod create {
        use rust_decimal::Decimal;
        use smart_isp_test_utils::prelude::*;

        use crate::{
            error::{validation::ValidationError, Error},
            model::collector::CollectorParams,
            service::collector::CollectorService,
        };

        /// Expect ValidationError for a performance score above 100
        #[tokio::test]
        async fn rejects_score_above_one_hundred() -> Result<(), TestError> {
            let test = test_setup_with_isp_tables!()?;

            let collector_service = CollectorService::new(&test.db);
            let mut params = CollectorParams::new("Juan Dela Cruz", "Poblacion");
            params.performance_score = Decimal::new(10001, 2);
            let result = collector_service.create(&params).await;

            assert!(matches!(
                result,
                Err(Error::ValidationError(ValidationError::AboveMaximum {
                    field: "performance_score",
                    ..
                }))
            ));

            Ok(())
        }

        /// Expect the collector to be stored for valid params
        #[tokio::test]
        async fn creates_valid_collector() -> Result<(), TestError> {
            let test = test_setup_with_isp_tables!()?;

            let collector_service = CollectorService::new(&test.db);
            let params = CollectorParams::new("Juan Dela Cruz", "Poblacion");
            let collector = collector_service.create(&params).await.unwrap();

            assert_eq!(collector.to_string(), "Juan Dela Cruz");
            assert!(!collector.has_coordinates());

            Ok(())
        }
    }

    mod delete {
        use rust_decimal::Decimal;
        use smart_isp_test_utils::prelude::*;

        use crate::{
            data::{
                payment::PaymentRepository,
                report::collector_performance::CollectorPerformanceRepository,
            },
            error::Error,
            service::collector::CollectorService,
        };

        /// Expect payments to survive without collector and performance rows to be removed
        #[tokio::test]
        async fn keeps_payments_of_deleted_collector() -> Result<(), TestError> {
            let test = test_setup_with_isp_tables!()?;
            let client = test.client().insert_mock_client("Pedro Reyes", "Poblacion").await?;
            let collector = test.collector().insert_mock_collector("Juan Dela Cruz", "Poblacion").await?;
            let payment = test
                .payment()
                .insert_mock_payment(client.id, Some(collector.id), Decimal::new(50000, 2))
                .await?;
            test.report().insert_mock_collector_performance(collector.id).await?;

            let collector_service = CollectorService::new(&test.db);
            let result = collector_service.delete(collector.id).await;

            assert!(result.is_ok());

            let payment = PaymentRepository::new(&test.db)
                .get_by_id(payment.id)
                .await?
                .unwrap();
            assert!(payment.collector_id.is_none());
            assert!(CollectorPerformanceRepository::new(&test.db)
                .list_by_collector(collector.id)
                .await?
                .is_empty());

            Ok(())
        }

        /// Expect NotFound when the collector does not exist
        #[tokio::test]
        async fn fails_for_nonexistent_collector() -> Result<(), TestError> {
            let test = test_setup_with_isp_tables!()?;

            let collector_service = CollectorService::new(&test.db);
            let result = collector_service.delete(1).await;

            assert!(matches!(
                result,
                Err(Error::NotFound {
                    entity: "collector",
                    ..
                })
            ));

            Ok(())
        }
    }
}
