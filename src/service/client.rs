use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    data::client::ClientRepository,
    error::Error,
    model::{client::ClientParams, db::ClientModel},
    service::validate,
};

/// Service for managing subscriber accounts.
pub struct ClientService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ClientService<'a> {
    /// Creates a new instance of ClientService.
    ///
    /// # Arguments
    /// - `db` - Database connection reference
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Validates and stores a new client.
    ///
    /// # Returns
    /// - `Ok(ClientModel)` - The stored client with its assigned ID
    /// - `Err(Error::ValidationError)` - A field is blank or too long
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create(&self, params: &ClientParams) -> Result<ClientModel, Error> {
        validate("client", params)?;

        let client = ClientRepository::new(self.db).create(params).await?;

        tracing::info!("Created client ID {} ({})", client.id, client);

        Ok(client)
    }

    pub async fn get(&self, id: i32) -> Result<Option<ClientModel>, Error> {
        Ok(ClientRepository::new(self.db).get_by_id(id).await?)
    }

    pub async fn list(&self) -> Result<Vec<ClientModel>, Error> {
        Ok(ClientRepository::new(self.db).list().await?)
    }

    pub async fn list_by_town(&self, town: &str) -> Result<Vec<ClientModel>, Error> {
        Ok(ClientRepository::new(self.db).list_by_town(town).await?)
    }

    /// Validates and overwrites an existing client.
    ///
    /// # Returns
    /// - `Ok(ClientModel)` - The updated client
    /// - `Err(Error::ValidationError)` - A field is blank or too long
    /// - `Err(Error::NotFound)` - No client exists with the provided ID
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn update(&self, id: i32, params: &ClientParams) -> Result<ClientModel, Error> {
        validate("client", params)?;

        let client = ClientRepository::new(self.db)
            .update(id, params)
            .await?
            .ok_or(Error::NotFound { entity: "client", id })?;

        tracing::info!("Updated client ID {}", id);

        Ok(client)
    }

    /// Deletes a client together with its routers and payment records.
    ///
    /// All rows are removed in one transaction, nothing is deleted when the
    /// client does not exist.
    ///
    /// # Returns
    /// - `Ok(())` - Client and dependent rows deleted
    /// - `Err(Error::NotFound)` - No client exists with the provided ID
    /// - `Err(Error::DbErr)` - Database operation failed, the transaction is rolled back
    pub async fn delete(&self, id: i32) -> Result<(), Error> {
        let txn = self.db.begin().await?;

        let result = ClientRepository::new(&txn).delete(id).await?;
        if result.rows_affected == 0 {
            txn.rollback().await?;
            return Err(Error::NotFound { entity: "client", id });
        }

        txn.commit().await?;

        tracing::info!("Deleted client ID {}", id);

        Ok(())
    }
}

#[cfg(test)]
mod tests {

    mod create {
        use entity::client::Plan;
        use smart_isp_test_utils::prelude::*;

        use crate::{
            error::{validation::ValidationError, Error},
            model::client::ClientParams,
            service::client::ClientService,
        };

        /// Expect the stored client to be returned for valid params
        #[tokio::test]
        async fn creates_valid_client() -> Result<(), TestError> {
            let test = test_setup_with_isp_tables!()?;

            let client_service = ClientService::new(&test.db);
            let params = ClientParams::new("Maria Santos", "Poblacion", Plan::Fiber100);
            let result = client_service.create(&params).await;

            assert!(result.is_ok());
            assert_eq!(result.unwrap().to_string(), "Maria Santos");

            Ok(())
        }

        /// Expect ValidationError and no stored row for a blank name
        #[tokio::test]
        async fn rejects_blank_name() -> Result<(), TestError> {
            let test = test_setup_with_isp_tables!()?;

            let client_service = ClientService::new(&test.db);
            let params = ClientParams::new("  ", "Poblacion", Plan::Fiber30);
            let result = client_service.create(&params).await;

            assert!(matches!(
                result,
                Err(Error::ValidationError(ValidationError::Required { field: "name" }))
            ));
            assert!(client_service.list().await.unwrap().is_empty());

            Ok(())
        }
    }

    mod update {
        use entity::client::Plan;
        use smart_isp_test_utils::prelude::*;

        use crate::{error::Error, model::client::ClientParams, service::client::ClientService};

        /// Expect NotFound when the client does not exist
        #[tokio::test]
        async fn fails_for_nonexistent_client() -> Result<(), TestError> {
            let test = test_setup_with_isp_tables!()?;

            let client_service = ClientService::new(&test.db);
            let params = ClientParams::new("Maria Santos", "Poblacion", Plan::Fiber30);
            let result = client_service.update(7, &params).await;

            assert!(matches!(
                result,
                Err(Error::NotFound {
                    entity: "client",
                    id: 7
                })
            ));

            Ok(())
        }
    }

    mod delete {
        use rust_decimal::Decimal;
        use smart_isp_test_utils::prelude::*;

        use crate::{
            data::{payment::PaymentRepository, router::RouterRepository},
            error::Error,
            service::client::ClientService,
        };

        /// Expect the client's routers and payments to be gone after delete
        #[tokio::test]
        async fn deletes_client_with_dependents() -> Result<(), TestError> {
            let test = test_setup_with_isp_tables!()?;
            let client = test.client().insert_mock_client("Pedro Reyes", "Poblacion").await?;
            test.router().insert_mock_router("R001", client.id).await?;
            test.payment()
                .insert_mock_payment(client.id, None, Decimal::new(150000, 2))
                .await?;

            let client_service = ClientService::new(&test.db);
            let result = client_service.delete(client.id).await;

            assert!(result.is_ok());
            assert!(client_service.get(client.id).await.unwrap().is_none());
            assert!(RouterRepository::new(&test.db)
                .list_by_client(client.id)
                .await?
                .is_empty());
            assert!(PaymentRepository::new(&test.db)
                .list_by_client(client.id)
                .await?
                .is_empty());

            Ok(())
        }

        /// Expect NotFound when the client does not exist
        #[tokio::test]
        async fn fails_for_nonexistent_client() -> Result<(), TestError> {
            let test = test_setup_with_isp_tables!()?;

            let client_service = ClientService::new(&test.db);
            let result = client_service.delete(1).await;

            assert!(matches!(result, Err(Error::NotFound { .. })));

            Ok(())
        }
    }
}
