use sea_orm::DatabaseConnection;

use crate::{
    data::{client::ClientRepository, router::RouterRepository},
    error::Error,
    model::{db::RouterModel, router::RouterParams},
    service::{duplicate, unique_violation, validate},
};

/// Service for managing customer premises routers.
pub struct RouterService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RouterService<'a> {
    /// Creates a new instance of RouterService.
    ///
    /// # Arguments
    /// - `db` - Database connection reference
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Validates and stores a new router for an existing client.
    ///
    /// # Returns
    /// - `Ok(RouterModel)` - The stored router
    /// - `Err(Error::ValidationError)` - A field violates its rule or the router ID is taken
    /// - `Err(Error::NotFound)` - The owning client does not exist
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create(&self, params: &RouterParams) -> Result<RouterModel, Error> {
        validate("router", params)?;
        self.ensure_client_exists(params.client_id).await?;

        let router_repo = RouterRepository::new(self.db);
        if router_repo
            .get_by_router_id(&params.router_id)
            .await?
            .is_some()
        {
            return Err(duplicate("router_id", &params.router_id));
        }

        let router = router_repo
            .create(params)
            .await
            .map_err(|e| unique_violation(e, "router_id", &params.router_id))?;

        tracing::info!(
            "Created router {} (ID {}) for client ID {}",
            router.router_id,
            router.id,
            router.client_id
        );

        Ok(router)
    }

    pub async fn get(&self, id: i32) -> Result<Option<RouterModel>, Error> {
        Ok(RouterRepository::new(self.db).get_by_id(id).await?)
    }

    pub async fn get_by_router_id(&self, router_id: &str) -> Result<Option<RouterModel>, Error> {
        Ok(RouterRepository::new(self.db)
            .get_by_router_id(router_id)
            .await?)
    }

    pub async fn list(&self) -> Result<Vec<RouterModel>, Error> {
        Ok(RouterRepository::new(self.db).list().await?)
    }

    pub async fn list_by_client(&self, client_id: i32) -> Result<Vec<RouterModel>, Error> {
        Ok(RouterRepository::new(self.db)
            .list_by_client(client_id)
            .await?)
    }

    /// Validates and overwrites an existing router.
    ///
    /// # Returns
    /// - `Ok(RouterModel)` - The updated router
    /// - `Err(Error::ValidationError)` - A field violates its rule or the router ID belongs to another router
    /// - `Err(Error::NotFound)` - The router or its new client does not exist
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn update(&self, id: i32, params: &RouterParams) -> Result<RouterModel, Error> {
        validate("router", params)?;
        self.ensure_client_exists(params.client_id).await?;

        let router_repo = RouterRepository::new(self.db);
        if let Some(existing) = router_repo.get_by_router_id(&params.router_id).await? {
            if existing.id != id {
                return Err(duplicate("router_id", &params.router_id));
            }
        }

        let router = router_repo
            .update(id, params)
            .await
            .map_err(|e| unique_violation(e, "router_id", &params.router_id))?
            .ok_or(Error::NotFound { entity: "router", id })?;

        tracing::info!("Updated router {} (ID {})", router.router_id, id);

        Ok(router)
    }

    /// Deletes a router
    ///
    /// # Returns
    /// - `Ok(())` - Router deleted
    /// - `Err(Error::NotFound)` - No router exists with the provided ID
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn delete(&self, id: i32) -> Result<(), Error> {
        let result = RouterRepository::new(self.db).delete(id).await?;
        if result.rows_affected == 0 {
            return Err(Error::NotFound { entity: "router", id });
        }

        tracing::info!("Deleted router ID {}", id);

        Ok(())
    }

    async fn ensure_client_exists(&self, client_id: i32) -> Result<(), Error> {
        match ClientRepository::new(self.db).get_by_id(client_id).await? {
            Some(_) => Ok(()),
            None => Err(Error::NotFound {
                entity: "client",
                id: client_id,
            }),
        }
    }
}

#[cfg(test)]
mod tests {

    mod create {
        use entity::router::Location;
        use smart_isp_test_utils::prelude::*;

        use crate::{
            error::{validation::ValidationError, Error},
            model::router::RouterParams,
            service::router::RouterService,
        };

        /// Expect the router to be stored with a label naming its client
        #[tokio::test]
        async fn creates_router_for_client() -> Result<(), TestError> {
            let test = test_setup_with_isp_tables!()?;
            let client = test.client().insert_mock_client("Pedro Reyes", "Poblacion").await?;

            let router_service = RouterService::new(&test.db);
            let params = RouterParams::new("R001", client.id, Location::Central);
            let router = router_service.create(&params).await.unwrap();

            assert_eq!(router.label(&client), "R001 - Pedro Reyes");

            Ok(())
        }

        /// Expect NotFound when the client does not exist
        #[tokio::test]
        async fn fails_for_nonexistent_client() -> Result<(), TestError> {
            let test = test_setup_with_isp_tables!()?;

            let router_service = RouterService::new(&test.db);
            let params = RouterParams::new("R001", 3, Location::Central);
            let result = router_service.create(&params).await;

            assert!(matches!(
                result,
                Err(Error::NotFound {
                    entity: "client",
                    id: 3
                })
            ));

            Ok(())
        }

        /// Expect a duplicate error naming router_id when the identifier is taken
        #[tokio::test]
        async fn rejects_duplicate_router_id() -> Result<(), TestError> {
            let test = test_setup_with_isp_tables!()?;
            let client = test.client().insert_mock_client("Pedro Reyes", "Poblacion").await?;
            test.router().insert_mock_router("R001", client.id).await?;

            let router_service = RouterService::new(&test.db);
            let params = RouterParams::new("R001", client.id, Location::East);
            let result = router_service.create(&params).await;

            assert!(matches!(
                result,
                Err(Error::ValidationError(ValidationError::Duplicate {
                    field: "router_id",
                    ..
                }))
            ));

            Ok(())
        }

        /// Expect ValidationError for a signal strength outside the dBm range
        #[tokio::test]
        async fn rejects_signal_strength_out_of_range() -> Result<(), TestError> {
            let test = test_setup_with_isp_tables!()?;
            let client = test.client().insert_mock_client("Pedro Reyes", "Poblacion").await?;

            let router_service = RouterService::new(&test.db);
            let mut params = RouterParams::new("R001", client.id, Location::East);
            params.signal_strength = Some(-20.0);
            let result = router_service.create(&params).await;

            assert!(matches!(result, Err(Error::ValidationError(_))));
            assert!(router_service.list().await.unwrap().is_empty());

            Ok(())
        }
    }

    mod update {
        use smart_isp_test_utils::prelude::*;

        use crate::{
            error::{validation::ValidationError, Error},
            model::router::RouterParams,
            service::router::RouterService,
        };

        /// Expect saving a router with its own router ID to succeed
        #[tokio::test]
        async fn keeps_own_router_id() -> Result<(), TestError> {
            let test = test_setup_with_isp_tables!()?;
            let client = test.client().insert_mock_client("Pedro Reyes", "Poblacion").await?;
            let router = test.router().insert_mock_router("R001", client.id).await?;

            let router_service = RouterService::new(&test.db);
            let mut params = RouterParams::from(&router);
            params.uptime = Some(45 * 60);
            let updated = router_service.update(router.id, &params).await.unwrap();

            assert_eq!(updated.uptime_display(), "45m");

            Ok(())
        }

        /// Expect a duplicate error when renaming to another router's ID
        #[tokio::test]
        async fn rejects_router_id_of_other_router() -> Result<(), TestError> {
            let test = test_setup_with_isp_tables!()?;
            let client = test.client().insert_mock_client("Pedro Reyes", "Poblacion").await?;
            test.router().insert_mock_router("R001", client.id).await?;
            let router = test.router().insert_mock_router("R002", client.id).await?;

            let router_service = RouterService::new(&test.db);
            let mut params = RouterParams::from(&router);
            params.router_id = "R001".to_string();
            let result = router_service.update(router.id, &params).await;

            assert!(matches!(
                result,
                Err(Error::ValidationError(ValidationError::Duplicate { .. }))
            ));

            Ok(())
        }
    }
}
