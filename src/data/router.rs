use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::model::{db::RouterModel, router::RouterParams};

pub struct RouterRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RouterRepository<'a, C> {
    /// Creates a new instance of [`RouterRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new router for an existing client
    pub async fn create(&self, params: &RouterParams) -> Result<RouterModel, DbErr> {
        let now = Utc::now().naive_utc();
        let router = entity::router::ActiveModel {
            router_id: ActiveValue::Set(params.router_id.clone()),
            client_id: ActiveValue::Set(params.client_id),
            status: ActiveValue::Set(params.status),
            uptime: ActiveValue::Set(params.uptime),
            signal_strength: ActiveValue::Set(params.signal_strength),
            location: ActiveValue::Set(params.location),
            last_seen: ActiveValue::Set(params.last_seen),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        router.insert(self.db).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<RouterModel>, DbErr> {
        entity::prelude::Router::find_by_id(id).one(self.db).await
    }

    /// Finds a router by its operator facing identifier, e.g. `R001`
    pub async fn get_by_router_id(&self, router_id: &str) -> Result<Option<RouterModel>, DbErr> {
        entity::prelude::Router::find()
            .filter(entity::router::Column::RouterId.eq(router_id))
            .one(self.db)
            .await
    }

    /// Lists all routers ordered by router ID
    pub async fn list(&self) -> Result<Vec<RouterModel>, DbErr> {
        entity::prelude::Router::find()
            .order_by_asc(entity::router::Column::RouterId)
            .all(self.db)
            .await
    }

    pub async fn list_by_client(&self, client_id: i32) -> Result<Vec<RouterModel>, DbErr> {
        entity::prelude::Router::find()
            .filter(entity::router::Column::ClientId.eq(client_id))
            .order_by_asc(entity::router::Column::RouterId)
            .all(self.db)
            .await
    }

    /// Overwrites every writable field of a router
    ///
    /// Returns `Ok(None)` if no router exists with the provided ID.
    pub async fn update(
        &self,
        id: i32,
        params: &RouterParams,
    ) -> Result<Option<RouterModel>, DbErr> {
        let router = match entity::prelude::Router::find_by_id(id).one(self.db).await? {
            Some(router) => router,
            None => return Ok(None),
        };

        let mut router_am = router.into_active_model();
        router_am.router_id = ActiveValue::Set(params.router_id.clone());
        router_am.client_id = ActiveValue::Set(params.client_id);
        router_am.status = ActiveValue::Set(params.status);
        router_am.uptime = ActiveValue::Set(params.uptime);
        router_am.signal_strength = ActiveValue::Set(params.signal_strength);
        router_am.location = ActiveValue::Set(params.location);
        router_am.last_seen = ActiveValue::Set(params.last_seen);
        router_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let router = router_am.update(self.db).await?;

        Ok(Some(router))
    }

    /// Deletes a router
    ///
    /// Returns OK regardless of router existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Router::delete_by_id(id).exec(self.db).await
    }

    /// Deletes every router belonging to a client
    pub async fn delete_by_client(&self, client_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Router::delete_many()
            .filter(entity::router::Column::ClientId.eq(client_id))
            .exec(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {

    mod create {
        use entity::router::{Location, Status};
        use smart_isp_test_utils::prelude::*;

        use crate::{data::router::RouterRepository, model::router::RouterParams};

        /// Expect success when creating a router for an existing client
        #[tokio::test]
        async fn creates_router() -> Result<(), TestError> {
            let test = test_setup_with_isp_tables!()?;
            let client = test.client().insert_mock_client("Pedro Reyes", "Poblacion").await?;

            let router_repo = RouterRepository::new(&test.db);
            let mut params = RouterParams::new("R001", client.id, Location::North);
            params.uptime = Some(5400);
            params.signal_strength = Some(-65.4);
            let router = router_repo.create(&params).await?;

            assert_eq!(router.router_id, "R001");
            assert_eq!(router.status, Status::Offline);
            assert_eq!(router.uptime_display(), "1h 30m");
            assert_eq!(router.signal_strength_display(), "-65 dBm");

            Ok(())
        }

        /// Expect Error when the client does not exist
        #[tokio::test]
        async fn fails_for_nonexistent_client() -> Result<(), TestError> {
            let test = test_setup_with_isp_tables!()?;

            let router_repo = RouterRepository::new(&test.db);
            let params = RouterParams::new("R001", 1, Location::North);
            let result = router_repo.create(&params).await;

            assert!(result.is_err());

            Ok(())
        }

        /// Expect Error when the router ID is already taken
        #[tokio::test]
        async fn fails_for_duplicate_router_id() -> Result<(), TestError> {
            let test = test_setup_with_isp_tables!()?;
            let client = test.client().insert_mock_client("Pedro Reyes", "Poblacion").await?;
            test.router().insert_mock_router("R001", client.id).await?;

            let router_repo = RouterRepository::new(&test.db);
            let params = RouterParams::new("R001", client.id, Location::South);
            let result = router_repo.create(&params).await;

            assert!(result.is_err());

            Ok(())
        }
    }

    mod get_by_router_id {
        use smart_isp_test_utils::prelude::*;

        use crate::data::router::RouterRepository;

        /// Expect Ok(Some(_)) for a known router ID and Ok(None) otherwise
        #[tokio::test]
        async fn finds_router_by_identifier() -> Result<(), TestError> {
            let test = test_setup_with_isp_tables!()?;
            let client = test.client().insert_mock_client("Pedro Reyes", "Poblacion").await?;
            let router = test.router().insert_mock_router("R007", client.id).await?;

            let router_repo = RouterRepository::new(&test.db);

            let found = router_repo.get_by_router_id("R007").await?;
            assert_eq!(found.map(|r| r.id), Some(router.id));
            assert!(router_repo.get_by_router_id("R008").await?.is_none());

            Ok(())
        }
    }

    mod list_by_client {
        use smart_isp_test_utils::prelude::*;

        use crate::data::router::RouterRepository;

        /// Expect only the client's routers, ordered by router ID
        #[tokio::test]
        async fn lists_routers_of_client() -> Result<(), TestError> {
            let test = test_setup_with_isp_tables!()?;
            let client = test.client().insert_mock_client("Pedro Reyes", "Poblacion").await?;
            let other = test.client().insert_mock_client("Ana Cruz", "Poblacion").await?;
            test.router().insert_mock_router("R003", client.id).await?;
            test.router().insert_mock_router("R001", client.id).await?;
            test.router().insert_mock_router("R002", other.id).await?;

            let router_repo = RouterRepository::new(&test.db);
            let router_ids: Vec<String> = router_repo
                .list_by_client(client.id)
                .await?
                .into_iter()
                .map(|router| router.router_id)
                .collect();

            assert_eq!(router_ids, vec!["R001", "R003"]);

            Ok(())
        }
    }

    mod update {
        use entity::router::Status;
        use smart_isp_test_utils::prelude::*;

        use crate::{data::router::RouterRepository, model::router::RouterParams};

        /// Expect Ok(Some(_)) with the new status for an existing router
        #[tokio::test]
        async fn updates_existing_router() -> Result<(), TestError> {
            let test = test_setup_with_isp_tables!()?;
            let client = test.client().insert_mock_client("Pedro Reyes", "Poblacion").await?;
            let router = test.router().insert_mock_router("R001", client.id).await?;

            let mut params = RouterParams::from(&router);
            params.status = Status::Maintenance;

            let router_repo = RouterRepository::new(&test.db);
            let updated = router_repo.update(router.id, &params).await?.unwrap();

            assert_eq!(updated.status, Status::Maintenance);
            assert_eq!(updated.status_badge_color(), "badge-warning");

            Ok(())
        }
    }
}
