use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::{
    data::{payment::PaymentRepository, router::RouterRepository},
    model::{client::ClientParams, db::ClientModel},
};

pub struct ClientRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ClientRepository<'a, C> {
    /// Creates a new instance of [`ClientRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new client
    pub async fn create(&self, params: &ClientParams) -> Result<ClientModel, DbErr> {
        let now = Utc::now().naive_utc();
        let client = entity::client::ActiveModel {
            name: ActiveValue::Set(params.name.clone()),
            town: ActiveValue::Set(params.town.clone()),
            plan: ActiveValue::Set(params.plan),
            payment_status: ActiveValue::Set(params.payment_status),
            router_status: ActiveValue::Set(params.router_status),
            last_payment: ActiveValue::Set(params.last_payment),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        client.insert(self.db).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<ClientModel>, DbErr> {
        entity::prelude::Client::find_by_id(id).one(self.db).await
    }

    /// Lists all clients ordered by name
    pub async fn list(&self) -> Result<Vec<ClientModel>, DbErr> {
        entity::prelude::Client::find()
            .order_by_asc(entity::client::Column::Name)
            .order_by_asc(entity::client::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn list_by_town(&self, town: &str) -> Result<Vec<ClientModel>, DbErr> {
        entity::prelude::Client::find()
            .filter(entity::client::Column::Town.eq(town))
            .order_by_asc(entity::client::Column::Name)
            .order_by_asc(entity::client::Column::Id)
            .all(self.db)
            .await
    }

    /// Overwrites every writable field of a client
    ///
    /// Returns `Ok(None)` if no client exists with the provided ID.
    pub async fn update(
        &self,
        id: i32,
        params: &ClientParams,
    ) -> Result<Option<ClientModel>, DbErr> {
        let client = match entity::prelude::Client::find_by_id(id).one(self.db).await? {
            Some(client) => client,
            None => return Ok(None),
        };

        let mut client_am = client.into_active_model();
        client_am.name = ActiveValue::Set(params.name.clone());
        client_am.town = ActiveValue::Set(params.town.clone());
        client_am.plan = ActiveValue::Set(params.plan);
        client_am.payment_status = ActiveValue::Set(params.payment_status);
        client_am.router_status = ActiveValue::Set(params.router_status);
        client_am.last_payment = ActiveValue::Set(params.last_payment);
        client_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let client = client_am.update(self.db).await?;

        Ok(Some(client))
    }

    /// Deletes a client along with its routers and payment records
    ///
    /// Returns OK regardless of client existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field. The dependent rows are
    /// removed first, run this inside a transaction to make the delete atomic.
    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        let routers = RouterRepository::new(self.db).delete_by_client(id).await?;
        let payments = PaymentRepository::new(self.db).delete_by_client(id).await?;

        tracing::debug!(
            "Removed {} routers and {} payment records of client ID {}",
            routers.rows_affected,
            payments.rows_affected,
            id
        );

        entity::prelude::Client::delete_by_id(id).exec(self.db).await
    }
}

#[cfg(test)]
mod tests {

    mod create {
        use entity::client::{PaymentStatus, Plan, RouterStatus};
        use smart_isp_test_utils::prelude::*;

        use crate::{data::client::ClientRepository, model::client::ClientParams};

        /// Expect success and schema defaults when creating a new client
        #[tokio::test]
        async fn creates_client_with_defaults() -> Result<(), TestError> {
            let test = test_setup_with_isp_tables!()?;

            let client_repo = ClientRepository::new(&test.db);
            let params = ClientParams::new("Maria Santos", "Poblacion", Plan::Fiber50);
            let client = client_repo.create(&params).await?;

            assert_eq!(client.name, "Maria Santos");
            assert_eq!(client.plan, Plan::Fiber50);
            assert_eq!(client.payment_status, PaymentStatus::Pending);
            assert_eq!(client.router_status, RouterStatus::Offline);
            assert!(client.last_payment.is_none());
            assert_eq!(client.created_at, client.updated_at);

            Ok(())
        }
    }

    mod list {
        use smart_isp_test_utils::prelude::*;

        use crate::data::client::ClientRepository;

        /// Expect clients ordered by name
        #[tokio::test]
        async fn orders_by_name() -> Result<(), TestError> {
            let test = test_setup_with_isp_tables!()?;
            test.client().insert_mock_client("Pedro Reyes", "Poblacion").await?;
            test.client().insert_mock_client("Ana Cruz", "San Isidro").await?;
            test.client().insert_mock_client("Jose Rizal", "Poblacion").await?;

            let client_repo = ClientRepository::new(&test.db);
            let names: Vec<String> = client_repo
                .list()
                .await?
                .into_iter()
                .map(|client| client.name)
                .collect();

            assert_eq!(names, vec!["Ana Cruz", "Jose Rizal", "Pedro Reyes"]);

            Ok(())
        }

        /// Expect only clients of the requested town
        #[tokio::test]
        async fn filters_by_town() -> Result<(), TestError> {
            let test = test_setup_with_isp_tables!()?;
            test.client().insert_mock_client("Pedro Reyes", "Poblacion").await?;
            test.client().insert_mock_client("Ana Cruz", "San Isidro").await?;

            let client_repo = ClientRepository::new(&test.db);
            let clients = client_repo.list_by_town("San Isidro").await?;

            assert_eq!(clients.len(), 1);
            assert_eq!(clients[0].name, "Ana Cruz");

            Ok(())
        }
    }

    mod update {
        use entity::client::{PaymentStatus, Plan};
        use smart_isp_test_utils::prelude::*;

        use crate::{data::client::ClientRepository, model::client::ClientParams};

        /// Expect Ok(Some(_)) with the new values for an existing client
        #[tokio::test]
        async fn updates_existing_client() -> Result<(), TestError> {
            let test = test_setup_with_isp_tables!()?;
            let client = test.client().insert_mock_client("Pedro Reyes", "Poblacion").await?;

            let mut params = ClientParams::from(&client);
            params.plan = Plan::Fiber100;
            params.payment_status = PaymentStatus::Paid;

            let client_repo = ClientRepository::new(&test.db);
            let updated = client_repo.update(client.id, &params).await?.unwrap();

            assert_eq!(updated.plan, Plan::Fiber100);
            assert_eq!(updated.payment_status, PaymentStatus::Paid);
            assert_eq!(updated.created_at, client.created_at);
            assert!(updated.updated_at >= client.updated_at);

            Ok(())
        }

        /// Expect Ok(None) when the client does not exist
        #[tokio::test]
        async fn returns_none_for_nonexistent_client() -> Result<(), TestError> {
            let test = test_setup_with_isp_tables!()?;

            let client_repo = ClientRepository::new(&test.db);
            let params = ClientParams::new("Pedro Reyes", "Poblacion", Plan::Fiber30);
            let result = client_repo.update(1, &params).await;

            assert!(matches!(result, Ok(None)));

            Ok(())
        }
    }

    mod delete {
        use rust_decimal::Decimal;
        use sea_orm::{EntityTrait, PaginatorTrait};
        use smart_isp_test_utils::prelude::*;

        use crate::data::client::ClientRepository;

        /// Expect routers and payments of the client to be deleted with it
        #[tokio::test]
        async fn deletes_dependent_rows() -> Result<(), TestError> {
            let test = test_setup_with_isp_tables!()?;
            let client = test.client().insert_mock_client("Pedro Reyes", "Poblacion").await?;
            let other = test.client().insert_mock_client("Ana Cruz", "Poblacion").await?;
            test.router().insert_mock_router("R001", client.id).await?;
            test.router().insert_mock_router("R002", other.id).await?;
            test.payment()
                .insert_mock_payment(client.id, None, Decimal::new(150000, 2))
                .await?;

            let client_repo = ClientRepository::new(&test.db);
            let result = client_repo.delete(client.id).await?;

            assert_eq!(result.rows_affected, 1);
            assert_eq!(entity::prelude::Router::find().count(&test.db).await?, 1);
            assert_eq!(entity::prelude::PaymentRecord::find().count(&test.db).await?, 0);
            assert!(entity::prelude::Client::find_by_id(other.id)
                .one(&test.db)
                .await?
                .is_some());

            Ok(())
        }

        /// Expect no rows affected when the client does not exist
        #[tokio::test]
        async fn returns_zero_for_nonexistent_client() -> Result<(), TestError> {
            let test = test_setup_with_isp_tables!()?;

            let client_repo = ClientRepository::new(&test.db);
            let result = client_repo.delete(1).await?;

            assert_eq!(result.rows_affected, 0);

            Ok(())
        }
    }
}
