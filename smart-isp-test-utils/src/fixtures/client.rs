use chrono::Utc;
use entity::client::{PaymentStatus, Plan, RouterStatus};
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn client(&self) -> ClientFixtures<'_> {
        ClientFixtures { test: self }
    }
}

pub struct ClientFixtures<'a> {
    test: &'a TestContext,
}

impl<'a> ClientFixtures<'a> {
    /// Insert a client on the 30 Mbps plan with default statuses
    pub async fn insert_mock_client(
        &self,
        name: &str,
        town: &str,
    ) -> Result<entity::client::Model, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::Client::insert(entity::client::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                town: ActiveValue::Set(town.to_string()),
                plan: ActiveValue::Set(Plan::Fiber30),
                payment_status: ActiveValue::Set(PaymentStatus::Pending),
                router_status: ActiveValue::Set(RouterStatus::Offline),
                last_payment: ActiveValue::Set(None),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.test.db)
            .await?,
        )
    }
}
