use chrono::Utc;
use entity::router::{Location, Status};
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn router(&self) -> RouterFixtures<'_> {
        RouterFixtures { test: self }
    }
}

pub struct RouterFixtures<'a> {
    test: &'a TestContext,
}

impl<'a> RouterFixtures<'a> {
    /// Insert an offline router in the north area without readings
    ///
    /// The client must already exist.
    pub async fn insert_mock_router(
        &self,
        router_id: &str,
        client_id: i32,
    ) -> Result<entity::router::Model, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::Router::insert(entity::router::ActiveModel {
                router_id: ActiveValue::Set(router_id.to_string()),
                client_id: ActiveValue::Set(client_id),
                status: ActiveValue::Set(Status::Offline),
                uptime: ActiveValue::Set(None),
                signal_strength: ActiveValue::Set(None),
                location: ActiveValue::Set(Location::North),
                last_seen: ActiveValue::Set(None),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.test.db)
            .await?,
        )
    }
}
