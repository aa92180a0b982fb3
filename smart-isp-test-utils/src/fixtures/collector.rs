use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn collector(&self) -> CollectorFixtures<'_> {
        CollectorFixtures { test: self }
    }
}

pub struct CollectorFixtures<'a> {
    test: &'a TestContext,
}

impl<'a> CollectorFixtures<'a> {
    /// Insert a collector without coordinates and a zero performance score
    pub async fn insert_mock_collector(
        &self,
        name: &str,
        assigned_town: &str,
    ) -> Result<entity::collector::Model, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::Collector::insert(entity::collector::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                assigned_town: ActiveValue::Set(assigned_town.to_string()),
                active_clients: ActiveValue::Set(0),
                last_collection_date: ActiveValue::Set(None),
                performance_score: ActiveValue::Set(Decimal::ZERO),
                latitude: ActiveValue::Set(None),
                longitude: ActiveValue::Set(None),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.test.db)
            .await?,
        )
    }
}
