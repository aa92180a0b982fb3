use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::model::{dashboard::WeeklyCollectionParams, db::WeeklyCollectionModel};

pub struct WeeklyCollectionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> WeeklyCollectionRepository<'a, C> {
    /// Creates a new instance of [`WeeklyCollectionRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        params: &WeeklyCollectionParams,
    ) -> Result<WeeklyCollectionModel, DbErr> {
        let now = Utc::now().naive_utc();
        let collection = entity::weekly_collection::ActiveModel {
            week_number: ActiveValue::Set(params.week_number),
            year: ActiveValue::Set(params.year),
            week_start_date: ActiveValue::Set(params.week_start_date),
            total_collection: ActiveValue::Set(params.total_collection),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        collection.insert(self.db).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<WeeklyCollectionModel>, DbErr> {
        entity::prelude::WeeklyCollection::find_by_id(id)
            .one(self.db)
            .await
    }

    /// Lists all weekly totals in calendar order
    pub async fn list(&self) -> Result<Vec<WeeklyCollectionModel>, DbErr> {
        entity::prelude::WeeklyCollection::find()
            .order_by_asc(entity::weekly_collection::Column::Year)
            .order_by_asc(entity::weekly_collection::Column::WeekNumber)
            .all(self.db)
            .await
    }

    pub async fn list_by_year(&self, year: i16) -> Result<Vec<WeeklyCollectionModel>, DbErr> {
        entity::prelude::WeeklyCollection::find()
            .filter(entity::weekly_collection::Column::Year.eq(year))
            .order_by_asc(entity::weekly_collection::Column::WeekNumber)
            .all(self.db)
            .await
    }

    /// Returns `Ok(None)` if no row exists with the provided ID.
    pub async fn update(
        &self,
        id: i32,
        params: &WeeklyCollectionParams,
    ) -> Result<Option<WeeklyCollectionModel>, DbErr> {
        let collection = match entity::prelude::WeeklyCollection::find_by_id(id)
            .one(self.db)
            .await?
        {
            Some(collection) => collection,
            None => return Ok(None),
        };

        let mut collection_am = collection.into_active_model();
        collection_am.week_number = ActiveValue::Set(params.week_number);
        collection_am.year = ActiveValue::Set(params.year);
        collection_am.week_start_date = ActiveValue::Set(params.week_start_date);
        collection_am.total_collection = ActiveValue::Set(params.total_collection);
        collection_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let collection = collection_am.update(self.db).await?;

        Ok(Some(collection))
    }

    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::WeeklyCollection::delete_by_id(id)
            .exec(self.db)
            .await
    }
}
