use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::model::{db::MonthlyCollectionModel, report::MonthlyCollectionParams};

pub struct MonthlyCollectionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MonthlyCollectionRepository<'a, C> {
    /// Creates a new instance of [`MonthlyCollectionRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        params: &MonthlyCollectionParams,
    ) -> Result<MonthlyCollectionModel, DbErr> {
        let now = Utc::now().naive_utc();
        let collection = entity::monthly_collection::ActiveModel {
            month: ActiveValue::Set(params.month),
            year: ActiveValue::Set(params.year),
            total_amount: ActiveValue::Set(params.total_amount),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        collection.insert(self.db).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<MonthlyCollectionModel>, DbErr> {
        entity::prelude::MonthlyCollection::find_by_id(id)
            .one(self.db)
            .await
    }

    /// Finds the summary of a calendar month
    ///
    /// Nothing prevents two rows for the same month, the oldest one wins.
    pub async fn get_by_period(
        &self,
        year: i16,
        month: i16,
    ) -> Result<Option<MonthlyCollectionModel>, DbErr> {
        entity::prelude::MonthlyCollection::find()
            .filter(entity::monthly_collection::Column::Year.eq(year))
            .filter(entity::monthly_collection::Column::Month.eq(month))
            .order_by_asc(entity::monthly_collection::Column::Id)
            .one(self.db)
            .await
    }

    /// Lists all summaries in calendar order
    pub async fn list(&self) -> Result<Vec<MonthlyCollectionModel>, DbErr> {
        entity::prelude::MonthlyCollection::find()
            .order_by_asc(entity::monthly_collection::Column::Year)
            .order_by_asc(entity::monthly_collection::Column::Month)
            .all(self.db)
            .await
    }

    pub async fn list_by_year(&self, year: i16) -> Result<Vec<MonthlyCollectionModel>, DbErr> {
        entity::prelude::MonthlyCollection::find()
            .filter(entity::monthly_collection::Column::Year.eq(year))
            .order_by_asc(entity::monthly_collection::Column::Month)
            .all(self.db)
            .await
    }

    /// Returns `Ok(None)` if no summary exists with the provided ID.
    pub async fn update(
        &self,
        id: i32,
        params: &MonthlyCollectionParams,
    ) -> Result<Option<MonthlyCollectionModel>, DbErr> {
        let collection = match entity::prelude::MonthlyCollection::find_by_id(id)
            .one(self.db)
            .await?
        {
            Some(collection) => collection,
            None => return Ok(None),
        };

        let mut collection_am = collection.into_active_model();
        collection_am.month = ActiveValue::Set(params.month);
        collection_am.year = ActiveValue::Set(params.year);
        collection_am.total_amount = ActiveValue::Set(params.total_amount);
        collection_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let collection = collection_am.update(self.db).await?;

        Ok(Some(collection))
    }

    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::MonthlyCollection::delete_by_id(id)
            .exec(self.db)
            .await
    }
}
