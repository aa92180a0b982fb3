use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder, Select, UpdateResult,
};

use crate::model::{
    db::{ClientModel, PaymentRecordModel},
    payment::PaymentParams,
};

pub struct PaymentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PaymentRepository<'a, C> {
    /// Creates a new instance of [`PaymentRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Records a new payment
    ///
    /// A blank reference number is stored as `NULL` so it never collides with
    /// other payments lacking one.
    pub async fn create(&self, params: &PaymentParams) -> Result<PaymentRecordModel, DbErr> {
        let now = Utc::now().naive_utc();
        let payment = entity::payment_record::ActiveModel {
            client_id: ActiveValue::Set(params.client_id),
            amount: ActiveValue::Set(params.amount),
            mode: ActiveValue::Set(params.mode),
            date: ActiveValue::Set(params.date),
            collector_id: ActiveValue::Set(params.collector_id),
            status: ActiveValue::Set(params.status),
            reference_number: ActiveValue::Set(params.reference_number().map(str::to_string)),
            notes: ActiveValue::Set(params.notes.clone()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        payment.insert(self.db).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<PaymentRecordModel>, DbErr> {
        entity::prelude::PaymentRecord::find_by_id(id)
            .one(self.db)
            .await
    }

    /// Gets a payment together with the client it was paid for
    pub async fn get_with_client(
        &self,
        id: i32,
    ) -> Result<Option<(PaymentRecordModel, Option<ClientModel>)>, DbErr> {
        entity::prelude::PaymentRecord::find_by_id(id)
            .find_also_related(entity::client::Entity)
            .one(self.db)
            .await
    }

    pub async fn get_by_reference_number(
        &self,
        reference_number: &str,
    ) -> Result<Option<PaymentRecordModel>, DbErr> {
        entity::prelude::PaymentRecord::find()
            .filter(entity::payment_record::Column::ReferenceNumber.eq(reference_number))
            .one(self.db)
            .await
    }

    /// Lists all payments, newest first
    pub async fn list(&self) -> Result<Vec<PaymentRecordModel>, DbErr> {
        newest_first(entity::prelude::PaymentRecord::find())
            .all(self.db)
            .await
    }

    pub async fn list_by_client(&self, client_id: i32) -> Result<Vec<PaymentRecordModel>, DbErr> {
        newest_first(
            entity::prelude::PaymentRecord::find()
                .filter(entity::payment_record::Column::ClientId.eq(client_id)),
        )
        .all(self.db)
        .await
    }

    pub async fn list_by_collector(
        &self,
        collector_id: i32,
    ) -> Result<Vec<PaymentRecordModel>, DbErr> {
        newest_first(
            entity::prelude::PaymentRecord::find()
                .filter(entity::payment_record::Column::CollectorId.eq(collector_id)),
        )
        .all(self.db)
        .await
    }

    /// Overwrites every writable field of a payment
    ///
    /// Returns `Ok(None)` if no payment exists with the provided ID.
    pub async fn update(
        &self,
        id: i32,
        params: &PaymentParams,
    ) -> Result<Option<PaymentRecordModel>, DbErr> {
        let payment = match entity::prelude::PaymentRecord::find_by_id(id)
            .one(self.db)
            .await?
        {
            Some(payment) => payment,
            None => return Ok(None),
        };

        let mut payment_am = payment.into_active_model();
        payment_am.client_id = ActiveValue::Set(params.client_id);
        payment_am.amount = ActiveValue::Set(params.amount);
        payment_am.mode = ActiveValue::Set(params.mode);
        payment_am.date = ActiveValue::Set(params.date);
        payment_am.collector_id = ActiveValue::Set(params.collector_id);
        payment_am.status = ActiveValue::Set(params.status);
        payment_am.reference_number =
            ActiveValue::Set(params.reference_number().map(str::to_string));
        payment_am.notes = ActiveValue::Set(params.notes.clone());
        payment_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let payment = payment_am.update(self.db).await?;

        Ok(Some(payment))
    }

    /// Deletes a payment
    ///
    /// Returns OK regardless of payment existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::PaymentRecord::delete_by_id(id)
            .exec(self.db)
            .await
    }

    /// Deletes every payment recorded for a client
    pub async fn delete_by_client(&self, client_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::PaymentRecord::delete_many()
            .filter(entity::payment_record::Column::ClientId.eq(client_id))
            .exec(self.db)
            .await
    }

    /// Detaches every payment from a collector, keeping the payments
    pub async fn clear_collector(&self, collector_id: i32) -> Result<UpdateResult, DbErr> {
        entity::prelude::PaymentRecord::update_many()
            .set(entity::payment_record::ActiveModel {
                collector_id: ActiveValue::Set(None),
                updated_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .filter(entity::payment_record::Column::CollectorId.eq(collector_id))
            .exec(self.db)
            .await
    }
}

fn newest_first(
    select: Select<entity::payment_record::Entity>,
) -> Select<entity::payment_record::Entity> {
    select
        .order_by_desc(entity::payment_record::Column::Date)
        .order_by_desc(entity::payment_record::Column::CreatedAt)
        .order_by_desc(entity::payment_record::Column::Id)
}
