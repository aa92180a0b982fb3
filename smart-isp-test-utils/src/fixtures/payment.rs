use chrono::{NaiveDate, Utc};
use entity::payment_record::{PaymentMode, PaymentStatus};
use rust_decimal::Decimal;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn payment(&self) -> PaymentFixtures<'_> {
        PaymentFixtures { test: self }
    }
}

pub struct PaymentFixtures<'a> {
    test: &'a TestContext,
}

impl<'a> PaymentFixtures<'a> {
    /// Insert a paid cash payment dated today
    pub async fn insert_mock_payment(
        &self,
        client_id: i32,
        collector_id: Option<i32>,
        amount: Decimal,
    ) -> Result<entity::payment_record::Model, TestError> {
        self.insert(
            client_id,
            collector_id,
            Utc::now().date_naive(),
            amount,
            None,
        )
        .await
    }

    /// Insert a paid cash payment on the given date
    pub async fn insert_payment_on(
        &self,
        client_id: i32,
        date: NaiveDate,
        amount: Decimal,
    ) -> Result<entity::payment_record::Model, TestError> {
        self.insert(client_id, None, date, amount, None).await
    }

    /// Insert a paid cash payment of $1,000.00 carrying a reference number
    pub async fn insert_payment_with_reference(
        &self,
        client_id: i32,
        reference_number: &str,
    ) -> Result<entity::payment_record::Model, TestError> {
        self.insert(
            client_id,
            None,
            Utc::now().date_naive(),
            Decimal::new(100000, 2),
            Some(reference_number.to_string()),
        )
        .await
    }

    async fn insert(
        &self,
        client_id: i32,
        collector_id: Option<i32>,
        date: NaiveDate,
        amount: Decimal,
        reference_number: Option<String>,
    ) -> Result<entity::payment_record::Model, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::PaymentRecord::insert(entity::payment_record::ActiveModel {
                client_id: ActiveValue::Set(client_id),
                amount: ActiveValue::Set(amount),
                mode: ActiveValue::Set(PaymentMode::Cash),
                date: ActiveValue::Set(date),
                collector_id: ActiveValue::Set(collector_id),
                status: ActiveValue::Set(PaymentStatus::Paid),
                reference_number: ActiveValue::Set(reference_number),
                notes: ActiveValue::Set(String::new()),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.test.db)
            .await?,
        )
    }
}
