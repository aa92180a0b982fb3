use sea_orm::DatabaseConnection;

use crate::{
    data::{client::ClientRepository, collector::CollectorRepository, payment::PaymentRepository},
    error::Error,
    model::{
        db::{ClientModel, PaymentRecordModel},
        payment::PaymentParams,
    },
    service::{duplicate, unique_violation, validate},
};

/// Service for recording client payments.
pub struct PaymentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PaymentService<'a> {
    /// Creates a new instance of PaymentService.
    ///
    /// # Arguments
    /// - `db` - Database connection reference
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Validates and records a new payment.
    ///
    /// # Returns
    /// - `Ok(PaymentRecordModel)` - The stored payment
    /// - `Err(Error::ValidationError)` - A field violates its rule or the reference number is taken
    /// - `Err(Error::NotFound)` - The client or the collector does not exist
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create(&self, params: &PaymentParams) -> Result<PaymentRecordModel, Error> {
        validate("payment", params)?;
        self.ensure_references_exist(params).await?;
        self.ensure_reference_number_free(params, None).await?;

        let payment = PaymentRepository::new(self.db)
            .create(params)
            .await
            .map_err(|e| reference_violation(e, params))?;

        tracing::info!(
            "Recorded payment ID {} of {} for client ID {}",
            payment.id,
            payment.amount_display(),
            payment.client_id
        );

        Ok(payment)
    }

    pub async fn get(&self, id: i32) -> Result<Option<PaymentRecordModel>, Error> {
        Ok(PaymentRepository::new(self.db).get_by_id(id).await?)
    }

    /// Gets a payment together with the client it was paid for.
    ///
    /// # Returns
    /// - `Ok(Some((PaymentRecordModel, ClientModel)))` - Payment and its client
    /// - `Ok(None)` - No payment exists with the provided ID
    /// - `Err(Error::InternalError)` - The payment's client is missing
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn get_with_client(
        &self,
        id: i32,
    ) -> Result<Option<(PaymentRecordModel, ClientModel)>, Error> {
        match PaymentRepository::new(self.db).get_with_client(id).await? {
            None => Ok(None),
            Some((payment, maybe_client)) => {
                // Only reachable if the client foreign key is not enforced
                let client = maybe_client.ok_or_else(|| {
                    Error::InternalError(format!(
                        "Failed to find client ID {} of payment ID {}",
                        payment.client_id, payment.id
                    ))
                })?;

                Ok(Some((payment, client)))
            }
        }
    }

    pub async fn get_by_reference_number(
        &self,
        reference_number: &str,
    ) -> Result<Option<PaymentRecordModel>, Error> {
        Ok(PaymentRepository::new(self.db)
            .get_by_reference_number(reference_number.trim())
            .await?)
    }

    pub async fn list(&self) -> Result<Vec<PaymentRecordModel>, Error> {
        Ok(PaymentRepository::new(self.db).list().await?)
    }

    pub async fn list_by_client(&self, client_id: i32) -> Result<Vec<PaymentRecordModel>, Error> {
        Ok(PaymentRepository::new(self.db)
            .list_by_client(client_id)
            .await?)
    }

    pub async fn list_by_collector(
        &self,
        collector_id: i32,
    ) -> Result<Vec<PaymentRecordModel>, Error> {
        Ok(PaymentRepository::new(self.db)
            .list_by_collector(collector_id)
            .await?)
    }

    /// Validates and overwrites an existing payment.
    ///
    /// # Returns
    /// - `Ok(PaymentRecordModel)` - The updated payment
    /// - `Err(Error::ValidationError)` - A field violates its rule or the reference number belongs to another payment
    /// - `Err(Error::NotFound)` - The payment, client or collector does not exist
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn update(&self, id: i32, params: &PaymentParams) -> Result<PaymentRecordModel, Error> {
        validate("payment", params)?;
        self.ensure_references_exist(params).await?;
        self.ensure_reference_number_free(params, Some(id)).await?;

        let payment = PaymentRepository::new(self.db)
            .update(id, params)
            .await
            .map_err(|e| reference_violation(e, params))?
            .ok_or(Error::NotFound {
                entity: "payment",
                id,
            })?;

        tracing::info!("Updated payment ID {}", id);

        Ok(payment)
    }

    /// Deletes a payment
    ///
    /// # Returns
    /// - `Ok(())` - Payment deleted
    /// - `Err(Error::NotFound)` - No payment exists with the provided ID
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn delete(&self, id: i32) -> Result<(), Error> {
        let result = PaymentRepository::new(self.db).delete(id).await?;
        if result.rows_affected == 0 {
            return Err(Error::NotFound {
                entity: "payment",
                id,
            });
        }

        tracing::info!("Deleted payment ID {}", id);

        Ok(())
    }

    async fn ensure_references_exist(&self, params: &PaymentParams) -> Result<(), Error> {
        if ClientRepository::new(self.db)
            .get_by_id(params.client_id)
            .await?
            .is_none()
        {
            return Err(Error::NotFound {
                entity: "client",
                id: params.client_id,
            });
        }

        if let Some(collector_id) = params.collector_id {
            if CollectorRepository::new(self.db)
                .get_by_id(collector_id)
                .await?
                .is_none()
            {
                return Err(Error::NotFound {
                    entity: "collector",
                    id: collector_id,
                });
            }
        }

        Ok(())
    }

    /// Fails if another payment than `own_id` already carries the reference number
    async fn ensure_reference_number_free(
        &self,
        params: &PaymentParams,
        own_id: Option<i32>,
    ) -> Result<(), Error> {
        let Some(reference_number) = params.reference_number() else {
            return Ok(());
        };

        let existing = PaymentRepository::new(self.db)
            .get_by_reference_number(reference_number)
            .await?;

        match existing {
            Some(payment) if Some(payment.id) != own_id => {
                Err(duplicate("reference_number", reference_number))
            }
            _ => Ok(()),
        }
    }
}

fn reference_violation(err: sea_orm::DbErr, params: &PaymentParams) -> Error {
    unique_violation(
        err,
        "reference_number",
        params.reference_number().unwrap_or_default(),
    )
}
