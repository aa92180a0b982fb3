//! Service layer.
//!
//! Services sit between callers and the repositories of [`crate::data`]. They
//! validate input params, check that referenced rows exist, turn unique
//! constraint failures into [`ValidationError::Duplicate`], and run multi-row
//! deletes inside a single transaction.

pub mod client;
pub mod collector;
pub mod dashboard;
pub mod payment;
pub mod report;
pub mod router;

use sea_orm::{DbErr, SqlErr};

use crate::{
    error::{validation::ValidationError, Error},
    model::Validate,
};

/// Runs the params' validation, logging rejected input.
fn validate<P: Validate>(record: &'static str, params: &P) -> Result<(), Error> {
    params.validate().map_err(|e| {
        tracing::warn!("Rejected {}: {}", record, e);
        Error::from(e)
    })
}

/// Maps a unique constraint violation to a duplicate value error on `field`,
/// any other database error is passed through.
fn unique_violation(err: DbErr, field: &'static str, value: &str) -> Error {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => duplicate(field, value),
        _ => Error::DbErr(err),
    }
}

fn duplicate(field: &'static str, value: &str) -> Error {
    tracing::warn!("Rejected duplicate {} {:?}", field, value);
    ValidationError::Duplicate {
        field,
        value: value.to_string(),
    }
    .into()
}

#[cfg(test)]
mod tests {
    mod unique_violation {
        use chrono::NaiveDate;
        use entity::{payment_record::PaymentMode, router::Location};
        use rust_decimal::Decimal;
        use smart_isp_test_utils::prelude::*;

        use crate::{
            data::{payment::PaymentRepository, router::RouterRepository},
            error::{validation::ValidationError, Error},
            model::{payment::PaymentParams, router::RouterParams},
            service::unique_violation,
        };

        /// Expect a router_id rejected by the unique index to become a Duplicate error
        #[tokio::test]
        async fn maps_duplicate_router_id() -> Result<(), TestError> {
            let test = test_setup_with_isp_tables!()?;
            let client = test.client().insert_mock_client("Pedro Reyes", "Poblacion").await?;
            test.router().insert_mock_router("R001", client.id).await?;

            let router_repo = RouterRepository::new(&test.db);
            let err = router_repo
                .create(&RouterParams::new("R001", client.id, Location::North))
                .await
                .unwrap_err();

            assert!(matches!(
                unique_violation(err, "router_id", "R001"),
                Error::ValidationError(ValidationError::Duplicate {
                    field: "router_id",
                    ..
                })
            ));

            Ok(())
        }

        /// Expect a reference_number rejected by the unique index to become a Duplicate error
        #[tokio::test]
        async fn maps_duplicate_reference_number() -> Result<(), TestError> {
            let test = test_setup_with_isp_tables!()?;
            let client = test.client().insert_mock_client("Pedro Reyes", "Poblacion").await?;
            test.payment()
                .insert_payment_with_reference(client.id, "GC-1001")
                .await?;

            let mut params = PaymentParams::new(
                client.id,
                Decimal::new(50000, 2),
                PaymentMode::Gcash,
                NaiveDate::from_ymd_opt(2025, 10, 1).unwrap(),
            );
            params.reference_number = Some("GC-1001".to_string());

            let payment_repo = PaymentRepository::new(&test.db);
            let err = payment_repo.create(&params).await.unwrap_err();

            let result = unique_violation(err, "reference_number", "GC-1001");
            assert_eq!(
                result.to_string(),
                "A record with reference_number \"GC-1001\" already exists"
            );

            Ok(())
        }

        /// Expect any other database error to pass through unchanged
        #[tokio::test]
        async fn passes_through_other_errors() -> Result<(), TestError> {
            let test = test_setup_with_isp_tables!()?;

            let router_repo = RouterRepository::new(&test.db);
            let err = router_repo
                .create(&RouterParams::new("R001", 42, Location::North))
                .await
                .unwrap_err();

            assert!(matches!(
                unique_violation(err, "router_id", "R001"),
                Error::DbErr(_)
            ));

            Ok(())
        }
    }
}
