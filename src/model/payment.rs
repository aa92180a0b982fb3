use chrono::NaiveDate;
use entity::payment_record::{PaymentMode, PaymentStatus};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{
    error::validation::ValidationError,
    model::{
        db::PaymentRecordModel,
        validate::{decimal_digits, max_length, min_value, Validate},
    },
};

/// Writable fields of a payment record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentParams {
    pub client_id: i32,
    pub amount: Decimal,
    pub mode: PaymentMode,
    pub date: NaiveDate,
    #[serde(default)]
    pub collector_id: Option<i32>,
    #[serde(default)]
    pub status: PaymentStatus,
    #[serde(default)]
    pub reference_number: Option<String>,
    #[serde(default)]
    pub notes: String,
}

impl PaymentParams {
    /// Creates params for a paid payment without collector or reference.
    pub fn new(client_id: i32, amount: Decimal, mode: PaymentMode, date: NaiveDate) -> Self {
        Self {
            client_id,
            amount,
            mode,
            date,
            collector_id: None,
            status: PaymentStatus::default(),
            reference_number: None,
            notes: String::new(),
        }
    }

    /// Reference number with surrounding whitespace removed, `None` when blank.
    ///
    /// Blank references are stored as NULL so they never collide on the
    /// unique index.
    pub fn reference_number(&self) -> Option<&str> {
        self.reference_number
            .as_deref()
            .map(str::trim)
            .filter(|reference| !reference.is_empty())
    }
}

impl From<&PaymentRecordModel> for PaymentParams {
    fn from(payment: &PaymentRecordModel) -> Self {
        Self {
            client_id: payment.client_id,
            amount: payment.amount,
            mode: payment.mode,
            date: payment.date,
            collector_id: payment.collector_id,
            status: payment.status,
            reference_number: payment.reference_number.clone(),
            notes: payment.notes.clone(),
        }
    }
}

impl Validate for PaymentParams {
    fn validate(&self) -> Result<(), ValidationError> {
        decimal_digits("amount", &self.amount, 10, 2)?;
        min_value("amount", self.amount, Decimal::new(1, 2))?;

        if let Some(reference) = self.reference_number() {
            max_length("reference_number", reference, 50)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use entity::payment_record::{PaymentMode, PaymentStatus};
    use rust_decimal::Decimal;
    use smart_isp_test_utils::prelude::factory;

    use super::PaymentParams;
    use crate::{error::validation::ValidationError, model::Validate};

    fn params(amount: Decimal) -> PaymentParams {
        PaymentParams::new(
            1,
            amount,
            PaymentMode::Cash,
            NaiveDate::from_ymd_opt(2025, 10, 5).unwrap(),
        )
    }

    #[test]
    fn defaults_to_paid() {
        let params = params(Decimal::new(1500, 0));

        assert_eq!(params.status, PaymentStatus::Paid);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn accepts_minimum_amount() {
        assert!(params(Decimal::new(1, 2)).validate().is_ok());
    }

    #[test]
    fn rejects_amount_below_one_cent() {
        assert_eq!(
            params(Decimal::ZERO).validate(),
            Err(ValidationError::BelowMinimum {
                field: "amount",
                min: "0.01".to_string()
            })
        );
        assert!(params(Decimal::new(-500, 0)).validate().is_err());
    }

    #[test]
    fn rejects_fractional_cents() {
        assert!(matches!(
            params(Decimal::new(10005, 3)).validate(),
            Err(ValidationError::InvalidDecimal { field: "amount", .. })
        ));
    }

    #[test]
    fn treats_blank_reference_as_missing() {
        let mut params = params(Decimal::new(1500, 0));

        params.reference_number = Some("   ".to_string());
        assert_eq!(params.reference_number(), None);

        params.reference_number = Some(" GC-2025-0001 ".to_string());
        assert_eq!(params.reference_number(), Some("GC-2025-0001"));
    }

    #[test]
    fn limits_reference_length() {
        let mut params = params(Decimal::new(1500, 0));
        params.reference_number = Some("R".repeat(51));

        assert_eq!(
            params.validate(),
            Err(ValidationError::TooLong {
                field: "reference_number",
                max: 50
            })
        );
    }

    #[test]
    fn copies_stored_payment_for_editing() {
        let payment = factory::mock_payment_model(3, Decimal::new(150000, 2));
        let params = PaymentParams::from(&payment);

        assert_eq!(params.client_id, 3);
        assert_eq!(params.amount, Decimal::new(150000, 2));
        assert_eq!(params.reference_number(), None);
        assert_eq!(params.validate(), Ok(()));
    }
}
