use chrono::NaiveDate;
use entity::client::{PaymentStatus, Plan, RouterStatus};
use serde::{Deserialize, Serialize};

use crate::{
    error::validation::ValidationError,
    model::{
        db::ClientModel,
        validate::{max_length, required, Validate},
    },
};

/// Writable fields of a client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientParams {
    pub name: String,
    pub town: String,
    pub plan: Plan,
    #[serde(default)]
    pub payment_status: PaymentStatus,
    #[serde(default)]
    pub router_status: RouterStatus,
    #[serde(default)]
    pub last_payment: Option<NaiveDate>,
}

impl ClientParams {
    /// Creates params for a new client with a pending payment and offline router.
    pub fn new(name: impl Into<String>, town: impl Into<String>, plan: Plan) -> Self {
        Self {
            name: name.into(),
            town: town.into(),
            plan,
            payment_status: PaymentStatus::default(),
            router_status: RouterStatus::default(),
            last_payment: None,
        }
    }
}

impl From<&ClientModel> for ClientParams {
    fn from(client: &ClientModel) -> Self {
        Self {
            name: client.name.clone(),
            town: client.town.clone(),
            plan: client.plan,
            payment_status: client.payment_status,
            router_status: client.router_status,
            last_payment: client.last_payment,
        }
    }
}

impl Validate for ClientParams {
    fn validate(&self) -> Result<(), ValidationError> {
        required("name", &self.name)?;
        max_length("name", &self.name, 255)?;
        required("town", &self.town)?;
        max_length("town", &self.town, 120)?;

        Ok(())
    }
}
