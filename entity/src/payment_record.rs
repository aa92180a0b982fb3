//! Payments made by clients, optionally handled by a collector.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::format;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
#[serde(rename_all = "snake_case")]
pub enum PaymentMode {
    #[sea_orm(string_value = "cash")]
    Cash,
    #[sea_orm(string_value = "gcash")]
    Gcash,
    #[sea_orm(string_value = "bank_transfer")]
    BankTransfer,
    #[sea_orm(string_value = "check")]
    Check,
    #[sea_orm(string_value = "credit_card")]
    CreditCard,
}

impl PaymentMode {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Cash => "Cash",
            Self::Gcash => "GCash",
            Self::BankTransfer => "Bank Transfer",
            Self::Check => "Check",
            Self::CreditCard => "Credit Card",
        }
    }
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(10))")]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    #[default]
    #[sea_orm(string_value = "paid")]
    Paid,
    #[sea_orm(string_value = "pending")]
    Pending,
    #[sea_orm(string_value = "failed")]
    Failed,
    #[sea_orm(string_value = "refunded")]
    Refunded,
}

impl PaymentStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Paid => "Paid",
            Self::Pending => "Pending",
            Self::Failed => "Failed",
            Self::Refunded => "Refunded",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "payment_records")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub client_id: i32,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub amount: Decimal,
    pub mode: PaymentMode,
    pub date: Date,
    pub collector_id: Option<i32>,
    pub status: PaymentStatus,
    /// Transaction or receipt identifier supplied by the payment channel
    #[sea_orm(unique)]
    pub reference_number: Option<String>,
    #[sea_orm(column_type = "Text")]
    pub notes: String,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::client::Entity",
        from = "Column::ClientId",
        to = "super::client::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Client,
    #[sea_orm(
        belongs_to = "super::collector::Entity",
        from = "Column::CollectorId",
        to = "super::collector::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    Collector,
}

impl Related<super::client::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Client.def()
    }
}

impl Related<super::collector::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Collector.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn amount_display(&self) -> String {
        format::currency(&self.amount)
    }

    /// Log line label of the form `Client Name - $1500.00 (2025-10-01)`.
    pub fn label(&self, client: &super::client::Model) -> String {
        format!("{} - ${:.2} ({})", client.name, self.amount, self.date)
    }
}
