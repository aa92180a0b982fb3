//! Subscriber accounts.

use std::fmt;

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Internet plan a client is subscribed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
pub enum Plan {
    #[serde(rename = "fiber_30")]
    #[sea_orm(string_value = "fiber_30")]
    Fiber30,
    #[serde(rename = "fiber_50")]
    #[sea_orm(string_value = "fiber_50")]
    Fiber50,
    #[serde(rename = "fiber_100")]
    #[sea_orm(string_value = "fiber_100")]
    Fiber100,
}

impl Plan {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Fiber30 => "Fiber 30Mbps",
            Self::Fiber50 => "Fiber 50Mbps",
            Self::Fiber100 => "Fiber 100Mbps",
        }
    }
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(10))")]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    #[sea_orm(string_value = "paid")]
    Paid,
    #[default]
    #[sea_orm(string_value = "pending")]
    Pending,
}

impl PaymentStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Paid => "Paid",
            Self::Pending => "Pending",
        }
    }
}

/// Connectivity of the client's router as last reported.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(10))")]
#[serde(rename_all = "snake_case")]
pub enum RouterStatus {
    #[sea_orm(string_value = "online")]
    Online,
    #[default]
    #[sea_orm(string_value = "offline")]
    Offline,
}

impl RouterStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Online => "Online",
            Self::Offline => "Offline",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "clients")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub town: String,
    pub plan: Plan,
    pub payment_status: PaymentStatus,
    pub router_status: RouterStatus,
    pub last_payment: Option<Date>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::router::Entity")]
    Router,
    #[sea_orm(has_many = "super::payment_record::Entity")]
    PaymentRecord,
}

impl Related<super::router::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Router.def()
    }
}

impl Related<super::payment_record::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PaymentRecord.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
