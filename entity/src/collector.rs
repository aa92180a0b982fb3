//! Field agents who collect payments from clients.

use std::fmt;

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "collectors")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub assigned_town: String,
    pub active_clients: i32,
    pub last_collection_date: Option<Date>,
    /// 0-100 score rendered as a progress bar in the collector list
    #[sea_orm(column_type = "Decimal(Some((5, 2)))")]
    pub performance_score: Decimal,
    #[sea_orm(column_type = "Decimal(Some((9, 6)))", nullable)]
    pub latitude: Option<Decimal>,
    #[sea_orm(column_type = "Decimal(Some((9, 6)))", nullable)]
    pub longitude: Option<Decimal>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::payment_record::Entity")]
    PaymentRecord,
    #[sea_orm(has_many = "super::collector_performance::Entity")]
    CollectorPerformance,
}

impl Related<super::payment_record::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PaymentRecord.def()
    }
}

impl Related<super::collector_performance::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CollectorPerformance.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Whether the collector can be placed on the map view.
    pub fn has_coordinates(&self) -> bool {
        self.latitude.is_some() && self.longitude.is_some()
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
