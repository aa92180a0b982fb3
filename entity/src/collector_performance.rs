//! Per-period performance records of collectors.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::format;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "collector_performance")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub collector_id: i32,
    pub period_start: Date,
    pub period_end: Date,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub collected_amount: Decimal,
    pub clients_served: i32,
    /// Average rating between 0 and 5
    #[sea_orm(column_type = "Decimal(Some((3, 1)))")]
    pub average_rating: Decimal,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::collector::Entity",
        from = "Column::CollectorId",
        to = "super::collector::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Collector,
}

impl Related<super::collector::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Collector.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn collected_amount_display(&self) -> String {
        format::currency(&self.collected_amount)
    }

    pub fn period_display(&self) -> String {
        format!("{} to {}", self.period_start, self.period_end)
    }

    pub fn label(&self, collector: &super::collector::Model) -> String {
        format!("{} - {}", collector.name, self.period_display())
    }
}
