//! Daily dashboard KPI values.

use std::fmt;

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "dashboard_metrics")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub date: Date,
    pub active_users: i32,
    pub overdue_accounts: i32,
    pub disconnected_accounts: i32,
    /// Collector performance percentage, 0-100
    #[sea_orm(column_type = "Decimal(Some((5, 2)))")]
    pub collector_performance: Decimal,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn collector_performance_display(&self) -> String {
        format!("{:.2}%", self.collector_performance)
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Dashboard Metrics - {}", self.date)
    }
}
