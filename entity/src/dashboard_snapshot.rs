//! Point-in-time copies of the whole dashboard for historical comparison.

use std::fmt;

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "dashboard_snapshots")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub snapshot_date: DateTime,
    pub active_users: i32,
    pub overdue_accounts: i32,
    pub disconnected_accounts: i32,
    #[sea_orm(column_type = "Decimal(Some((5, 2)))")]
    pub collector_performance: Decimal,
    /// Chart series of the weekly active devices trend
    pub active_devices_trend: Json,
    /// Chart series of the weekly collections
    pub weekly_collections: Json,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Dashboard Snapshot - {}",
            self.snapshot_date.format("%Y-%m-%d %H:%M")
        )
    }
}
