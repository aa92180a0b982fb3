//! Weekly collection totals for the dashboard bar chart.

use std::fmt;

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::format;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "weekly_collections")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// ISO week number, 1-53
    pub week_number: i16,
    pub year: i16,
    pub week_start_date: Date,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub total_collection: Decimal,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn week_display(&self) -> String {
        format!("Week {}", self.week_number)
    }

    pub fn total_collection_display(&self) -> String {
        format::currency(&self.total_collection)
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Week {} ({}): ${:.2}",
            self.week_number, self.year, self.total_collection
        )
    }
}
