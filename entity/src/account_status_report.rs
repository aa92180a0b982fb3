//! Account status breakdown reports.

use std::fmt;

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::format;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "account_status_reports")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub report_date: Date,
    pub total_accounts: i32,
    pub active_accounts: i32,
    pub overdue_accounts: i32,
    pub disconnected_accounts: i32,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn active_percentage(&self) -> f64 {
        format::percentage(self.active_accounts, self.total_accounts)
    }

    pub fn overdue_percentage(&self) -> f64 {
        format::percentage(self.overdue_accounts, self.total_accounts)
    }

    pub fn disconnected_percentage(&self) -> f64 {
        format::percentage(self.disconnected_accounts, self.total_accounts)
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Account Status Report - {}", self.report_date)
    }
}
