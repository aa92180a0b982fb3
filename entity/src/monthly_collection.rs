//! Monthly collection totals for the reports page.

use std::fmt;

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "monthly_collections")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Month of the collection, 1-12
    pub month: i16,
    pub year: i16,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub total_amount: Decimal,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Abbreviated month name, empty when `month` is outside 1-12.
    pub fn month_name(&self) -> &'static str {
        usize::try_from(self.month)
            .ok()
            .and_then(|month| month.checked_sub(1))
            .and_then(|index| MONTH_NAMES.get(index))
            .copied()
            .unwrap_or("")
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Collection for {}/{}: ${:.2}",
            self.month, self.year, self.total_amount
        )
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::prelude::{Date, Decimal};

    use super::Model;

    fn collection(month: i16) -> Model {
        let now = Date::from_ymd_opt(2025, 1, 31)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();

        Model {
            id: 1,
            month,
            year: 2025,
            total_amount: Decimal::new(4500000, 2),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn names_months() {
        assert_eq!(collection(1).month_name(), "Jan");
        assert_eq!(collection(12).month_name(), "Dec");
    }

    #[test]
    fn out_of_range_month_has_no_name() {
        assert_eq!(collection(0).month_name(), "");
        assert_eq!(collection(13).month_name(), "");
    }

    #[test]
    fn formats_summary_line() {
        assert_eq!(collection(3).to_string(), "Collection for 3/2025: $45000.00");
    }
}
