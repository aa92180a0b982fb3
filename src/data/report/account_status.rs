use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryOrder,
};

use crate::model::{db::AccountStatusReportModel, report::AccountStatusParams};

pub struct AccountStatusRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AccountStatusRepository<'a, C> {
    /// Creates a new instance of [`AccountStatusRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Stores a report, the account totals must already be validated
    pub async fn create(
        &self,
        params: &AccountStatusParams,
    ) -> Result<AccountStatusReportModel, DbErr> {
        let now = Utc::now().naive_utc();
        let report = entity::account_status_report::ActiveModel {
            report_date: ActiveValue::Set(params.report_date),
            total_accounts: ActiveValue::Set(params.total_accounts),
            active_accounts: ActiveValue::Set(params.active_accounts),
            overdue_accounts: ActiveValue::Set(params.overdue_accounts),
            disconnected_accounts: ActiveValue::Set(params.disconnected_accounts),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        report.insert(self.db).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<AccountStatusReportModel>, DbErr> {
        entity::prelude::AccountStatusReport::find_by_id(id)
            .one(self.db)
            .await
    }

    /// Gets the report with the most recent report date
    pub async fn get_latest(&self) -> Result<Option<AccountStatusReportModel>, DbErr> {
        entity::prelude::AccountStatusReport::find()
            .order_by_desc(entity::account_status_report::Column::ReportDate)
            .order_by_desc(entity::account_status_report::Column::Id)
            .one(self.db)
            .await
    }

    /// Lists all reports, most recent first
    pub async fn list(&self) -> Result<Vec<AccountStatusReportModel>, DbErr> {
        entity::prelude::AccountStatusReport::find()
            .order_by_desc(entity::account_status_report::Column::ReportDate)
            .order_by_desc(entity::account_status_report::Column::Id)
            .all(self.db)
            .await
    }

    /// Returns `Ok(None)` if no report exists with the provided ID.
    pub async fn update(
        &self,
        id: i32,
        params: &AccountStatusParams,
    ) -> Result<Option<AccountStatusReportModel>, DbErr> {
        let report = match entity::prelude::AccountStatusReport::find_by_id(id)
            .one(self.db)
            .await?
        {
            Some(report) => report,
            None => return Ok(None),
        };

        let mut report_am = report.into_active_model();
        report_am.report_date = ActiveValue::Set(params.report_date);
        report_am.total_accounts = ActiveValue::Set(params.total_accounts);
        report_am.active_accounts = ActiveValue::Set(params.active_accounts);
        report_am.overdue_accounts = ActiveValue::Set(params.overdue_accounts);
        report_am.disconnected_accounts = ActiveValue::Set(params.disconnected_accounts);
        report_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let report = report_am.update(self.db).await?;

        Ok(Some(report))
    }

    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::AccountStatusReport::delete_by_id(id)
            .exec(self.db)
            .await
    }
}
