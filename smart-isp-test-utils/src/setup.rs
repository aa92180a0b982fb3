use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

/// CREATE TABLE statement of an entity for SQLite
pub fn table<E: EntityTrait>(entity: E) -> TableCreateStatement {
    let schema = Schema::new(sea_orm::DbBackend::Sqlite);
    schema.create_table_from_entity(entity)
}

/// CREATE TABLE statements of every Smart ISP table, referenced tables first
pub fn isp_tables() -> Vec<TableCreateStatement> {
    vec![
        table(entity::prelude::Client),
        table(entity::prelude::Collector),
        table(entity::prelude::Router),
        table(entity::prelude::PaymentRecord),
        table(entity::prelude::MonthlyCollection),
        table(entity::prelude::AccountStatusReport),
        table(entity::prelude::CollectorPerformance),
        table(entity::prelude::DashboardMetrics),
        table(entity::prelude::ActiveDevicesTrend),
        table(entity::prelude::WeeklyCollection),
        table(entity::prelude::DashboardSnapshot),
    ]
}

#[macro_export]
macro_rules! test_setup_with_tables {
    // Pattern 1: No entities provided
    () => {{
        $crate::TestContext::new().await
    }};

    // Pattern 2: Entities provided
    ($($entity:expr),+ $(,)?) => {{
        async {
            let test = $crate::TestContext::new().await?;

            let stmts = vec![
                $($crate::setup::table($entity),)+
            ];
            test.with_tables(stmts).await?;

            Ok::<_, $crate::error::TestError>(test)
        }.await
    }};
}

#[macro_export]
macro_rules! test_setup_with_isp_tables {
    // Pattern 1: No entities provided
    () => {{
        async {
            let test = $crate::TestContext::new().await?;
            test.with_tables($crate::setup::isp_tables()).await?;

            Ok::<_, $crate::error::TestError>(test)
        }.await
    }};

    // Pattern 2: Entities provided
    ($($entity:expr),+ $(,)?) => {{
        async {
            let test = $crate::TestContext::new().await?;

            let mut stmts = $crate::setup::isp_tables();
            stmts.extend(vec![
                $($crate::setup::table($entity),)+
            ]);
            test.with_tables(stmts).await?;

            Ok::<_, $crate::error::TestError>(test)
        }.await
    }};
}

#[cfg(test)]
mod tests {
    use sea_orm::{EntityTrait, PaginatorTrait};

    use crate::error::TestError;

    /// Expect every table to exist and be empty
    #[tokio::test]
    async fn creates_isp_tables() -> Result<(), TestError> {
        let test = test_setup_with_isp_tables!()?;

        assert_eq!(entity::prelude::Client::find().count(&test.db).await?, 0);
        assert_eq!(
            entity::prelude::DashboardSnapshot::find()
                .count(&test.db)
                .await?,
            0
        );

        Ok(())
    }

    /// Expect only the listed tables to be created
    #[tokio::test]
    async fn creates_listed_tables() -> Result<(), TestError> {
        let test = test_setup_with_tables!(entity::prelude::Client)?;

        assert!(entity::prelude::Client::find().count(&test.db).await.is_ok());
        assert!(entity::prelude::Router::find().count(&test.db).await.is_err());

        Ok(())
    }
}
