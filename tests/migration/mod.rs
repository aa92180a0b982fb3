use migration::{Migrator, MigratorTrait};
use smart_isp::{error::Error, startup::table_summary};

use crate::setup::migrated_database;

/// Expect every migration to be applied and every table to start empty
#[tokio::test]
async fn applies_all_migrations() -> Result<(), Error> {
    let db = migrated_database().await?;

    assert!(Migrator::get_pending_migrations(&db).await?.is_empty());

    let summary = table_summary(&db).await?;
    assert_eq!(summary.len(), 11);
    assert!(summary.iter().all(|(_, rows)| *rows == 0));

    Ok(())
}

/// Expect running the migrator a second time to leave the schema untouched
#[tokio::test]
async fn reapplying_migrations_is_a_no_op() -> Result<(), Error> {
    let db = migrated_database().await?;

    Migrator::up(&db, None).await?;

    assert_eq!(table_summary(&db).await?.len(), 11);

    Ok(())
}

/// Expect rolling back every migration to drop the tables
#[tokio::test]
async fn rolls_back_all_migrations() -> Result<(), Error> {
    let db = migrated_database().await?;

    Migrator::down(&db, None).await?;

    assert!(table_summary(&db).await.is_err());
    assert_eq!(Migrator::get_pending_migrations(&db).await?.len(), 11);

    Ok(())
}
