use chrono::NaiveDate;
use entity::{
    active_devices_trend::DayOfWeek, client::Plan, payment_record::PaymentMode, router::Location,
};
use rust_decimal::Decimal;
use smart_isp::{
    error::{validation::ValidationError, Error},
    model::{
        client::ClientParams,
        collector::CollectorParams,
        dashboard::{ActiveDevicesTrendParams, DashboardMetricsParams},
        payment::PaymentParams,
        report::{AccountStatusParams, CollectorPerformanceParams},
        router::RouterParams,
    },
    service::{
        client::ClientService, collector::CollectorService, dashboard::DashboardService,
        payment::PaymentService, report::ReportService, router::RouterService,
    },
    startup::table_summary,
};

use crate::setup::migrated_database;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Expect a client's routers and payments to be removed with the client
#[tokio::test]
async fn deleting_client_removes_dependents() -> Result<(), Error> {
    let db = migrated_database().await?;

    let client = ClientService::new(&db)
        .create(&ClientParams::new("Pedro Reyes", "Poblacion", Plan::Fiber50))
        .await?;
    let router = RouterService::new(&db)
        .create(&RouterParams::new("R001", client.id, Location::Central))
        .await?;
    let payment = PaymentService::new(&db)
        .create(&PaymentParams::new(
            client.id,
            Decimal::new(150000, 2),
            PaymentMode::Gcash,
            date(2025, 10, 1),
        ))
        .await?;

    assert_eq!(router.label(&client), "R001 - Pedro Reyes");
    assert_eq!(payment.amount_display(), "$1,500.00");

    ClientService::new(&db).delete(client.id).await?;

    assert!(RouterService::new(&db).get(router.id).await?.is_none());
    assert!(PaymentService::new(&db).get(payment.id).await?.is_none());
    assert!(table_summary(&db).await?.iter().all(|(_, rows)| *rows == 0));

    Ok(())
}

/// Expect payments to survive their collector's deletion without a collector
#[tokio::test]
async fn deleting_collector_keeps_payments() -> Result<(), Error> {
    let db = migrated_database().await?;

    let client = ClientService::new(&db)
        .create(&ClientParams::new("Pedro Reyes", "Poblacion", Plan::Fiber30))
        .await?;
    let collector = CollectorService::new(&db)
        .create(&CollectorParams::new("Juan Dela Cruz", "Poblacion"))
        .await?;

    let mut params = PaymentParams::new(
        client.id,
        Decimal::new(99900, 2),
        PaymentMode::Cash,
        date(2025, 9, 15),
    );
    params.collector_id = Some(collector.id);
    let payment = PaymentService::new(&db).create(&params).await?;

    ReportService::new(&db)
        .create_collector_performance(&CollectorPerformanceParams::new(
            collector.id,
            date(2025, 9, 1),
            date(2025, 9, 30),
        ))
        .await?;

    CollectorService::new(&db).delete(collector.id).await?;

    let payment = PaymentService::new(&db)
        .get(payment.id)
        .await?
        .expect("payment should remain");
    assert_eq!(payment.collector_id, None);
    assert!(ReportService::new(&db)
        .list_collector_performance(None)
        .await?
        .is_empty());

    Ok(())
}

/// Expect reference numbers to stay unique across the migrated schema
#[tokio::test]
async fn rejects_reused_reference_number() -> Result<(), Error> {
    let db = migrated_database().await?;

    let client = ClientService::new(&db)
        .create(&ClientParams::new("Ana Cruz", "San Isidro", Plan::Fiber100))
        .await?;

    let mut params = PaymentParams::new(
        client.id,
        Decimal::new(250000, 2),
        PaymentMode::BankTransfer,
        date(2025, 10, 5),
    );
    params.reference_number = Some("BT-7781".to_string());

    let payment_service = PaymentService::new(&db);
    payment_service.create(&params).await?;
    let result = payment_service.create(&params).await;

    assert!(matches!(
        result,
        Err(Error::ValidationError(ValidationError::Duplicate { .. }))
    ));

    Ok(())
}

/// Expect reports and dashboard series to be read back from the migrated schema
#[tokio::test]
async fn records_reports_and_dashboard_series() -> Result<(), Error> {
    let db = migrated_database().await?;
    let week = date(2025, 10, 13);

    let report = ReportService::new(&db)
        .create_account_status(&AccountStatusParams {
            report_date: date(2025, 10, 15),
            total_accounts: 200,
            active_accounts: 150,
            overdue_accounts: 30,
            disconnected_accounts: 20,
        })
        .await?;
    assert_eq!(report.active_percentage(), 75.0);

    let dashboard_service = DashboardService::new(&db);
    for (day, count) in [(DayOfWeek::Wednesday, 130), (DayOfWeek::Monday, 120)] {
        dashboard_service
            .record_device_count(&ActiveDevicesTrendParams {
                week_start_date: week,
                day_of_week: day,
                active_devices_count: count,
            })
            .await?;
    }

    let days: Vec<DayOfWeek> = dashboard_service
        .device_trend_for_week(week)
        .await?
        .into_iter()
        .map(|trend| trend.day_of_week)
        .collect();
    assert_eq!(days, vec![DayOfWeek::Monday, DayOfWeek::Wednesday]);

    let metrics = dashboard_service
        .record_metrics(&DashboardMetricsParams {
            date: date(2025, 10, 15),
            active_users: 150,
            overdue_accounts: 30,
            disconnected_accounts: 20,
            collector_performance: Decimal::new(8750, 2),
        })
        .await?;
    assert_eq!(metrics.collector_performance_display(), "87.50%");

    Ok(())
}
