//! In-memory models for tests that do not need a database.
//!
//! Ids are fixed to `1` and timestamps are the current time.

use chrono::Utc;
use entity::{
    client::{PaymentStatus as ClientPaymentStatus, Plan, RouterStatus},
    payment_record::{PaymentMode, PaymentStatus},
    router::{Location, Status},
};
use rust_decimal::Decimal;

pub fn mock_client_model(name: &str, town: &str) -> entity::client::Model {
    let now = Utc::now().naive_utc();

    entity::client::Model {
        id: 1,
        name: name.to_string(),
        town: town.to_string(),
        plan: Plan::Fiber30,
        payment_status: ClientPaymentStatus::Pending,
        router_status: RouterStatus::Offline,
        last_payment: None,
        created_at: now,
        updated_at: now,
    }
}

pub fn mock_collector_model(name: &str, assigned_town: &str) -> entity::collector::Model {
    let now = Utc::now().naive_utc();

    entity::collector::Model {
        id: 1,
        name: name.to_string(),
        assigned_town: assigned_town.to_string(),
        active_clients: 0,
        last_collection_date: None,
        performance_score: Decimal::ZERO,
        latitude: None,
        longitude: None,
        created_at: now,
        updated_at: now,
    }
}

pub fn mock_router_model(router_id: &str, client_id: i32) -> entity::router::Model {
    let now = Utc::now().naive_utc();

    entity::router::Model {
        id: 1,
        router_id: router_id.to_string(),
        client_id,
        status: Status::Offline,
        uptime: None,
        signal_strength: None,
        location: Location::North,
        created_at: now,
        updated_at: now,
        last_seen: None,
    }
}

pub fn mock_payment_model(client_id: i32, amount: Decimal) -> entity::payment_record::Model {
    let now = Utc::now().naive_utc();

    entity::payment_record::Model {
        id: 1,
        client_id,
        amount,
        mode: PaymentMode::Cash,
        date: now.date(),
        collector_id: None,
        status: PaymentStatus::Paid,
        reference_number: None,
        notes: String::new(),
        created_at: now,
        updated_at: now,
    }
}
