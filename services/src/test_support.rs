//! Shared fixtures for the service tests.

use crate::hours;
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use db::models::{agent, attendance, client, site};
use db::models::attendance::AttendanceStatus;
use db::models::client::ContractStatus;
use db::models::site::SiteStatus;
use db::models::agent::EmploymentStatus;
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};

pub fn ts(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
}

pub fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub async fn seed_agent(
    db: &DatabaseConnection,
    employee_code: &str,
    hourly_rate: Decimal,
) -> agent::Model {
    let now = Utc::now();
    agent::ActiveModel {
        employee_code: Set(employee_code.to_string()),
        first_name: Set("Jean".into()),
        last_name: Set("Baptiste".into()),
        national_id: Set(None),
        email: Set(None),
        phone: Set(None),
        hourly_rate: Set(hourly_rate),
        employment_status: Set(EmploymentStatus::Active),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("Failed to seed agent")
}

pub async fn seed_client(db: &DatabaseConnection) -> client::Model {
    let now = Utc::now();
    client::ActiveModel {
        company_name: Set("Acme Logistics".into()),
        contact_name: Set("Marie Joseph".into()),
        contact_email: Set("marie@acme.test".into()),
        contact_phone: Set(None),
        address: Set(None),
        city: Set(None),
        contract_status: Set(ContractStatus::Active),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("Failed to seed client")
}

pub async fn seed_site(db: &DatabaseConnection) -> site::Model {
    let client = seed_client(db).await;
    seed_site_for(db, client.id).await
}

pub async fn seed_site_for(db: &DatabaseConnection, client_id: i64) -> site::Model {
    let now = Utc::now();
    site::ActiveModel {
        client_id: Set(client_id),
        site_name: Set("Main Warehouse".into()),
        site_code: Set(None),
        address: Set(None),
        required_agents: Set(1),
        site_status: Set(SiteStatus::Active),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("Failed to seed site")
}

/// Inserts an attendance with hours and status derived the same way the
/// production path derives them.
pub async fn seed_attendance(
    db: &DatabaseConnection,
    agent_id: i64,
    site_id: i64,
    clock_in: Option<DateTime<Utc>>,
    clock_out: Option<DateTime<Utc>>,
) -> attendance::Model {
    let (total_hours, status) = hours::derive(clock_in, clock_out).expect("valid clock pair");
    let date = clock_in
        .map(|t| t.date_naive())
        .unwrap_or_else(|| day(2026, 1, 5));
    seed_attendance_with(db, agent_id, site_id, date, clock_in, clock_out, total_hours, status)
        .await
}

#[allow(clippy::too_many_arguments)]
pub async fn seed_attendance_with(
    db: &DatabaseConnection,
    agent_id: i64,
    site_id: i64,
    attendance_date: NaiveDate,
    clock_in: Option<DateTime<Utc>>,
    clock_out: Option<DateTime<Utc>>,
    total_hours: Decimal,
    status: AttendanceStatus,
) -> attendance::Model {
    let now = Utc::now();
    attendance::ActiveModel {
        agent_id: Set(agent_id),
        site_id: Set(site_id),
        attendance_date: Set(attendance_date),
        clock_in_time: Set(clock_in),
        clock_out_time: Set(clock_out),
        total_hours: Set(total_hours),
        attendance_status: Set(status),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("Failed to seed attendance")
}
