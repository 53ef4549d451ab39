//! Shared setup for the integration tests: environment, app construction
//! and small JSON request helpers.

use api::routes::routes;
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use sea_orm::DatabaseConnection;
use serde_json::Value;
use std::sync::Once;
use tower::ServiceExt;

static INIT: Once = Once::new();

fn init_environment() {
    INIT.call_once(|| {
        // Tests never read a .env; pin the auth configuration here.
        unsafe {
            std::env::set_var("JWT_SECRET", "integration-test-secret");
            std::env::set_var("JWT_DURATION_MINUTES", "60");
        }
        common::config::Config::init();
    });
}

/// Builds the full application router over a fresh in-memory database.
pub async fn make_test_app() -> (Router, DatabaseConnection) {
    init_environment();
    let db = db::test_utils::setup_test_db().await;
    let app = Router::new().nest("/api", routes(db.clone()));
    (app, db)
}

/// Reads a decimal field out of a response body.
///
/// Decimals are serialized as strings but lose trailing zeros on the way
/// through sqlite, so assertions compare parsed values instead of text.
pub fn dec_field(json: &Value, pointer: &str) -> rust_decimal::Decimal {
    json.pointer(pointer)
        .and_then(|v| v.as_str())
        .unwrap_or_else(|| panic!("no decimal at {pointer}: {json}"))
        .parse()
        .unwrap()
}

pub fn admin_token() -> String {
    api::auth::generate_jwt(1, true).0
}

pub fn user_token() -> String {
    api::auth::generate_jwt(2, false).0
}

/// Sends a request with an optional bearer token and JSON body, returning
/// the status and the parsed envelope.
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

// Seed helpers go through the public API so the fixtures exercise the same
// code paths the assertions do.

pub async fn seed_agent(app: &Router, token: &str, employee_code: &str, rate: &str) -> i64 {
    let (status, json) = send(
        app,
        "POST",
        "/api/agents",
        Some(token),
        Some(serde_json::json!({
            "employee_code": employee_code,
            "first_name": "Jean",
            "last_name": "Baptiste",
            "hourly_rate": rate,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "seed agent failed: {json}");
    json["data"]["id"].as_i64().unwrap()
}

pub async fn seed_client(app: &Router, token: &str) -> i64 {
    let (status, json) = send(
        app,
        "POST",
        "/api/clients",
        Some(token),
        Some(serde_json::json!({
            "company_name": "Acme Logistics",
            "contact_name": "Marie Joseph",
            "contact_email": "marie@acme.test",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "seed client failed: {json}");
    json["data"]["id"].as_i64().unwrap()
}

pub async fn seed_site(app: &Router, token: &str) -> i64 {
    let client_id = seed_client(app, token).await;
    let (status, json) = send(
        app,
        "POST",
        "/api/sites",
        Some(token),
        Some(serde_json::json!({
            "client_id": client_id,
            "site_name": "Main Warehouse",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "seed site failed: {json}");
    json["data"]["id"].as_i64().unwrap()
}

pub async fn seed_attendance(
    app: &Router,
    token: &str,
    agent_id: i64,
    site_id: i64,
    body: Value,
) -> i64 {
    let mut body = body;
    body["agent_id"] = serde_json::json!(agent_id);
    body["site_id"] = serde_json::json!(site_id);
    let (status, json) = send(app, "POST", "/api/attendances", Some(token), Some(body)).await;
    assert_eq!(status, StatusCode::CREATED, "seed attendance failed: {json}");
    json["data"]["id"].as_i64().unwrap()
}
