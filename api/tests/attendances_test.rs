mod helpers;

use axum::http::StatusCode;
use helpers::{admin_token, dec_field, make_test_app, seed_agent, seed_attendance, seed_site, send};
use rust_decimal_macros::dec;
use serde_json::json;
use serial_test::serial;

#[tokio::test]
#[serial]
async fn full_clock_pair_derives_present_hours() {
    let (app, _db) = make_test_app().await;
    let token = admin_token();
    let agent_id = seed_agent(&app, &token, "EMP001", "10.00").await;
    let site_id = seed_site(&app, &token).await;

    let (status, json) = send(
        &app,
        "POST",
        "/api/attendances",
        Some(&token),
        Some(json!({
            "agent_id": agent_id,
            "site_id": site_id,
            "attendance_date": "2026-01-05",
            "clock_in_time": "2026-01-05T08:00:00Z",
            "clock_out_time": "2026-01-05T17:00:00Z",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(dec_field(&json, "/data/total_hours"), dec!(9));
    assert_eq!(json["data"]["attendance_status"], "present");
}

#[tokio::test]
#[serial]
async fn missing_clock_out_is_missing_with_zero_hours() {
    let (app, _db) = make_test_app().await;
    let token = admin_token();
    let agent_id = seed_agent(&app, &token, "EMP001", "10.00").await;
    let site_id = seed_site(&app, &token).await;

    let (status, json) = send(
        &app,
        "POST",
        "/api/attendances",
        Some(&token),
        Some(json!({
            "agent_id": agent_id,
            "site_id": site_id,
            "attendance_date": "2026-01-05",
            "clock_in_time": "2026-01-05T08:00:00Z",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(dec_field(&json, "/data/total_hours"), dec!(0));
    assert_eq!(json["data"]["attendance_status"], "missing");
}

#[tokio::test]
#[serial]
async fn invalid_clock_pair_is_rejected() {
    let (app, _db) = make_test_app().await;
    let token = admin_token();
    let agent_id = seed_agent(&app, &token, "EMP001", "10.00").await;
    let site_id = seed_site(&app, &token).await;

    // clock-out before clock-in
    let (status, json) = send(
        &app,
        "POST",
        "/api/attendances",
        Some(&token),
        Some(json!({
            "agent_id": agent_id,
            "site_id": site_id,
            "attendance_date": "2026-01-05",
            "clock_in_time": "2026-01-05T17:00:00Z",
            "clock_out_time": "2026-01-05T08:00:00Z",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["success"], false);

    // clock-out two days later
    let (status, _) = send(
        &app,
        "POST",
        "/api/attendances",
        Some(&token),
        Some(json!({
            "agent_id": agent_id,
            "site_id": site_id,
            "attendance_date": "2026-01-05",
            "clock_in_time": "2026-01-05T22:00:00Z",
            "clock_out_time": "2026-01-07T06:00:00Z",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[serial]
async fn overnight_shift_is_allowed() {
    let (app, _db) = make_test_app().await;
    let token = admin_token();
    let agent_id = seed_agent(&app, &token, "EMP001", "10.00").await;
    let site_id = seed_site(&app, &token).await;

    let (status, json) = send(
        &app,
        "POST",
        "/api/attendances",
        Some(&token),
        Some(json!({
            "agent_id": agent_id,
            "site_id": site_id,
            "attendance_date": "2026-01-05",
            "clock_in_time": "2026-01-05T22:00:00Z",
            "clock_out_time": "2026-01-06T06:00:00Z",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(dec_field(&json, "/data/total_hours"), dec!(8));
}

#[tokio::test]
#[serial]
async fn explicit_status_is_limited_to_absent() {
    let (app, _db) = make_test_app().await;
    let token = admin_token();
    let agent_id = seed_agent(&app, &token, "EMP001", "10.00").await;
    let site_id = seed_site(&app, &token).await;

    let (status, json) = send(
        &app,
        "POST",
        "/api/attendances",
        Some(&token),
        Some(json!({
            "agent_id": agent_id,
            "site_id": site_id,
            "attendance_date": "2026-01-05",
            "attendance_status": "absent",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["data"]["attendance_status"], "absent");

    // absent cannot carry clock times
    let (status, _) = send(
        &app,
        "POST",
        "/api/attendances",
        Some(&token),
        Some(json!({
            "agent_id": agent_id,
            "site_id": site_id,
            "attendance_date": "2026-01-06",
            "attendance_status": "absent",
            "clock_in_time": "2026-01-06T08:00:00Z",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // corrected is reserved for the correction workflow
    let (status, _) = send(
        &app,
        "POST",
        "/api/attendances",
        Some(&token),
        Some(json!({
            "agent_id": agent_id,
            "site_id": site_id,
            "attendance_date": "2026-01-07",
            "attendance_status": "corrected",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[serial]
async fn unknown_agent_or_site_is_not_found() {
    let (app, _db) = make_test_app().await;
    let token = admin_token();
    let agent_id = seed_agent(&app, &token, "EMP001", "10.00").await;

    let (status, _) = send(
        &app,
        "POST",
        "/api/attendances",
        Some(&token),
        Some(json!({
            "agent_id": 9999,
            "site_id": 1,
            "attendance_date": "2026-01-05",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(
        &app,
        "POST",
        "/api/attendances",
        Some(&token),
        Some(json!({
            "agent_id": agent_id,
            "site_id": 9999,
            "attendance_date": "2026-01-05",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
#[serial]
async fn list_filters_by_agent_status_and_date_window() {
    let (app, _db) = make_test_app().await;
    let token = admin_token();
    let agent_a = seed_agent(&app, &token, "EMP001", "10.00").await;
    let agent_b = seed_agent(&app, &token, "EMP002", "10.00").await;
    let site_id = seed_site(&app, &token).await;

    seed_attendance(
        &app,
        &token,
        agent_a,
        site_id,
        json!({
            "attendance_date": "2026-01-05",
            "clock_in_time": "2026-01-05T08:00:00Z",
            "clock_out_time": "2026-01-05T16:00:00Z",
        }),
    )
    .await;
    seed_attendance(
        &app,
        &token,
        agent_a,
        site_id,
        json!({ "attendance_date": "2026-01-20" }),
    )
    .await;
    seed_attendance(
        &app,
        &token,
        agent_b,
        site_id,
        json!({
            "attendance_date": "2026-01-05",
            "clock_in_time": "2026-01-05T08:00:00Z",
            "clock_out_time": "2026-01-05T16:00:00Z",
        }),
    )
    .await;

    let (status, json) = send(
        &app,
        "GET",
        &format!("/api/attendances?agent_id={agent_a}&status=present"),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let rows = json["data"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["agent_id"].as_i64().unwrap(), agent_a);

    let (status, json) = send(
        &app,
        "GET",
        "/api/attendances?start_date=2026-01-10&end_date=2026-01-31",
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let rows = json["data"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["attendance_status"], "missing");
}

#[tokio::test]
#[serial]
async fn edit_replaces_the_clock_pair_and_rederives() {
    let (app, _db) = make_test_app().await;
    let token = admin_token();
    let agent_id = seed_agent(&app, &token, "EMP001", "10.00").await;
    let site_id = seed_site(&app, &token).await;
    let id = seed_attendance(
        &app,
        &token,
        agent_id,
        site_id,
        json!({
            "attendance_date": "2026-01-05",
            "clock_in_time": "2026-01-05T08:00:00Z",
        }),
    )
    .await;

    let (status, json) = send(
        &app,
        "PUT",
        &format!("/api/attendances/{id}"),
        Some(&token),
        Some(json!({
            "clock_in_time": "2026-01-05T08:00:00Z",
            "clock_out_time": "2026-01-05T15:50:00Z",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(dec_field(&json, "/data/total_hours"), dec!(7.83));
    assert_eq!(json["data"]["attendance_status"], "present");

    // omitting both clock fields clears them
    let (status, json) = send(
        &app,
        "PUT",
        &format!("/api/attendances/{id}"),
        Some(&token),
        Some(json!({})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(dec_field(&json, "/data/total_hours"), dec!(0));
    assert_eq!(json["data"]["attendance_status"], "missing");
}

#[tokio::test]
#[serial]
async fn delete_removes_the_record() {
    let (app, _db) = make_test_app().await;
    let token = admin_token();
    let agent_id = seed_agent(&app, &token, "EMP001", "10.00").await;
    let site_id = seed_site(&app, &token).await;
    let id = seed_attendance(
        &app,
        &token,
        agent_id,
        site_id,
        json!({ "attendance_date": "2026-01-05" }),
    )
    .await;

    let (status, _) = send(
        &app,
        "DELETE",
        &format!("/api/attendances/{id}"),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(
        &app,
        "GET",
        &format!("/api/attendances/{id}"),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
