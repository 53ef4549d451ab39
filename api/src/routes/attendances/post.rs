//! Attendance creation routes.

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use chrono::Utc;
use db::models::attendance;
use db::models::{Agent, Site};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};

use crate::response::ApiResponse;
use crate::routes::attendances::common::{CreateAttendanceRequest, resolve_status};

/// POST /api/attendances
///
/// Record an attendance for an agent at a site. Hours and status are
/// derived from the clock pair, never taken from the request.
///
/// ### Request Body
/// ```json
/// {
///   "agent_id": 1,
///   "site_id": 2,
///   "attendance_date": "2026-01-05",
///   "clock_in_time": "2026-01-05T08:00:00Z",
///   "clock_out_time": "2026-01-05T17:00:00Z"
/// }
/// ```
///
/// ### Responses
/// - `201 Created` with the stored record (`total_hours` and
///   `attendance_status` filled in)
/// - `400 Bad Request` (invalid clock pair, disallowed explicit status)
/// - `404 Not Found` (unknown agent or site)
pub async fn create_attendance(
    State(db): State<DatabaseConnection>,
    Json(req): Json<CreateAttendanceRequest>,
) -> impl IntoResponse {
    match Agent::find_by_id(req.agent_id).one(&db).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::<attendance::Model>::error("Agent not found")),
            );
        }
        Err(e) => return crate::routes::common::domain_error_response(e.into()),
    }
    match Site::find_by_id(req.site_id).one(&db).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::<attendance::Model>::error("Site not found")),
            );
        }
        Err(e) => return crate::routes::common::domain_error_response(e.into()),
    }

    let (total_hours, status) =
        match resolve_status(req.clock_in_time, req.clock_out_time, req.attendance_status) {
            Ok(derived) => derived,
            Err(response) => return response,
        };

    let now = Utc::now();
    let result = attendance::ActiveModel {
        agent_id: Set(req.agent_id),
        site_id: Set(req.site_id),
        attendance_date: Set(req.attendance_date),
        clock_in_time: Set(req.clock_in_time),
        clock_out_time: Set(req.clock_out_time),
        total_hours: Set(total_hours),
        attendance_status: Set(status),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(&db)
    .await;

    match result {
        Ok(attendance) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(
                attendance,
                "Attendance recorded successfully",
            )),
        ),
        Err(e) => crate::routes::common::domain_error_response(e.into()),
    }
}
