//! Attendance editing routes.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;
use db::models::Attendance;
use db::models::attendance;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};

use crate::response::ApiResponse;
use crate::routes::attendances::common::{UpdateAttendanceRequest, resolve_status};

/// PUT /api/attendances/{attendance_id}
///
/// Edit an attendance record. The clock pair in the body replaces the
/// stored one as a whole (omitted fields clear the value) and hours and
/// status are re-derived. A record that the correction workflow already
/// marked `corrected` reverts to whatever the new clock pair derives.
///
/// ### Responses
/// - `200 OK` with the updated record
/// - `400 Bad Request` (invalid clock pair, disallowed explicit status)
/// - `404 Not Found`
pub async fn edit_attendance(
    State(db): State<DatabaseConnection>,
    Path(attendance_id): Path<i64>,
    Json(req): Json<UpdateAttendanceRequest>,
) -> impl IntoResponse {
    let attendance = match Attendance::find_by_id(attendance_id).one(&db).await {
        Ok(Some(attendance)) => attendance,
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::<attendance::Model>::error(
                    "Attendance not found",
                )),
            );
        }
        Err(e) => return crate::routes::common::domain_error_response(e.into()),
    };

    let (total_hours, status) =
        match resolve_status(req.clock_in_time, req.clock_out_time, req.attendance_status) {
            Ok(derived) => derived,
            Err(response) => return response,
        };

    let mut active: attendance::ActiveModel = attendance.into();
    if let Some(date) = req.attendance_date {
        active.attendance_date = Set(date);
    }
    active.clock_in_time = Set(req.clock_in_time);
    active.clock_out_time = Set(req.clock_out_time);
    active.total_hours = Set(total_hours);
    active.attendance_status = Set(status);
    active.updated_at = Set(Utc::now());

    match active.update(&db).await {
        Ok(attendance) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                attendance,
                "Attendance updated successfully",
            )),
        ),
        Err(e) => crate::routes::common::domain_error_response(e.into()),
    }
}
