//! Attendance removal routes.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use db::models::Attendance;
use sea_orm::{DatabaseConnection, EntityTrait, ModelTrait};

use crate::response::{ApiResponse, Empty};

/// DELETE /api/attendances/{attendance_id}
///
/// Remove an attendance record and any corrections filed against it.
pub async fn delete_attendance(
    State(db): State<DatabaseConnection>,
    Path(attendance_id): Path<i64>,
) -> impl IntoResponse {
    let attendance = match Attendance::find_by_id(attendance_id).one(&db).await {
        Ok(Some(attendance)) => attendance,
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::<Empty>::error("Attendance not found")),
            );
        }
        Err(e) => return crate::routes::common::domain_error_response(e.into()),
    };

    match attendance.delete(&db).await {
        Ok(_) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                Empty,
                "Attendance deleted successfully",
            )),
        ),
        Err(e) => crate::routes::common::domain_error_response(e.into()),
    }
}
