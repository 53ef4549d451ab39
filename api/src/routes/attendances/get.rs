//! Attendance retrieval routes.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::NaiveDate;
use db::models::Attendance;
use db::models::attendance::{self, AttendanceStatus};
use sea_orm::{DatabaseConnection, EntityTrait};
use serde::Deserialize;
use services::queries::{self, AttendanceFilter, Page};

use crate::response::ApiResponse;

#[derive(Debug, Deserialize)]
pub struct ListAttendancesQuery {
    pub agent_id: Option<i64>,
    pub site_id: Option<i64>,
    pub status: Option<AttendanceStatus>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub page: Option<u64>,
    pub per_page: Option<u64>,
}

/// GET /api/attendances
///
/// List attendance records in ascending id order. Supports `agent_id`,
/// `site_id`, `status` and an inclusive `start_date` / `end_date` window
/// on the attendance date.
pub async fn get_attendances(
    State(db): State<DatabaseConnection>,
    Query(query): Query<ListAttendancesQuery>,
) -> impl IntoResponse {
    let page = Page::new(query.page, query.per_page);
    let filter = AttendanceFilter {
        agent_id: query.agent_id,
        site_id: query.site_id,
        status: query.status,
        start_date: query.start_date,
        end_date: query.end_date,
    };

    match queries::list_attendances(&db, filter, page).await {
        Ok(attendances) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                attendances,
                "Attendances retrieved successfully",
            )),
        ),
        Err(e) => crate::routes::common::domain_error_response(e),
    }
}

/// GET /api/attendances/{attendance_id}
pub async fn get_attendance(
    State(db): State<DatabaseConnection>,
    Path(attendance_id): Path<i64>,
) -> impl IntoResponse {
    match Attendance::find_by_id(attendance_id).one(&db).await {
        Ok(Some(attendance)) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                attendance,
                "Attendance retrieved successfully",
            )),
        ),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<attendance::Model>::error(
                "Attendance not found",
            )),
        ),
        Err(e) => crate::routes::common::domain_error_response(e.into()),
    }
}
