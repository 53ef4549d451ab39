use axum::{Json, http::StatusCode};
use chrono::{DateTime, NaiveDate, Utc};
use db::models::attendance::{self, AttendanceStatus};
use serde::Deserialize;
use services::hours;

use crate::response::ApiResponse;

#[derive(Debug, Deserialize)]
pub struct CreateAttendanceRequest {
    pub agent_id: i64,
    pub site_id: i64,
    pub attendance_date: NaiveDate,
    pub clock_in_time: Option<DateTime<Utc>>,
    pub clock_out_time: Option<DateTime<Utc>>,
    /// Only `"absent"` may be supplied, and only without clock times.
    pub attendance_status: Option<AttendanceStatus>,
}

/// The clock pair is replaced as a whole: an omitted clock field clears the
/// stored value. `attendance_date` is optional and kept when omitted.
#[derive(Debug, Deserialize)]
pub struct UpdateAttendanceRequest {
    pub attendance_date: Option<NaiveDate>,
    pub clock_in_time: Option<DateTime<Utc>>,
    pub clock_out_time: Option<DateTime<Utc>>,
    pub attendance_status: Option<AttendanceStatus>,
}

/// Runs the clock pair through the hours calculator and reconciles the
/// result with an explicitly supplied status.
///
/// An explicit `absent` is accepted when no clock times are present; any
/// other explicit status is refused since it is derived, not chosen.
pub fn resolve_status(
    clock_in: Option<DateTime<Utc>>,
    clock_out: Option<DateTime<Utc>>,
    explicit: Option<AttendanceStatus>,
) -> Result<
    (rust_decimal::Decimal, AttendanceStatus),
    (StatusCode, Json<ApiResponse<attendance::Model>>),
> {
    let (total_hours, derived) = hours::derive(clock_in, clock_out)
        .map_err(crate::routes::common::domain_error_response)?;

    let status = match explicit {
        None => derived,
        Some(AttendanceStatus::Absent) => {
            if clock_in.is_some() || clock_out.is_some() {
                return Err((
                    StatusCode::BAD_REQUEST,
                    Json(ApiResponse::error(
                        "An absent attendance cannot carry clock times",
                    )),
                ));
            }
            AttendanceStatus::Absent
        }
        Some(_) => {
            return Err((
                StatusCode::BAD_REQUEST,
                Json(ApiResponse::error(
                    "attendance_status is derived from the clock times; only \"absent\" may be set explicitly",
                )),
            ));
        }
    };

    Ok((total_hours, status))
}
