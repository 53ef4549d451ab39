//! Correction filing and review routes.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use db::models::correction;
use sea_orm::DatabaseConnection;
use services::corrections::{self, RequestCorrection};
use validator::Validate;

use crate::auth::AuthUser;
use crate::response::ApiResponse;
use crate::routes::corrections::common::{CreateCorrectionRequest, ReviewCorrectionRequest};

/// POST /api/corrections
///
/// File a correction request against an attendance record. The caller
/// identity from the bearer token is stored as `requested_by`, and the
/// attendance's current clock times are snapshotted for the reviewer.
///
/// ### Request Body
/// ```json
/// {
///   "attendance_id": 10,
///   "agent_id": 1,
///   "reason": "forgot to clock out",
///   "requested_clock_out": "2026-01-05T17:00:00Z"
/// }
/// ```
///
/// ### Responses
/// - `201 Created` with the pending correction
/// - `400 Bad Request` (empty reason, unknown attendance or agent)
/// - `409 Conflict` (the attendance already has a pending correction)
pub async fn create_correction(
    State(db): State<DatabaseConnection>,
    AuthUser(claims): AuthUser,
    Json(req): Json<CreateCorrectionRequest>,
) -> impl IntoResponse {
    if let Err(validation_errors) = req.validate() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<correction::Model>::error(
                common::format_validation_errors(&validation_errors),
            )),
        );
    }

    let params = RequestCorrection {
        attendance_id: req.attendance_id,
        agent_id: req.agent_id,
        requested_by: Some(claims.sub),
        reason: req.reason,
        requested_clock_in: req.requested_clock_in,
        requested_clock_out: req.requested_clock_out,
    };

    match corrections::request(&db, params).await {
        Ok(correction) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(
                correction,
                "Correction requested successfully",
            )),
        ),
        Err(e) => crate::routes::common::domain_error_response(e),
    }
}

/// POST /api/corrections/{correction_id}/approve
///
/// Approve a pending correction (admin only). The requested clock times
/// are applied to the attendance, hours are re-derived and the attendance
/// moves to `corrected`. The body is optional and may carry
/// `review_notes`.
///
/// ### Responses
/// - `200 OK` with the approved correction
/// - `400 Bad Request` (the resulting clock pair is invalid; nothing is
///   applied)
/// - `404 Not Found`
/// - `409 Conflict` (already approved or rejected)
pub async fn approve_correction(
    State(db): State<DatabaseConnection>,
    AuthUser(claims): AuthUser,
    Path(correction_id): Path<i64>,
    body: Option<Json<ReviewCorrectionRequest>>,
) -> impl IntoResponse {
    let review_notes = body.and_then(|Json(req)| req.review_notes);

    match corrections::approve(&db, correction_id, Some(claims.sub), review_notes).await {
        Ok(correction) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                correction,
                "Correction approved successfully",
            )),
        ),
        Err(e) => crate::routes::common::domain_error_response(e),
    }
}

/// POST /api/corrections/{correction_id}/reject
///
/// Reject a pending correction (admin only). The attendance record is left
/// untouched.
///
/// ### Responses
/// - `200 OK` with the rejected correction
/// - `404 Not Found`
/// - `409 Conflict` (already approved or rejected)
pub async fn reject_correction(
    State(db): State<DatabaseConnection>,
    AuthUser(claims): AuthUser,
    Path(correction_id): Path<i64>,
    body: Option<Json<ReviewCorrectionRequest>>,
) -> impl IntoResponse {
    let review_notes = body.and_then(|Json(req)| req.review_notes);

    match corrections::reject(&db, correction_id, Some(claims.sub), review_notes).await {
        Ok(correction) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                correction,
                "Correction rejected successfully",
            )),
        ),
        Err(e) => crate::routes::common::domain_error_response(e),
    }
}
