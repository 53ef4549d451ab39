//! Correction editing routes.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use db::models::correction;
use sea_orm::DatabaseConnection;
use services::corrections::{self, UpdateCorrection};
use validator::Validate;

use crate::response::ApiResponse;
use crate::routes::corrections::common::UpdateCorrectionRequest;

/// PUT /api/corrections/{correction_id}
///
/// Edit the reason or requested clock times of a correction that is still
/// pending. The requested clock pair is replaced as a whole by the body
/// values.
///
/// ### Responses
/// - `200 OK` with the updated correction
/// - `400 Bad Request` (empty reason)
/// - `404 Not Found`
/// - `409 Conflict` (already approved or rejected)
pub async fn edit_correction(
    State(db): State<DatabaseConnection>,
    Path(correction_id): Path<i64>,
    Json(req): Json<UpdateCorrectionRequest>,
) -> impl IntoResponse {
    if let Err(validation_errors) = req.validate() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<correction::Model>::error(
                common::format_validation_errors(&validation_errors),
            )),
        );
    }

    let params = UpdateCorrection {
        reason: req.reason,
        requested_clock_in: Some(req.requested_clock_in),
        requested_clock_out: Some(req.requested_clock_out),
    };

    match corrections::update(&db, correction_id, params).await {
        Ok(correction) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                correction,
                "Correction updated successfully",
            )),
        ),
        Err(e) => crate::routes::common::domain_error_response(e),
    }
}
