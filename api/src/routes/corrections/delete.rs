//! Correction removal routes.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use sea_orm::DatabaseConnection;
use services::corrections;

use crate::response::{ApiResponse, Empty};

/// DELETE /api/corrections/{correction_id}
///
/// Withdraw a correction that is still pending. Approved and rejected
/// corrections are part of the audit trail and cannot be deleted.
///
/// ### Responses
/// - `200 OK`
/// - `404 Not Found`
/// - `409 Conflict` (already approved or rejected)
pub async fn delete_correction(
    State(db): State<DatabaseConnection>,
    Path(correction_id): Path<i64>,
) -> impl IntoResponse {
    match corrections::delete(&db, correction_id).await {
        Ok(()) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                Empty,
                "Correction deleted successfully",
            )),
        ),
        Err(e) => crate::routes::common::domain_error_response(e),
    }
}
