//! Payroll removal routes.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use sea_orm::DatabaseConnection;
use services::payroll;

use crate::response::{ApiResponse, Empty};

/// DELETE /api/payrolls/{payroll_id}
///
/// Discard a pending payroll, freeing its period for regeneration.
/// Completed payrolls are permanent.
///
/// ### Responses
/// - `200 OK`
/// - `404 Not Found`
/// - `409 Conflict` (already completed)
pub async fn delete_payroll(
    State(db): State<DatabaseConnection>,
    Path(payroll_id): Path<i64>,
) -> impl IntoResponse {
    match payroll::delete(&db, payroll_id).await {
        Ok(()) => (
            StatusCode::OK,
            Json(ApiResponse::success(Empty, "Payroll deleted successfully")),
        ),
        Err(e) => crate::routes::common::domain_error_response(e),
    }
}
