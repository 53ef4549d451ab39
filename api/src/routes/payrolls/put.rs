//! Payroll editing routes.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use sea_orm::DatabaseConnection;
use services::payroll;

use crate::response::ApiResponse;
use crate::routes::payrolls::common::UpdatePayrollRequest;

/// PUT /api/payrolls/{payroll_id}
///
/// Adjust the deductions of a pending payroll; net pay is recomputed.
/// Completed payrolls cannot be edited.
///
/// ### Responses
/// - `200 OK` with the updated payroll
/// - `400 Bad Request` (deductions negative or above gross)
/// - `404 Not Found`
/// - `409 Conflict` (already completed)
pub async fn edit_payroll(
    State(db): State<DatabaseConnection>,
    Path(payroll_id): Path<i64>,
    Json(req): Json<UpdatePayrollRequest>,
) -> impl IntoResponse {
    match payroll::update_deductions(&db, payroll_id, req.deductions).await {
        Ok(payroll) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                payroll,
                "Payroll updated successfully",
            )),
        ),
        Err(e) => crate::routes::common::domain_error_response(e),
    }
}
