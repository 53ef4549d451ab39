//! Payroll generation and payment routes.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use sea_orm::DatabaseConnection;
use services::payroll::{self, GeneratePayroll};

use crate::response::ApiResponse;
use crate::routes::payrolls::common::GeneratePayrollRequest;

/// POST /api/payrolls
///
/// Generate a payroll for one agent over one pay period. Hours are the
/// sum of `present` and `corrected` attendance hours inside the period,
/// priced at the agent's current rate (snapshotted into the payroll).
///
/// ### Request Body
/// ```json
/// {
///   "agent_id": 1,
///   "pay_period_start": "2026-01-01",
///   "pay_period_end": "2026-01-15",
///   "deductions": "20.00"
/// }
/// ```
///
/// ### Responses
/// - `201 Created` with the pending payroll
/// ```json
/// {
///   "success": true,
///   "data": {
///     "id": 1,
///     "agent_id": 1,
///     "total_hours": "15.50",
///     "hourly_rate": "10.00",
///     "gross_pay": "155.00",
///     "deductions": "20.00",
///     "net_pay": "135.00",
///     "payment_status": "pending"
///   },
///   "message": "Payroll generated successfully"
/// }
/// ```
/// - `400 Bad Request` (inverted period, overlapping period, deductions
///   negative or above gross)
/// - `404 Not Found` (unknown agent)
pub async fn generate_payroll(
    State(db): State<DatabaseConnection>,
    Json(req): Json<GeneratePayrollRequest>,
) -> impl IntoResponse {
    let params = GeneratePayroll {
        agent_id: req.agent_id,
        period_start: req.pay_period_start,
        period_end: req.pay_period_end,
        deductions: req.deductions,
    };

    match payroll::generate(&db, params).await {
        Ok(payroll) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(
                payroll,
                "Payroll generated successfully",
            )),
        ),
        Err(e) => crate::routes::common::domain_error_response(e),
    }
}

/// POST /api/payrolls/{payroll_id}/complete
///
/// Mark a pending payroll as paid (admin only). Stamps `paid_at`; the
/// payroll is immutable afterwards.
///
/// ### Responses
/// - `200 OK` with the completed payroll
/// - `404 Not Found`
/// - `409 Conflict` (already completed)
pub async fn complete_payroll(
    State(db): State<DatabaseConnection>,
    Path(payroll_id): Path<i64>,
) -> impl IntoResponse {
    match payroll::mark_completed(&db, payroll_id).await {
        Ok(payroll) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                payroll,
                "Payroll completed successfully",
            )),
        ),
        Err(e) => crate::routes::common::domain_error_response(e),
    }
}
