//! Payroll retrieval routes.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use db::models::Payroll;
use db::models::payroll::{self, PaymentStatus};
use sea_orm::{DatabaseConnection, EntityTrait};
use serde::Deserialize;
use services::queries::{self, Page, PayrollFilter};

use crate::response::ApiResponse;

#[derive(Debug, Deserialize)]
pub struct ListPayrollsQuery {
    pub agent_id: Option<i64>,
    pub status: Option<PaymentStatus>,
    pub page: Option<u64>,
    pub per_page: Option<u64>,
}

/// GET /api/payrolls
///
/// List payrolls in ascending id order. Supports `agent_id` and `status`
/// filters.
pub async fn get_payrolls(
    State(db): State<DatabaseConnection>,
    Query(query): Query<ListPayrollsQuery>,
) -> impl IntoResponse {
    let page = Page::new(query.page, query.per_page);
    let filter = PayrollFilter {
        agent_id: query.agent_id,
        status: query.status,
    };

    match queries::list_payrolls(&db, filter, page).await {
        Ok(payrolls) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                payrolls,
                "Payrolls retrieved successfully",
            )),
        ),
        Err(e) => crate::routes::common::domain_error_response(e),
    }
}

/// GET /api/payrolls/{payroll_id}
pub async fn get_payroll(
    State(db): State<DatabaseConnection>,
    Path(payroll_id): Path<i64>,
) -> impl IntoResponse {
    match Payroll::find_by_id(payroll_id).one(&db).await {
        Ok(Some(payroll)) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                payroll,
                "Payroll retrieved successfully",
            )),
        ),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<payroll::Model>::error("Payroll not found")),
        ),
        Err(e) => crate::routes::common::domain_error_response(e.into()),
    }
}
